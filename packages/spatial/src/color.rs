//! Intensity to perceptual color mapping.
//!
//! Maps a normalized intensity to an HSL color along a blue → cyan →
//! green → yellow → red ramp via piecewise linear interpolation between
//! five hand-picked stops. Input outside [0, 1] is a caller precondition:
//! intensity always comes from the log-scale law, which never leaves the
//! unit interval, so no clamping is performed here.

/// A color in HSL space (hue in degrees, saturation/lightness in percent).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue angle, 0-360.
    pub h: f64,
    /// Saturation percentage, 0-100.
    pub s: f64,
    /// Lightness percentage, 0-100.
    pub l: f64,
}

impl Hsl {
    /// Formats as a CSS `hsl()` value for the map layer.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("hsl({:.0}, {:.0}%, {:.0}%)", self.h, self.s, self.l)
    }
}

/// Ramp stops at t = 0, 0.25, 0.5, 0.75, 1.0.
const STOPS: [(f64, Hsl); 5] = [
    (0.0, Hsl { h: 225.0, s: 75.0, l: 60.0 }),
    (0.25, Hsl { h: 185.0, s: 70.0, l: 52.0 }),
    (0.5, Hsl { h: 120.0, s: 62.0, l: 48.0 }),
    (0.75, Hsl { h: 52.0, s: 88.0, l: 54.0 }),
    (1.0, Hsl { h: 4.0, s: 85.0, l: 52.0 }),
];

/// Maps a normalized intensity in [0, 1] to a ramp color.
#[must_use]
pub fn color_for_intensity(intensity: f64) -> Hsl {
    let mut lower = STOPS[0];
    let mut upper = STOPS[STOPS.len() - 1];

    for window in STOPS.windows(2) {
        if intensity >= window[0].0 && intensity <= window[1].0 {
            lower = window[0];
            upper = window[1];
            break;
        }
    }

    let span = upper.0 - lower.0;
    if span <= f64::EPSILON {
        return lower.1;
    }
    let t = (intensity - lower.0) / span;

    Hsl {
        h: lerp(lower.1.h, upper.1.h, t),
        s: lerp(lower.1.s, upper.1.s, t),
        l: lerp(lower.1.l, upper.1.l, t),
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
