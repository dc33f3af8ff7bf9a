//! Metric-to-degree conversion for grid cell sizing.
//!
//! Converts a metric distance to latitude/longitude degree deltas at a
//! representative latitude. Longitude-degree size shrinks with latitude, so
//! the caller supplies the reference latitude (typically the bounding-box
//! center) and reuses it for the whole run rather than recomputing per point,
//! which would drift cell sizes within a single grid.

/// Meters per degree of latitude (mean, spherical approximation).
const METERS_PER_LAT_DEGREE: f64 = 111_320.0;

/// Converts a metric distance to a latitude degree delta.
#[must_use]
pub fn meters_to_lat_degrees(meters: f64) -> f64 {
    meters / METERS_PER_LAT_DEGREE
}

/// Converts a metric distance to a longitude degree delta at `at_latitude_deg`.
///
/// Degenerate input (`cos(lat) == 0`, i.e. `lat == ±90°`) yields `+inf`; that
/// is out of scope for a terrestrial photo app and is not specially handled.
#[must_use]
pub fn meters_to_lng_degrees(meters: f64, at_latitude_deg: f64) -> f64 {
    meters / (METERS_PER_LAT_DEGREE * at_latitude_deg.to_radians().cos())
}
