//! Log-scaled display intensity shared by grid and area aggregation.
//!
//! Raw counts over-saturate dense districts: a downtown cell with 400
//! photos would flatten every suburban cell to invisibility on a linear
//! ramp. Scaling by `ln(count + 1) / ln(max_count + 1)` keeps the full
//! [0, 1] range usable and pins the busiest cell at exactly 1.0.

/// Computes the display intensity for a cell count within a run.
///
/// Returns `0.0` when `max_count` is zero; otherwise a value in [0, 1],
/// with `count == max_count` yielding exactly `1.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn scale(count: usize, max_count: usize) -> f64 {
    if max_count == 0 {
        return 0.0;
    }
    (count as f64).ln_1p() / (max_count as f64).ln_1p()
}
