//! Shared angle helpers for the Kunda pipeline.

/// Degrees in a full circle.
pub const FULL_CIRCLE_DEG: f64 = 360.0;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % FULL_CIRCLE_DEG;
    // -0.0 and tiny negatives that round up to 360.0 both land on 0.0
    let r = if r < 0.0 { r + FULL_CIRCLE_DEG } else { r };
    if r >= FULL_CIRCLE_DEG { 0.0 } else { r + 0.0 }
}

/// Forward arc from `from` to `to`, in [0, 360).
///
/// A target slightly behind the current point yields an arc close to 360,
/// never a negative one.
pub fn forward_arc(from: f64, to: f64) -> f64 {
    let diff = to - from;
    if diff < 0.0 { diff + FULL_CIRCLE_DEG } else { diff }
}
