//! Floating-point comparisons for time grids.

use lgm_core::Real;

/// `true` if `a` and `b` differ by at most `n` ulps relative to the larger
/// magnitude.
///
/// Used to treat dates that come out of different arithmetic paths as the
/// same point in time.
#[inline]
pub fn close_enough(a: Real, b: Real, n: u32) -> bool {
    if a == b {
        return true;
    }
    let eps = a.abs().max(b.abs()) * Real::EPSILON * Real::from(n);
    (a - b).abs() <= eps
}
