//! Mean-reversion kernels shared by the integrals and pricing formulas.
//!
//! The Hull-White model is written in terms of
//!
//! ```text
//! β(λ, u) = (1 − exp(−λu)) / λ
//! ```
//!
//! which has a removable singularity at `λ = 0` (the limit is `u`).  Every
//! closed form in the workspace switches to its λ → 0 limit below
//! [`MEAN_REVERSION_THRESHOLD`].

use lgm_core::{Real, Time};

/// Mean reversions with `|λ| <= MEAN_REVERSION_THRESHOLD` are treated as zero.
pub const MEAN_REVERSION_THRESHOLD: Real = 1.0e-6;

/// The Ornstein-Uhlenbeck kernel `β(λ, u) = (1 − e^{−λu}) / λ`.
///
/// Evaluates to `u` when `|λ|` is below [`MEAN_REVERSION_THRESHOLD`].
/// With a negated, doubled argument it yields the variance of the driving
/// factor: `∫₀ᵗ e^{2λs} ds = beta_ou(−2λ, t)`.
#[inline]
pub fn beta_ou(lambda: Real, u: Time) -> Real {
    if lambda.abs() > MEAN_REVERSION_THRESHOLD {
        -(-lambda * u).exp_m1() / lambda
    } else {
        u
    }
}
