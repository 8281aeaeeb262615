//! # lgm-math
//!
//! Mathematical utilities for the Linear Gaussian Markov engine: the
//! mean-reversion kernel `beta_ou`, ulp comparisons, linear interpolation,
//! the normal distribution (via statrs), the Black formula, Gaussian random
//! number generators and a running statistics accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Black (1976) formula on a forward.
pub mod black_formula;

/// Ulp-based floating-point comparison.
pub mod comparison;

/// Probability distributions.
pub mod distributions;

/// Mean-reversion kernels.
pub mod functions;

/// 1D interpolation.
pub mod interpolations;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use black_formula::{black_formula, OptionType};
pub use comparison::close_enough;
pub use distributions::{normal_cdf, normal_cdf_inverse, normal_pdf};
pub use functions::{beta_ou, MEAN_REVERSION_THRESHOLD};
pub use interpolations::LinearInterpolation;
pub use random_numbers::{
    DistributionRng, GaussianRng, InverseCumulativeNormalRng, MersenneTwisterUniformRng,
};
pub use statistics::Statistics;
