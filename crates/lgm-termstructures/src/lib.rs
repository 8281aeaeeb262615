//! # lgm-termstructures
//!
//! Deterministic inputs of the Linear Gaussian Markov model: yield curves
//! and the piecewise-constant term structure used for the volatility.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `PiecewiseTermStructure` — right-continuous step function of time.
pub mod piecewise_term_structure;

/// `YieldCurve` — base trait for discount curves.
pub mod yield_curve;

/// `FlatForward` — constant-yield curve.
pub mod flat_forward;

/// `InterpolatedZeroCurve` — linearly interpolated zero-yield curve.
pub mod interpolated_zero_curve;

/// `SpreadedCurve` — sum of two curves, for building spread curves.
pub mod spreaded_curve;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use flat_forward::FlatForward;
pub use interpolated_zero_curve::InterpolatedZeroCurve;
pub use piecewise_term_structure::{PiecewiseTermStructure, Segment};
pub use spreaded_curve::SpreadedCurve;
pub use yield_curve::YieldCurve;
