//! # lgm-methods
//!
//! Monte Carlo machinery for the Linear Gaussian Markov model.
//!
//! # Modules
//!
//! * [`monte_carlo`] — factor path simulation, the simulated-data container
//!   and the change to a `T`-forward measure

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Monte Carlo simulation: factor paths, storage, measure change.
pub mod monte_carlo;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use monte_carlo::{MeasureShifter, PathSimulator, SimulationData, SimulationMode};
