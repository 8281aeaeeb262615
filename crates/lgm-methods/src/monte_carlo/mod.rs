//! Monte Carlo simulation of the driving factor `X_t`.
//!
//! # Overview
//!
//! * [`PathSimulator`] — draws risk-neutral factor paths with antithetic
//!   pairing
//! * [`SimulationData`] — `(date, path) → factors` storage
//! * [`MeasureShifter`] — moves risk-neutral paths to a `T`-forward measure
//!
//! A run stores `2N` paths: path `p + N` is the antithetic mirror of path
//! `p` at every date.

mod measure_shifter;
mod path_simulator;
mod simulation_data;

pub use measure_shifter::MeasureShifter;
pub use path_simulator::{PathSimulator, SimulationMode};
pub use simulation_data::SimulationData;
