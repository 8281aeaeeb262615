//! # lgm
//!
//! Monte Carlo pricing under the one-factor Linear Gaussian Markov
//! (Hull-White) short-rate model.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! TOML configuration and logging set-up.  Application code should depend
//! on this crate rather than the individual `lgm-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use lgm::methods::{PathSimulator, SimulationMode};
//! use lgm::LgmConfig;
//!
//! let config = LgmConfig::from_toml_str(
//!     r#"
//!     [model]
//!     mean_reversion = 0.05
//!     volatility = [[0.0, 0.01]]
//!
//!     [simulation]
//!     paths = 1000
//!     "#,
//! )
//! .unwrap();
//! let model = config.build_model().unwrap();
//! let data = PathSimulator::new(&model)
//!     .simulate(config.simulation.paths, &[0.5, 1.0], SimulationMode::StepByStep, &mut config.build_rng())
//!     .unwrap();
//! assert_eq!(data.path_count(), 2000);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use lgm_core as core;

/// Mathematical utilities: kernels, distributions, RNG, statistics.
pub use lgm_math as math;

/// Yield curves and piecewise term structures.
pub use lgm_termstructures as termstructures;

/// The Linear Gaussian Markov process and its closed-form integrals.
pub use lgm_processes as processes;

/// Monte Carlo simulation and measure change.
pub use lgm_methods as methods;

/// Caplet engines and martingale diagnostics.
pub use lgm_pricingengines as pricingengines;

/// TOML configuration.
pub mod config;

/// `tracing` subscriber set-up.
pub mod logging;

pub use config::{ConfigError, LgmConfig, LogLevel};
