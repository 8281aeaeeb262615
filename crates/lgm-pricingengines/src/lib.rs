//! # lgm-pricingengines
//!
//! Pricing on top of simulated Linear Gaussian Markov factors.
//!
//! ## Engines
//!
//! - [`McCapletEngine`] — Monte Carlo caplet under the fixing-date forward measure
//! - [`analytic_caplet_price`] — closed-form caplet as a put on the forward bond
//! - [`forward_bond_martingale_test`] / [`forward_libor_martingale_test`] —
//!   simulated vs analytic expectations under forward measures

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_caplet;
pub mod caplet;
pub mod martingale;
pub mod mc_caplet_engine;

pub use analytic_caplet::analytic_caplet_price;
pub use caplet::Caplet;
pub use martingale::{forward_bond_martingale_test, forward_libor_martingale_test, MartingaleCheck};
pub use mc_caplet_engine::{McCapletEngine, McResult};
