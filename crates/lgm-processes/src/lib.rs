//! # lgm-processes
//!
//! The one-factor Linear Gaussian Markov (Hull-White) short-rate process.
//!
//! The driving factor is
//!
//! ```text
//! X_t = ∫₀ᵗ a(s) dW_s,    a(s) = σ(s)·e^{λs}
//! ```
//!
//! with a piecewise-constant volatility `σ(·)` and mean reversion `λ`.
//! [`TermIntegrator`] evaluates the closed-form integrals of `a(s)²` the
//! model needs; [`LinearGaussianMarkov`] reconstructs bond prices and Libor
//! rates from a realised factor value.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod linear_gaussian_markov;
pub mod term_integrator;

pub use linear_gaussian_markov::{CurveName, LinearGaussianMarkov};
pub use term_integrator::TermIntegrator;
