//! Probability distributions.
//!
//! Only the standard normal is needed by the engine; the CDF delegates to
//! the `statrs` crate and the inverse uses Acklam's rational approximation,
//! which is fast enough to sit inside the Monte Carlo draw loop.

pub mod normal;

pub use normal::{normal_cdf, normal_cdf_inverse, normal_pdf};
