//! Monte Carlo caplet engine.
//!
//! The factor is simulated to the fixing date `T1`, moved to the
//! `T1`-forward measure, and the caplet is valued at `T1` on every path:
//!
//! ```text
//! V(T1) = P(T1, T2; x) · δ · (L(T1; T1, T2; x) − K)⁺
//! ```
//!
//! The price is `P(0, T1) · E^{T1}[V(T1)]`.

use lgm_core::{ensure, Price, Real, Result, Size};
use lgm_math::{GaussianRng, Statistics};
use lgm_methods::{MeasureShifter, PathSimulator, SimulationData, SimulationMode};
use lgm_processes::{CurveName, LinearGaussianMarkov};
use tracing::info;

use crate::caplet::Caplet;

/// Outcome of a Monte Carlo valuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct McResult {
    /// Estimated present value.
    pub price: Price,
    /// Standard error of `price`.
    pub error_estimate: Real,
    /// Number of independent samples (antithetic pairs).
    pub samples: Size,
}

/// Mean and standard error over antithetic pairs `(p, p + N)`.
///
/// The two halves of a pair are not independent, so each pair is averaged
/// into one sample before the error is estimated.
pub(crate) fn antithetic_statistics(values: &[Real]) -> Statistics {
    let (plus, minus) = values.split_at(values.len() / 2);
    plus.iter().zip(minus).map(|(a, b)| 0.5 * (a + b)).collect()
}

/// Values a [`Caplet`] by simulation.
#[derive(Debug, Clone, Copy)]
pub struct McCapletEngine<'a> {
    model: &'a LinearGaussianMarkov,
    paths: Size,
    mode: SimulationMode,
}

impl<'a> McCapletEngine<'a> {
    /// Create an engine drawing `paths` antithetic pairs.
    ///
    /// # Errors
    /// `InvalidArgument` if `paths` is zero.
    pub fn new(model: &'a LinearGaussianMarkov, paths: Size, mode: SimulationMode) -> Result<Self> {
        ensure!(paths > 0, "number of paths must be positive");
        Ok(Self { model, paths, mode })
    }

    /// Caplet value at the fixing date on every stored path, under the
    /// fixing-date forward measure.  Antithetic mirrors follow the
    /// [`SimulationData`] layout.
    pub fn path_payoffs(&self, caplet: &Caplet, rng: &mut dyn GaussianRng) -> Result<Vec<Real>> {
        let forward = self.simulate_forward(caplet, rng)?;
        let (t1, t2) = (caplet.fixing(), caplet.payment());
        let (delta, strike) = (caplet.accrual(), caplet.strike());
        let payoffs: Result<Vec<Real>> = forward
            .factors_at(0, 0)?
            .map(|x| {
                let libor = self.model.libor(t1, t1, t2, x, caplet.libor_curve())?;
                let bond = self.model.bond_price(t1, t2, x, CurveName::Discount)?;
                Ok(bond * delta * (libor - strike).max(0.0))
            })
            .collect();
        payoffs
    }

    /// Price `caplet`.
    pub fn calculate(&self, caplet: &Caplet, rng: &mut dyn GaussianRng) -> Result<McResult> {
        let payoffs = self.path_payoffs(caplet, rng)?;
        let stats = antithetic_statistics(&payoffs);
        let discount = self.model.curve(CurveName::Discount).discount(caplet.fixing());
        let result = McResult {
            price: discount * stats.mean().unwrap_or(0.0),
            error_estimate: discount * stats.error_estimate().unwrap_or(0.0),
            samples: stats.samples(),
        };
        info!(
            fixing = caplet.fixing(),
            payment = caplet.payment(),
            strike = caplet.strike(),
            price = result.price,
            error = result.error_estimate,
            samples = result.samples,
            "monte carlo caplet"
        );
        Ok(result)
    }

    fn simulate_forward(
        &self,
        caplet: &Caplet,
        rng: &mut dyn GaussianRng,
    ) -> Result<SimulationData> {
        let risk_neutral =
            PathSimulator::new(self.model).simulate(self.paths, &[caplet.fixing()], self.mode, rng)?;
        MeasureShifter::new(self.model).shift(caplet.fixing(), &risk_neutral)
    }
}
