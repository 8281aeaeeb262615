//! Martingale diagnostics for simulated forward measures.
//!
//! Under the `T`-forward measure any price divided by `P(·, T)` is a
//! martingale.  Two consequences are checked against the initial curves:
//!
//! * `E^{t}[P(t, T)] = P(0, T) / P(0, t)`
//! * `E^{end}[L(t; start, end)] = L(0; start, end)` for `t <= start`

use lgm_core::{ensure, Real, Result, Size, Time};
use lgm_math::GaussianRng;
use lgm_methods::{MeasureShifter, PathSimulator, SimulationData, SimulationMode};
use lgm_processes::{CurveName, LinearGaussianMarkov};
use tracing::debug;

use crate::mc_caplet_engine::antithetic_statistics;

/// Simulated expectation next to its analytic value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MartingaleCheck {
    /// Monte Carlo mean.
    pub simulated: Real,
    /// Standard error of `simulated`.
    pub error_estimate: Real,
    /// Value implied by the initial curve.
    pub analytic: Real,
}

impl MartingaleCheck {
    /// `|simulated − analytic|` in units of the standard error.
    pub fn deviation(&self) -> Real {
        if self.error_estimate > 0.0 {
            (self.simulated - self.analytic).abs() / self.error_estimate
        } else if self.simulated == self.analytic {
            0.0
        } else {
            Real::INFINITY
        }
    }
}

fn simulate_shifted(
    model: &LinearGaussianMarkov,
    t: Time,
    measure: Time,
    paths: Size,
    mode: SimulationMode,
    rng: &mut dyn GaussianRng,
) -> Result<SimulationData> {
    let risk_neutral = PathSimulator::new(model).simulate(paths, &[t], mode, rng)?;
    MeasureShifter::new(model).shift(measure, &risk_neutral)
}

/// Mean of `P(t, T)` on the discount curve under the `t`-forward measure.
///
/// # Errors
/// `InvalidArgument` unless `0 < t <= T`.
pub fn forward_bond_martingale_test(
    model: &LinearGaussianMarkov,
    t: Time,
    maturity: Time,
    paths: Size,
    mode: SimulationMode,
    rng: &mut dyn GaussianRng,
) -> Result<MartingaleCheck> {
    ensure!(
        t > 0.0 && t <= maturity,
        "bond martingale test needs 0 < t <= T, got t = {t}, T = {maturity}"
    );
    let forward = simulate_shifted(model, t, t, paths, mode, rng)?;
    let prices = forward
        .factors_at(0, 0)?
        .map(|x| model.bond_price(t, maturity, x, CurveName::Discount))
        .collect::<Result<Vec<_>>>()?;
    let stats = antithetic_statistics(&prices);

    let check = MartingaleCheck {
        simulated: stats.mean().unwrap_or(0.0),
        error_estimate: stats.error_estimate().unwrap_or(0.0),
        analytic: model.curve(CurveName::Discount).forward_discount(t, maturity),
    };
    debug!(t, maturity, ?check, "forward bond martingale");
    Ok(check)
}

/// Mean of `L(t; start, end)` projected from `curve` under the
/// `end`-forward measure.
///
/// # Errors
/// `InvalidArgument` unless `0 < t <= start < end`.
#[allow(clippy::too_many_arguments)]
pub fn forward_libor_martingale_test(
    model: &LinearGaussianMarkov,
    t: Time,
    start: Time,
    end: Time,
    curve: CurveName,
    paths: Size,
    mode: SimulationMode,
    rng: &mut dyn GaussianRng,
) -> Result<MartingaleCheck> {
    ensure!(
        t > 0.0 && t <= start && start < end,
        "Libor martingale test needs 0 < t <= start < end, got t = {t}, [{start}, {end}]"
    );
    let forward = simulate_shifted(model, t, end, paths, mode, rng)?;
    let rates = forward
        .factors_at(0, 0)?
        .map(|x| model.libor(t, start, end, x, curve))
        .collect::<Result<Vec<_>>>()?;
    let stats = antithetic_statistics(&rates);

    let check = MartingaleCheck {
        simulated: stats.mean().unwrap_or(0.0),
        error_estimate: stats.error_estimate().unwrap_or(0.0),
        analytic: model.curve(curve).forward_rate(start, end),
    };
    debug!(t, start, end, ?curve, ?check, "forward Libor martingale");
    Ok(check)
}
