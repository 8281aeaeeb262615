use lgm_core::{ensure, Result, Time};
use lgm_math::close_enough;
use lgm_processes::LinearGaussianMarkov;
use tracing::info;

use super::SimulationData;

/// Moves risk-neutral factor paths to the `T`-forward measure.
///
/// Under the `T`-forward measure `X^T_t = X_t − bracket(t, T)`; the shift
/// is deterministic per date, so the Gaussian draws of a run are reused
/// as they are.
#[derive(Debug, Clone, Copy)]
pub struct MeasureShifter<'a> {
    model: &'a LinearGaussianMarkov,
}

impl<'a> MeasureShifter<'a> {
    /// Create a shifter for `model`.
    pub fn new(model: &'a LinearGaussianMarkov) -> Self {
        Self { model }
    }

    /// A copy of `risk_neutral` expressed under the `maturity`-forward
    /// measure.
    ///
    /// # Errors
    /// `InvalidArgument` if `maturity` is not finite or a simulated date lies
    /// after it.
    pub fn shift(&self, maturity: Time, risk_neutral: &SimulationData) -> Result<SimulationData> {
        ensure!(
            maturity.is_finite(),
            "forward measure maturity must be finite, got {maturity}"
        );
        let dates = risk_neutral.dates();
        let last = dates[dates.len() - 1];
        ensure!(
            last <= maturity || close_enough(last, maturity, 42),
            "simulated date {last} lies after the forward measure maturity {maturity}"
        );

        let mut shifted = risk_neutral.clone();
        for (k, &t) in dates.iter().enumerate() {
            let drift = self.model.integrator().bracket(t, maturity);
            shifted
                .date_block_mut(k)?
                .iter_mut()
                .for_each(|x| *x -= drift);
        }

        info!(
            maturity,
            paths = shifted.path_count(),
            dates = shifted.date_count(),
            "paths shifted to forward measure"
        );
        Ok(shifted)
    }
}
