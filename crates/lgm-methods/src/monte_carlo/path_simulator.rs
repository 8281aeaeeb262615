use lgm_core::{ensure, fail, Error, Real, Result, Size, Time};
use lgm_math::GaussianRng;
use lgm_processes::LinearGaussianMarkov;
use tracing::{debug, info};

use super::SimulationData;

/// Order in which Gaussian draws are consumed.
///
/// Both orders give the same distribution; they differ only in which draw
/// lands on which `(date, path)` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimulationMode {
    /// All paths advance one date at a time; the draw for `(step, path)`
    /// is number `path + N·step`.
    #[default]
    StepByStep,
    /// Each path runs to the last date before the next one starts; the draw
    /// for `(step, path)` is number `path·steps + step`.
    PathByPath,
}

/// Simulates `X_t = ∫₀ᵗ a(u) dW_u` under the risk-neutral measure.
///
/// Paths are built cumulatively: the increment between consecutive dates is
/// an independent Gaussian with variance
/// [`variance(t_{k−1}, t_k)`](lgm_processes::TermIntegrator::variance).
/// Every run of `N` paths stores `2N`, with path `p + N` holding `−X` of
/// path `p`.
#[derive(Debug, Clone, Copy)]
pub struct PathSimulator<'a> {
    model: &'a LinearGaussianMarkov,
}

impl<'a> PathSimulator<'a> {
    /// Create a simulator for `model`.
    pub fn new(model: &'a LinearGaussianMarkov) -> Self {
        Self { model }
    }

    /// Simulate `paths` antithetic pairs on `tenors`.
    ///
    /// # Errors
    /// Nothing is drawn on failure.  `InvalidArgument` if `paths` is zero or
    /// too large to store, or `tenors` is empty, not finite, not positive or
    /// not strictly increasing.  `Runtime` if a step variance is negative or not finite.
    pub fn simulate(
        &self,
        paths: Size,
        tenors: &[Time],
        mode: SimulationMode,
        rng: &mut dyn GaussianRng,
    ) -> Result<SimulationData> {
        ensure!(paths > 0, "number of paths must be positive");
        let stored = paths.checked_mul(2).ok_or_else(|| {
            Error::InvalidArgument(format!("{paths} antithetic pairs cannot be stored"))
        })?;
        ensure!(!tenors.is_empty(), "tenor list must not be empty");
        ensure!(
            tenors.iter().all(|t| t.is_finite() && *t > 0.0),
            "tenors must be finite and positive"
        );
        ensure!(
            tenors.windows(2).all(|w| w[0] < w[1]),
            "tenors must be strictly increasing"
        );
        debug!(
            paths,
            dates = tenors.len(),
            ?mode,
            mean_reversion = self.model.mean_reversion(),
            "simulating factor paths"
        );

        let std_devs = self.step_std_devs(tenors)?;
        let mut data = SimulationData::new(tenors.to_vec(), stored, 1)?;
        match mode {
            SimulationMode::StepByStep => Self::step_by_step(&mut data, paths, &std_devs, rng)?,
            SimulationMode::PathByPath => Self::path_by_path(&mut data, paths, &std_devs, rng)?,
        }

        info!(
            paths = data.path_count(),
            dates = data.date_count(),
            horizon = tenors[tenors.len() - 1],
            "factor simulation done"
        );
        Ok(data)
    }

    fn step_by_step(
        data: &mut SimulationData,
        paths: Size,
        std_devs: &[Real],
        rng: &mut dyn GaussianRng,
    ) -> Result<()> {
        let mut x = vec![0.0; paths];
        for (step, std_dev) in std_devs.iter().enumerate() {
            for (path, xp) in x.iter_mut().enumerate() {
                *xp += std_dev * rng.next_gaussian();
                data.put(step, path, &[*xp])?;
                data.put(step, path + paths, &[-*xp])?;
            }
        }
        Ok(())
    }

    fn path_by_path(
        data: &mut SimulationData,
        paths: Size,
        std_devs: &[Real],
        rng: &mut dyn GaussianRng,
    ) -> Result<()> {
        for path in 0..paths {
            let mut x = 0.0;
            for (step, std_dev) in std_devs.iter().enumerate() {
                x += std_dev * rng.next_gaussian();
                data.put(step, path, &[x])?;
                data.put(step, path + paths, &[-x])?;
            }
        }
        Ok(())
    }

    /// Standard deviation of every increment, from `0` to the last tenor.
    pub fn step_std_devs(&self, tenors: &[Time]) -> Result<Vec<Real>> {
        let mut previous = 0.0;
        tenors
            .iter()
            .map(|&t| {
                let sd = self.step_std_dev(previous, t);
                previous = t;
                sd
            })
            .collect()
    }

    fn step_std_dev(&self, from: Time, to: Time) -> Result<Real> {
        let variance = self.model.integrator().variance(from, to);
        if !(variance.is_finite() && variance >= 0.0) {
            fail!("factor variance over [{from}, {to}] is {variance}");
        }
        Ok(variance.sqrt())
    }
}
