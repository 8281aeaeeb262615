//! `InterpolatedZeroCurve` — a yield curve defined by zero-rate pillars.
//!
//! Zero rates are interpolated linearly in time and extrapolated flat on
//! both sides; discount factors are `P(t) = exp(−z(t)·t)`.

use crate::yield_curve::YieldCurve;
use lgm_core::{Rate, Result, Time};
use lgm_math::LinearInterpolation;

/// A yield curve defined by zero rates at pillar times.
#[derive(Debug, Clone)]
pub struct InterpolatedZeroCurve {
    interp: LinearInterpolation,
}

impl InterpolatedZeroCurve {
    /// Build a zero curve from strictly increasing pillar times and the
    /// continuously-compounded zero rates at those times.
    ///
    /// # Errors
    /// `InvalidArgument` if the pillars are empty, mismatched in length, or
    /// not strictly increasing.
    pub fn new(times: &[Time], rates: &[Rate]) -> Result<Self> {
        Ok(Self {
            interp: LinearInterpolation::new(times, rates)?,
        })
    }

    /// Build from `(time, rate)` pillars.
    pub fn from_pillars(pillars: &[(Time, Rate)]) -> Result<Self> {
        let (times, rates): (Vec<Time>, Vec<Rate>) = pillars.iter().copied().unzip();
        Self::new(&times, &rates)
    }

    /// Pillar times.
    pub fn times(&self) -> &[Time] {
        self.interp.xs()
    }

    /// Pillar zero rates.
    pub fn rates(&self) -> &[Rate] {
        self.interp.ys()
    }
}

impl YieldCurve for InterpolatedZeroCurve {
    fn zero_rate(&self, t: Time) -> Rate {
        self.interp.value(t)
    }
}
