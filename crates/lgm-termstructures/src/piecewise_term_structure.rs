//! `PiecewiseTermStructure` — a right-continuous step function of time.
//!
//! Breakpoints `T_0 < T_1 < … < T_{n−1}` carry values `v_0 … v_{n−1}`:
//!
//! ```text
//! f(t) = v_0        for t < T_1          (including t < T_0)
//! f(t) = v_i        for T_i <= t < T_{i+1}
//! f(t) = v_{n−1}    for t >= T_{n−1}     (flat extrapolation)
//! ```
//!
//! A single breakpoint describes a flat parameter.

use lgm_core::{ensure, Real, Result, Time};

/// A piecewise-constant, càdlàg function of time.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseTermStructure {
    times: Vec<Time>,
    values: Vec<Real>,
}

/// One constant piece of a [`PiecewiseTermStructure`].
///
/// The first segment starts at `−∞` and the last one ends at `+∞`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Left end (inclusive).
    pub start: Time,
    /// Right end (exclusive).
    pub end: Time,
    /// Value on `[start, end)`.
    pub value: Real,
}

impl PiecewiseTermStructure {
    /// Build a term structure from breakpoint times and values.
    ///
    /// # Errors
    /// `InvalidArgument` if the inputs are empty or of different lengths,
    /// the first time is negative, the times are not strictly increasing, or
    /// a time or value is not finite.
    pub fn new(times: Vec<Time>, values: Vec<Real>) -> Result<Self> {
        ensure!(!times.is_empty(), "term structure needs at least one breakpoint");
        ensure!(
            times.len() == values.len(),
            "breakpoint times and values must have the same length ({} vs {})",
            times.len(),
            values.len()
        );
        ensure!(
            times.iter().chain(&values).all(|x| x.is_finite()),
            "term structure breakpoints must be finite"
        );
        ensure!(times[0] >= 0.0, "first breakpoint must be >= 0, got {}", times[0]);
        ensure!(
            times.windows(2).all(|w| w[0] < w[1]),
            "breakpoint times must be strictly increasing"
        );
        Ok(Self { times, values })
    }

    /// Build from `(time, value)` pairs.
    pub fn from_pairs(pairs: &[(Time, Real)]) -> Result<Self> {
        let (times, values) = pairs.iter().copied().unzip();
        Self::new(times, values)
    }

    /// A flat (non term-structured) parameter.
    pub fn flat(value: Real) -> Self {
        Self {
            times: vec![0.0],
            values: vec![value],
        }
    }

    /// Breakpoint times.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Breakpoint values.
    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always `false`; construction guarantees at least one breakpoint.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// `true` if there is more than one breakpoint.
    pub fn is_term_structure(&self) -> bool {
        self.times.len() > 1
    }

    /// Value of the step function at `t`.
    pub fn value(&self, t: Time) -> Real {
        let i = self.times.partition_point(|&ti| ti <= t);
        self.values[i.saturating_sub(1)]
    }

    /// The constant pieces, in time order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.times.len();
        self.values.iter().enumerate().map(move |(i, &value)| Segment {
            start: if i == 0 { Time::NEG_INFINITY } else { self.times[i] },
            end: if i + 1 < n { self.times[i + 1] } else { Time::INFINITY },
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PiecewiseTermStructure {
        PiecewiseTermStructure::new(vec![0.5, 1.0, 2.0], vec![0.01, 0.02, 0.015]).unwrap()
    }

    #[test]
    fn step_function_is_right_continuous() {
        let ts = sample();
        assert_eq!(ts.value(0.0), 0.01);
        assert_eq!(ts.value(0.99), 0.01);
        assert_eq!(ts.value(1.0), 0.02);
        assert_eq!(ts.value(1.5), 0.02);
        assert_eq!(ts.value(2.0), 0.015);
        assert_eq!(ts.value(50.0), 0.015);
    }

    #[test]
    fn flat_is_not_term_structure() {
        let flat = PiecewiseTermStructure::flat(0.01);
        assert!(!flat.is_term_structure());
        assert_eq!(flat.value(10.0), 0.01);
        assert!(sample().is_term_structure());
    }

    #[test]
    fn segments_cover_the_real_line() {
        let segs: Vec<Segment> = sample().segments().collect();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].start, Time::NEG_INFINITY);
        assert_eq!(segs[0].end, 1.0);
        assert_eq!(segs[1], Segment { start: 1.0, end: 2.0, value: 0.02 });
        assert_eq!(segs[2].end, Time::INFINITY);
        assert_eq!(segs[2].value, 0.015);
    }

    #[test]
    fn rejects_invalid_breakpoints() {
        assert!(PiecewiseTermStructure::new(vec![], vec![]).is_err());
        assert!(PiecewiseTermStructure::new(vec![0.0, 1.0], vec![0.01]).is_err());
        assert!(PiecewiseTermStructure::new(vec![0.0, 1.0, 1.0], vec![0.1; 3]).is_err());
        assert!(PiecewiseTermStructure::new(vec![-1.0], vec![0.1]).is_err());
        assert!(PiecewiseTermStructure::new(vec![0.0], vec![Real::NAN]).is_err());
    }

    #[test]
    fn from_pairs_matches_new() {
        let ts = PiecewiseTermStructure::from_pairs(&[(0.5, 0.01), (1.0, 0.02), (2.0, 0.015)])
            .unwrap();
        assert_eq!(ts, sample());
    }
}
