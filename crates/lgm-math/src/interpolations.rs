//! 1D interpolation used by the interpolated yield curves.

use lgm_core::{ensure, Real, Result};

/// Piecewise-linear interpolation with flat extrapolation on both sides.
///
/// `f(x) = y[i] + (y[i+1] − y[i]) · (x − x[i]) / (x[i+1] − x[i])`
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
}

impl LinearInterpolation {
    /// Construct a linear interpolation from strictly increasing `xs`.
    ///
    /// # Errors
    /// `InvalidArgument` if the slices are empty, of different lengths, or
    /// `xs` is not strictly increasing.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        ensure!(!xs.is_empty(), "need at least one point for interpolation");
        ensure!(
            xs.len() == ys.len(),
            "xs and ys must have the same length ({} vs {})",
            xs.len(),
            ys.len()
        );
        ensure!(
            xs.windows(2).all(|w| w[0] < w[1]),
            "interpolation abscissae must be strictly increasing"
        );
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Evaluate at `x`.
    pub fn value(&self, x: Real) -> Real {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[n - 1] {
            return self.ys[n - 1];
        }
        // first node strictly greater than x; 1 <= hi <= n-1 here
        let hi = self.xs.partition_point(|&xi| xi <= x);
        let lo = hi - 1;
        let w = (x - self.xs[lo]) / (self.xs[hi] - self.xs[lo]);
        self.ys[lo] + w * (self.ys[hi] - self.ys[lo])
    }

    /// Interpolation nodes.
    pub fn xs(&self) -> &[Real] {
        &self.xs
    }

    /// Values at the nodes.
    pub fn ys(&self) -> &[Real] {
        &self.ys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linear_interpolation() {
        let interp = LinearInterpolation::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        assert_abs_diff_eq!(interp.value(0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(interp.value(1.5), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(interp.value(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn flat_extrapolation() {
        let interp = LinearInterpolation::new(&[1.0, 2.0], &[3.0, 5.0]).unwrap();
        assert_eq!(interp.value(0.0), 3.0);
        assert_eq!(interp.value(10.0), 5.0);
    }

    #[test]
    fn single_point_is_constant() {
        let interp = LinearInterpolation::new(&[1.0], &[0.02]).unwrap();
        assert_eq!(interp.value(0.5), 0.02);
        assert_eq!(interp.value(3.0), 0.02);
    }

    #[test]
    fn rejects_unsorted_nodes() {
        assert!(LinearInterpolation::new(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]).is_err());
        assert!(LinearInterpolation::new(&[], &[]).is_err());
    }
}
