//! `FlatForward` — a yield curve with a constant continuously-compounded
//! rate.

use crate::yield_curve::YieldCurve;
use lgm_core::{DiscountFactor, Rate, Time};

/// A flat yield curve, `P(0, t) = exp(−r·t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatForward {
    rate: Rate,
}

impl FlatForward {
    /// Create a flat curve at the continuously-compounded `rate`.
    pub fn new(rate: Rate) -> Self {
        Self { rate }
    }

    /// The flat rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl From<Rate> for FlatForward {
    fn from(rate: Rate) -> Self {
        Self::new(rate)
    }
}

impl YieldCurve for FlatForward {
    fn zero_rate(&self, _t: Time) -> Rate {
        self.rate
    }

    fn discount(&self, t: Time) -> DiscountFactor {
        (-self.rate * t).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn flat_forward_discount() {
        let curve = FlatForward::new(0.05);
        assert_abs_diff_eq!(curve.discount(0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(curve.discount(1.0), (-0.05_f64).exp(), epsilon = 1e-15);
        assert_abs_diff_eq!(curve.discount(10.0), (-0.5_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn flat_forward_zero_rate() {
        let curve: FlatForward = 0.03.into();
        assert_eq!(curve.zero_rate(0.5), 0.03);
        assert_eq!(curve.zero_rate(5.0), 0.03);
    }

    #[test]
    fn flat_forward_simple_forward_rate() {
        let curve = FlatForward::new(0.04);
        let expected = ((0.04_f64 * 0.5).exp() - 1.0) / 0.5;
        assert_abs_diff_eq!(curve.forward_rate(1.0, 1.5), expected, epsilon = 1e-14);
        assert_abs_diff_eq!(
            curve.forward_discount(1.0, 1.5),
            (-0.02_f64).exp(),
            epsilon = 1e-15
        );
    }
}
