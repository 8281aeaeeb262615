//! Black (1976) formula on a forward price.
//!
//! Used to value caplets in closed form as options on the forward
//! zero-coupon bond, the benchmark for Monte Carlo caplet prices.

use crate::distributions::normal_cdf;
use lgm_core::{ensure, DiscountFactor, Real, Result};

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

/// Black price `D · ω (F Φ(ω d₁) − K Φ(ω d₂))` with `ω = ±1`.
///
/// `std_dev` is the total standard deviation `σ√T` of `ln F`.  A zero
/// standard deviation returns the discounted intrinsic value.
///
/// # Errors
/// `InvalidArgument` if the forward or strike is not strictly positive or
/// the standard deviation is negative.
pub fn black_formula(
    option_type: OptionType,
    strike: Real,
    forward: Real,
    std_dev: Real,
    discount: DiscountFactor,
) -> Result<Real> {
    ensure!(forward > 0.0, "forward must be positive, got {forward}");
    ensure!(strike > 0.0, "strike must be positive, got {strike}");
    ensure!(std_dev >= 0.0, "standard deviation must be non-negative, got {std_dev}");

    let w = option_type.sign();
    if std_dev == 0.0 {
        return Ok(discount * (w * (forward - strike)).max(0.0));
    }
    let d1 = (forward / strike).ln() / std_dev + 0.5 * std_dev;
    let d2 = d1 - std_dev;
    Ok(discount * w * (forward * normal_cdf(w * d1) - strike * normal_cdf(w * d2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn put_call_parity() {
        let (k, f, s, d) = (0.97, 1.0, 0.02, 0.95);
        let call = black_formula(OptionType::Call, k, f, s, d).unwrap();
        let put = black_formula(OptionType::Put, k, f, s, d).unwrap();
        assert_abs_diff_eq!(call - put, d * (f - k), epsilon = 1e-14);
    }

    #[test]
    fn at_the_money_value() {
        // ATM: F (2Φ(s/2) − 1)
        let s = 0.2;
        let call = black_formula(OptionType::Call, 1.0, 1.0, s, 1.0).unwrap();
        assert_abs_diff_eq!(call, 2.0 * normal_cdf(0.5 * s) - 1.0, epsilon = 1e-14);
    }

    #[test]
    fn zero_volatility_is_intrinsic() {
        let put = black_formula(OptionType::Put, 1.1, 1.0, 0.0, 0.9).unwrap();
        assert_abs_diff_eq!(put, 0.09, epsilon = 1e-15);
        let call = black_formula(OptionType::Call, 1.1, 1.0, 0.0, 0.9).unwrap();
        assert_eq!(call, 0.0);
    }

    #[test]
    fn rejects_non_positive_strike() {
        assert!(black_formula(OptionType::Call, 0.0, 1.0, 0.1, 1.0).is_err());
        assert!(black_formula(OptionType::Call, 1.0, 1.0, -0.1, 1.0).is_err());
    }
}
