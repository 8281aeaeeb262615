//! Closed-form caplet price.
//!
//! A caplet paying `δ(L − K)⁺` at `T2` is worth, at `T1`,
//! `(1 + δK)·(K' − P(T1,T2))⁺·c` with `K' = 1/(1 + δK)` and `c` the
//! deterministic ratio between the discount and forward bonds.  `P(T1,T2)`
//! is lognormal under the `T1`-forward measure with log-variance
//!
//! ```text
//! v² = (β(T2) − β(T1))² · ∫₀^{T1} a(s)² ds
//! ```
//!
//! so the caplet is a Black put on the forward bond.

use lgm_core::{Price, Result};
use lgm_math::{black_formula, OptionType};
use lgm_processes::{CurveName, LinearGaussianMarkov};

use crate::caplet::Caplet;

/// Present value of `caplet` under `model`.
///
/// Valid for flat and term-structured volatility and for a forward curve
/// that differs from the discount curve.
pub fn analytic_caplet_price(model: &LinearGaussianMarkov, caplet: &Caplet) -> Result<Price> {
    let (t1, t2) = (caplet.fixing(), caplet.payment());
    let delta = caplet.accrual();
    let growth = 1.0 + delta * caplet.strike();

    let forward_bond = model.curve(caplet.libor_curve()).forward_discount(t1, t2);
    let discount = model.curve(CurveName::Discount).discount(t2) / forward_bond;
    let std_dev = (model.beta(t2) - model.beta(t1)).abs() * model.factor_variance(t1).sqrt();

    let put = black_formula(OptionType::Put, 1.0 / growth, forward_bond, std_dev, discount)?;
    Ok(growth * put)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lgm_core::Real;
    use lgm_termstructures::{FlatForward, PiecewiseTermStructure, SpreadedCurve, YieldCurve};
    use std::sync::Arc;

    fn model(sigma: Real) -> LinearGaussianMarkov {
        LinearGaussianMarkov::new(
            Arc::new(FlatForward::new(0.03)),
            0.05,
            PiecewiseTermStructure::flat(sigma),
        )
    }

    #[test]
    fn zero_volatility_is_discounted_intrinsic() {
        let m = model(0.0);
        let caplet = Caplet::new(1.0, 1.5, 0.02).unwrap();
        let curve = m.curve(CurveName::Forward);
        let expected = curve.discount(1.5) * 0.5 * (curve.forward_rate(1.0, 1.5) - 0.02);
        assert_relative_eq!(
            analytic_caplet_price(&m, &caplet).unwrap(),
            expected,
            max_relative = 1e-12
        );
        let otm = Caplet::new(1.0, 1.5, 0.05).unwrap();
        assert_eq!(analytic_caplet_price(&m, &otm).unwrap(), 0.0);
    }

    #[test]
    fn price_increases_with_volatility() {
        let caplet = Caplet::new(1.0, 1.5, 0.03).unwrap();
        let low = analytic_caplet_price(&model(0.005), &caplet).unwrap();
        let high = analytic_caplet_price(&model(0.015), &caplet).unwrap();
        assert!(low > 0.0);
        assert!(high > low);
    }

    #[test]
    fn spread_curve_raises_the_caplet() {
        let base: Arc<dyn YieldCurve> = Arc::new(FlatForward::new(0.03));
        let single = LinearGaussianMarkov::new(
            Arc::clone(&base),
            0.05,
            PiecewiseTermStructure::flat(0.01),
        );
        let two_curve = single.clone().with_forward_curve(Arc::new(
            SpreadedCurve::with_constant_spread(base, 0.01),
        ));
        let caplet = Caplet::new(1.0, 1.5, 0.03).unwrap();
        assert!(
            analytic_caplet_price(&two_curve, &caplet).unwrap()
                > analytic_caplet_price(&single, &caplet).unwrap()
        );
    }
}
