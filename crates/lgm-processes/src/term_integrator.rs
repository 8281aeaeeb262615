//! Closed-form integrals of the squared factor volatility.
//!
//! With `a(s) = σ(s)·e^{λs}` and `β(u) = (1 − e^{−λu})/λ`, the model needs
//!
//! ```text
//! bracket(t, T)            = ∫₀ᵗ a(s)² (β(T) − β(s)) ds
//! deterministic_part(t, T) = ∫₀ᵗ a(s)² (β(t) + β(T) − 2β(s)) ds
//! variance(s, t)           = ∫ₛᵗ a(u)² du
//! ```
//!
//! `σ` is piecewise constant, so each integral is a sum of per-segment
//! closed forms.  Every closed form has an exponential branch for
//! `|λ| > ε` and a polynomial branch (the λ → 0 limit) otherwise, with
//! `ε =` [`MEAN_REVERSION_THRESHOLD`].

use lgm_core::{Real, Time};
use lgm_math::MEAN_REVERSION_THRESHOLD;
use lgm_termstructures::PiecewiseTermStructure;

/// Integrates `a(s)²`-weighted kernels over a piecewise-constant volatility.
///
/// The integrals are total functions of their arguments; ordering
/// preconditions such as `t <= T` are enforced by the callers in
/// [`LinearGaussianMarkov`](crate::LinearGaussianMarkov).
#[derive(Debug, Clone, PartialEq)]
pub struct TermIntegrator {
    sigma: PiecewiseTermStructure,
    lambda: Real,
}

/// `e^{kb} − e^{ka}` without cancellation for small `k(b − a)`.
#[inline]
fn exp_diff(k: Real, a: Time, b: Time) -> Real {
    (k * a).exp() * (k * (b - a)).exp_m1()
}

impl TermIntegrator {
    /// Create an integrator for volatility `sigma` and mean reversion
    /// `lambda`.
    pub fn new(sigma: PiecewiseTermStructure, lambda: Real) -> Self {
        Self { sigma, lambda }
    }

    /// The volatility term structure.
    pub fn sigma(&self) -> &PiecewiseTermStructure {
        &self.sigma
    }

    /// The mean reversion `λ`.
    pub fn mean_reversion(&self) -> Real {
        self.lambda
    }

    /// `true` when the λ → 0 formulas are used.
    pub fn has_zero_mean_reversion(&self) -> bool {
        self.lambda.abs() <= MEAN_REVERSION_THRESHOLD
    }

    /// Covariation of `X_t` with `ln P(·, T)`, the drift removed when
    /// moving from the risk-neutral to the `T`-forward measure.
    ///
    /// Per segment `[a, b]` with volatility `σ`:
    ///
    /// ```text
    /// |λ| > ε :  σ²/λ² · [ (e^{λb} − e^{λa}) − ½ e^{−λT} (e^{2λb} − e^{2λa}) ]
    /// |λ| ≤ ε :  σ² (b − a) (T − (a + b)/2)
    /// ```
    pub fn bracket(&self, t: Time, big_t: Time) -> Real {
        let l = self.lambda;
        if self.has_zero_mean_reversion() {
            self.integrate(0.0, t, |var, a, b| var * (b - a) * (big_t - 0.5 * (a + b)))
        } else {
            let decay = (-l * big_t).exp();
            self.integrate(0.0, t, |var, a, b| {
                var / (l * l) * (exp_diff(l, a, b) - 0.5 * decay * exp_diff(2.0 * l, a, b))
            })
        }
    }

    /// Variance term of the bond reconstruction formula.
    ///
    /// Per segment `[a, b]` with volatility `σ`:
    ///
    /// ```text
    /// |λ| > ε :  σ²/(2λ²) · [ 4 (e^{λb} − e^{λa}) − (e^{−λt} + e^{−λT}) (e^{2λb} − e^{2λa}) ]
    /// |λ| ≤ ε :  σ² (b − a) (t + T − (a + b))
    /// ```
    pub fn deterministic_part(&self, t: Time, big_t: Time) -> Real {
        let l = self.lambda;
        if self.has_zero_mean_reversion() {
            self.integrate(0.0, t, |var, a, b| var * (b - a) * (t + big_t - (a + b)))
        } else {
            let decay = (-l * t).exp() + (-l * big_t).exp();
            self.integrate(0.0, t, |var, a, b| {
                0.5 * var / (l * l) * (4.0 * exp_diff(l, a, b) - decay * exp_diff(2.0 * l, a, b))
            })
        }
    }

    /// Variance of the factor increment `X_t − X_s`, `∫ₛᵗ a(u)² du`.
    ///
    /// For flat `σ` this is `σ² (beta_ou(−2λ, t) − beta_ou(−2λ, s))`.
    pub fn variance(&self, s: Time, t: Time) -> Real {
        let l = self.lambda;
        if self.has_zero_mean_reversion() {
            self.integrate(s, t, |var, a, b| var * (b - a))
        } else {
            self.integrate(s, t, |var, a, b| var * exp_diff(2.0 * l, a, b) / (2.0 * l))
        }
    }

    /// Sum `segment(σ_i², a_i, b_i)` over the pieces of `σ` that overlap
    /// `[from, to]`, each clipped to that interval.
    ///
    /// The first piece starts at `−∞`, so it also covers any stretch before
    /// the first breakpoint; interior pieces are taken whole; the last piece
    /// ends at `+∞`, so it is truncated at `to` or extrapolated flat past
    /// the last breakpoint.  Returns 0 for an empty interval.
    pub fn integrate<F>(&self, from: Time, to: Time, segment: F) -> Real
    where
        F: Fn(Real, Time, Time) -> Real,
    {
        if !(to > from) {
            return 0.0;
        }
        self.sigma
            .segments()
            .take_while(|seg| seg.start < to)
            .filter_map(|seg| {
                let a = seg.start.max(from);
                let b = seg.end.min(to);
                (a < b).then(|| segment(seg.value * seg.value, a, b))
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use lgm_math::beta_ou;
    use proptest::prelude::*;

    fn flat(sigma: Real, lambda: Real) -> TermIntegrator {
        TermIntegrator::new(PiecewiseTermStructure::flat(sigma), lambda)
    }

    fn stepped(lambda: Real) -> TermIntegrator {
        let sigma = PiecewiseTermStructure::new(
            vec![0.25, 1.0, 2.5, 4.0],
            vec![0.012, 0.008, 0.015, 0.01],
        )
        .unwrap();
        TermIntegrator::new(sigma, lambda)
    }

    /// Composite Simpson rule on `[a, b]`, split at the breakpoints of `σ`.
    fn quadrature(ti: &TermIntegrator, a: Real, b: Real, f: impl Fn(Real) -> Real) -> Real {
        let mut knots = vec![a];
        knots.extend(ti.sigma().times().iter().copied().filter(|&x| x > a && x < b));
        knots.push(b);
        let n = 2_000;
        knots
            .windows(2)
            .map(|w| {
                let h = (w[1] - w[0]) / n as Real;
                // nudge the end nodes so σ is read from this piece
                let g = |k: usize| f((w[0] + k as Real * h).clamp(w[0] + 1e-12, w[1] - 1e-12));
                let mut sum = g(0) + g(n);
                for k in 1..n {
                    sum += if k % 2 == 1 { 4.0 } else { 2.0 } * g(k);
                }
                sum * h / 3.0
            })
            .sum()
    }

    fn a2(ti: &TermIntegrator, s: Real) -> Real {
        let v = ti.sigma().value(s);
        v * v * (2.0 * ti.mean_reversion() * s).exp()
    }

    #[test]
    fn flat_bracket_closed_form() {
        let (s, l, t, big_t) = (0.01_f64, 0.05_f64, 0.75_f64, 1.0_f64);
        let expected = s * s / (l * l)
            * ((l * t).exp() - 1.0 - 0.5 * (-l * big_t).exp() * ((2.0 * l * t).exp() - 1.0));
        assert_relative_eq!(flat(s, l).bracket(t, big_t), expected, max_relative = 1e-12);
    }

    #[test]
    fn flat_deterministic_part_closed_form() {
        let (s, l, t, big_t) = (0.01_f64, 0.05_f64, 0.75_f64, 1.0_f64);
        let expected = 0.5 * s * s / (l * l)
            * (4.0 * ((l * t).exp() - 1.0)
                - ((-l * t).exp() + (-l * big_t).exp()) * ((2.0 * l * t).exp() - 1.0));
        assert_relative_eq!(
            flat(s, l).deterministic_part(t, big_t),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn flat_zero_mean_reversion_limits() {
        let (s, t, big_t) = (0.02_f64, 1.5_f64, 4.0_f64);
        let ti = flat(s, 0.0);
        assert!(ti.has_zero_mean_reversion());
        assert_relative_eq!(ti.bracket(t, big_t), s * s * t * (big_t - 0.5 * t), max_relative = 1e-14);
        assert_relative_eq!(ti.deterministic_part(t, big_t), s * s * t * big_t, max_relative = 1e-14);
        assert_relative_eq!(ti.variance(0.0, t), s * s * t, max_relative = 1e-14);
    }

    #[test]
    fn flat_variance_is_beta_ou() {
        for l in [-0.2, -0.01, 0.0, 1e-7, 0.03, 0.5] {
            let ti = flat(0.01, l);
            let t = 2.0;
            assert_relative_eq!(
                ti.variance(0.0, t),
                1e-4 * beta_ou(-2.0 * l, t),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn variance_is_additive() {
        let ti = stepped(0.07);
        let whole = ti.variance(0.0, 5.0);
        let split = ti.variance(0.0, 0.6) + ti.variance(0.6, 3.0) + ti.variance(3.0, 5.0);
        assert_relative_eq!(whole, split, max_relative = 1e-13);
        assert_eq!(ti.variance(2.0, 2.0), 0.0);
        assert_eq!(ti.variance(3.0, 2.0), 0.0);
    }

    #[test]
    fn equal_pieces_match_flat() {
        let sigma = PiecewiseTermStructure::new(vec![0.0, 1.0, 3.0], vec![0.01; 3]).unwrap();
        let pieces = TermIntegrator::new(sigma, 0.04);
        let single = flat(0.01, 0.04);
        for (t, big_t) in [(0.5, 0.5), (2.0, 5.0), (6.0, 10.0)] {
            assert_relative_eq!(pieces.bracket(t, big_t), single.bracket(t, big_t), max_relative = 1e-12);
            assert_relative_eq!(
                pieces.deterministic_part(t, big_t),
                single.deterministic_part(t, big_t),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn stepped_integrals_match_quadrature() {
        for l in [0.0, 0.05, -0.03] {
            let ti = stepped(l);
            let beta = |u: Real| beta_ou(l, u);
            // t inside a piece, on a breakpoint, and past the last breakpoint
            for (t, big_t) in [(0.8, 1.8), (2.5, 3.0), (5.5, 7.0)] {
                let br = quadrature(&ti, 0.0, t, |s| a2(&ti, s) * (beta(big_t) - beta(s)));
                let dp = quadrature(&ti, 0.0, t, |s| {
                    a2(&ti, s) * (beta(t) + beta(big_t) - 2.0 * beta(s))
                });
                let var = quadrature(&ti, 0.0, t, |s| a2(&ti, s));
                assert_relative_eq!(ti.bracket(t, big_t), br, max_relative = 1e-9);
                assert_relative_eq!(ti.deterministic_part(t, big_t), dp, max_relative = 1e-9);
                assert_relative_eq!(ti.variance(0.0, t), var, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn first_breakpoint_after_zero_extends_first_value_backwards() {
        let sigma = PiecewiseTermStructure::new(vec![0.5, 2.0], vec![0.02, 0.01]).unwrap();
        let ti = TermIntegrator::new(sigma, 0.0);
        // 0.02² over [0, 2) then 0.01² over [2, 3]
        assert_abs_diff_eq!(ti.variance(0.0, 3.0), 4e-4 * 2.0 + 1e-4, epsilon = 1e-16);
    }

    proptest! {
        #[test]
        fn exponential_branch_converges_to_limit(
            t in 0.01..10.0_f64,
            dt in 0.0..10.0_f64,
            sigma in 0.001..0.05_f64,
        ) {
            let big_t = t + dt;
            for (near, zero) in [(flat(sigma, 1e-5), flat(sigma, 0.0)), (stepped(1e-5), stepped(0.0))] {
                let tol = |x: Real| 1e-3 * x.abs() + 1e-15;
                let (b0, d0, v0) = (
                    zero.bracket(t, big_t),
                    zero.deterministic_part(t, big_t),
                    zero.variance(0.0, t),
                );
                prop_assert!((near.bracket(t, big_t) - b0).abs() <= tol(b0));
                prop_assert!((near.deterministic_part(t, big_t) - d0).abs() <= tol(d0));
                prop_assert!((near.variance(0.0, t) - v0).abs() <= tol(v0));
            }
        }
    }
}
