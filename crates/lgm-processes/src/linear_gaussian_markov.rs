//! One-factor Linear Gaussian Markov (Hull-White) model.
//!
//! Zero-coupon bonds are reconstructed from the factor `X_t` as
//!
//! ```text
//! P(t, T) = P(0,T)/P(0,t) · exp( (β(T) − β(t)) · (−½·D(t,T) − X_t) )
//! ```
//!
//! where `D` is [`TermIntegrator::deterministic_part`] and
//! `β(u) = (1 − e^{−λu})/λ`.  The same formula serves the discount curve and
//! a separate forward (Libor) curve in a two-curve setup.

use std::sync::Arc;

use lgm_core::{ensure, DiscountFactor, Rate, Real, Result, Time};
use lgm_math::{beta_ou, close_enough};
use lgm_termstructures::{PiecewiseTermStructure, YieldCurve};

use crate::term_integrator::TermIntegrator;

/// Selects which initial curve a price is reconstructed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveName {
    /// The discounting curve.
    Discount,
    /// The curve Libor fixings are projected from.
    Forward,
}

/// Linear Gaussian Markov model with a piecewise-constant volatility.
///
/// The forward curve defaults to the discount curve; use
/// [`with_forward_curve`](Self::with_forward_curve) for a two-curve setup.
#[derive(Debug, Clone)]
pub struct LinearGaussianMarkov {
    discount_curve: Arc<dyn YieldCurve>,
    forward_curve: Arc<dyn YieldCurve>,
    integrator: TermIntegrator,
}

impl LinearGaussianMarkov {
    /// Create a single-curve model.
    pub fn new(
        discount_curve: Arc<dyn YieldCurve>,
        mean_reversion: Real,
        volatility: PiecewiseTermStructure,
    ) -> Self {
        Self {
            forward_curve: Arc::clone(&discount_curve),
            discount_curve,
            integrator: TermIntegrator::new(volatility, mean_reversion),
        }
    }

    /// Replace the curve used for Libor projection.
    pub fn with_forward_curve(mut self, forward_curve: Arc<dyn YieldCurve>) -> Self {
        self.forward_curve = forward_curve;
        self
    }

    /// The initial curve selected by `name`.
    pub fn curve(&self, name: CurveName) -> &dyn YieldCurve {
        match name {
            CurveName::Discount => self.discount_curve.as_ref(),
            CurveName::Forward => self.forward_curve.as_ref(),
        }
    }

    /// Mean reversion `λ`.
    pub fn mean_reversion(&self) -> Real {
        self.integrator.mean_reversion()
    }

    /// Volatility term structure `σ(·)`.
    pub fn volatility(&self) -> &PiecewiseTermStructure {
        self.integrator.sigma()
    }

    /// The closed-form integrals of this model.
    pub fn integrator(&self) -> &TermIntegrator {
        &self.integrator
    }

    /// `β(u) = (1 − e^{−λu})/λ`.
    pub fn beta(&self, u: Time) -> Real {
        beta_ou(self.mean_reversion(), u)
    }

    /// Variance of `X_t` under the risk-neutral measure.
    pub fn factor_variance(&self, t: Time) -> Real {
        self.integrator.variance(0.0, t)
    }

    /// Drift of `X_t` between the risk-neutral and the `T`-forward measure.
    ///
    /// # Errors
    /// `InvalidArgument` if `t > T`.
    pub fn bracket(&self, t: Time, big_t: Time) -> Result<Real> {
        ensure!(t <= big_t, "bracket needs t <= T, got t = {t}, T = {big_t}");
        Ok(self.integrator.bracket(t, big_t))
    }

    /// The `D(t, T)` term of the bond reconstruction.
    ///
    /// # Errors
    /// `InvalidArgument` if `t > T`.
    pub fn deterministic_part(&self, t: Time, big_t: Time) -> Result<Real> {
        ensure!(t <= big_t, "deterministic part needs t <= T, got t = {t}, T = {big_t}");
        Ok(self.integrator.deterministic_part(t, big_t))
    }

    /// Zero-coupon bond price `P(t, T)` given the factor value `x = X_t`.
    ///
    /// # Errors
    /// `InvalidArgument` if `t > T`.
    pub fn bond_price(
        &self,
        t: Time,
        big_t: Time,
        x: Real,
        curve: CurveName,
    ) -> Result<DiscountFactor> {
        if close_enough(t, big_t, 42) {
            return Ok(1.0);
        }
        let d = self.deterministic_part(t, big_t)?;
        let ts = self.curve(curve);
        let dbeta = self.beta(big_t) - self.beta(t);
        Ok(ts.forward_discount(t, big_t) * (dbeta * (-0.5 * d - x)).exp())
    }

    /// Simply-compounded forward rate `L(t; start, end)` given `x = X_t`.
    ///
    /// # Errors
    /// `InvalidArgument` if `end <= start` or `t > start`.
    pub fn libor(
        &self,
        t: Time,
        start: Time,
        end: Time,
        x: Real,
        curve: CurveName,
    ) -> Result<Rate> {
        self.libor_with_basis(t, start, end, x, curve, 1.0)
    }

    /// [`libor`](Self::libor) with a multiplicative basis adjustment on the
    /// bond ratio.
    ///
    /// # Errors
    /// `InvalidArgument` if `end <= start` or `t > start`.
    pub fn libor_with_basis(
        &self,
        t: Time,
        start: Time,
        end: Time,
        x: Real,
        curve: CurveName,
        basis_adjustment: Real,
    ) -> Result<Rate> {
        ensure!(
            end > start,
            "Libor period must have end > start, got [{start}, {end}]"
        );
        let p_start = self.bond_price(t, start, x, curve)?;
        let p_end = self.bond_price(t, end, x, curve)?;
        Ok((p_start / p_end * basis_adjustment - 1.0) / (end - start))
    }
}
