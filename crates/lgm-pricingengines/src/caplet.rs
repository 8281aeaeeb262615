//! Single-period caplet on a Libor rate.

use lgm_core::{ensure, Rate, Result, Time};
use lgm_processes::CurveName;

/// A caplet fixing at `fixing` and paying `δ·(L(fixing; fixing, payment) − K)⁺`
/// at `payment`, with `δ = payment − fixing`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Caplet {
    fixing: Time,
    payment: Time,
    strike: Rate,
    libor_curve: CurveName,
}

impl Caplet {
    /// Create a caplet whose Libor is projected from the forward curve.
    ///
    /// # Errors
    /// `InvalidArgument` unless `0 < fixing < payment`, both finite, and the
    /// strike is finite and greater than `−1/δ`.
    pub fn new(fixing: Time, payment: Time, strike: Rate) -> Result<Self> {
        ensure!(
            fixing.is_finite() && fixing > 0.0,
            "caplet fixing must be positive, got {fixing}"
        );
        ensure!(
            payment.is_finite() && payment > fixing,
            "caplet payment must follow the fixing, got [{fixing}, {payment}]"
        );
        ensure!(
            strike.is_finite() && 1.0 + (payment - fixing) * strike > 0.0,
            "caplet strike {strike} is out of range"
        );
        Ok(Self {
            fixing,
            payment,
            strike,
            libor_curve: CurveName::Forward,
        })
    }

    /// Project the Libor fixing from `curve` instead.
    pub fn with_libor_curve(mut self, curve: CurveName) -> Self {
        self.libor_curve = curve;
        self
    }

    /// Fixing time `T1`.
    pub fn fixing(&self) -> Time {
        self.fixing
    }

    /// Payment time `T2`.
    pub fn payment(&self) -> Time {
        self.payment
    }

    /// Strike `K`.
    pub fn strike(&self) -> Rate {
        self.strike
    }

    /// Curve the Libor fixing is projected from.
    pub fn libor_curve(&self) -> CurveName {
        self.libor_curve
    }

    /// Accrual fraction `δ = T2 − T1`.
    pub fn accrual(&self) -> Time {
        self.payment - self.fixing
    }
}
