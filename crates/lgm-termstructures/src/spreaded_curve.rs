//! `SpreadedCurve` — curve arithmetic for spread curves.
//!
//! The zero yield of a spreaded curve is the sum of the base and spread
//! yields, so `P(0,t) = P_base(0,t) · P_spread(0,t)`.  A typical use is a
//! Libor forwarding curve built as the discount curve plus a basis spread.

use crate::flat_forward::FlatForward;
use crate::yield_curve::YieldCurve;
use lgm_core::{Rate, Spread, Time};
use std::sync::Arc;

/// The sum of a base curve and a spread curve.
#[derive(Debug, Clone)]
pub struct SpreadedCurve {
    base: Arc<dyn YieldCurve>,
    spread: Arc<dyn YieldCurve>,
}

impl SpreadedCurve {
    /// `base + spread`.
    pub fn new(base: Arc<dyn YieldCurve>, spread: Arc<dyn YieldCurve>) -> Self {
        Self { base, spread }
    }

    /// `base + spread` for a constant spread.
    pub fn with_constant_spread(base: Arc<dyn YieldCurve>, spread: Spread) -> Self {
        Self::new(base, Arc::new(FlatForward::new(spread)))
    }

    /// The base curve.
    pub fn base(&self) -> &Arc<dyn YieldCurve> {
        &self.base
    }

    /// The spread curve.
    pub fn spread(&self) -> &Arc<dyn YieldCurve> {
        &self.spread
    }
}

impl YieldCurve for SpreadedCurve {
    fn zero_rate(&self, t: Time) -> Rate {
        self.base.zero_rate(t) + self.spread.zero_rate(t)
    }
}
