//! `YieldCurve` — deterministic discount curves.
//!
//! A curve maps a maturity `t` (in years from the valuation date) to a
//! continuously-compounded zero yield; discount factors follow as
//! `P(0, t) = exp(−y(t)·t)`.

use lgm_core::{DiscountFactor, Rate, Time};

/// A continuously-compounded zero-yield curve.
///
/// Implementors provide [`zero_rate`](YieldCurve::zero_rate); discount
/// factors and simple forward rates are derived from it.
pub trait YieldCurve: std::fmt::Debug + Send + Sync {
    /// Continuously-compounded zero yield for maturity `t`.
    fn zero_rate(&self, t: Time) -> Rate;

    /// Discount factor `P(0, t)`.
    fn discount(&self, t: Time) -> DiscountFactor {
        if t == 0.0 {
            return 1.0;
        }
        (-self.zero_rate(t) * t).exp()
    }

    /// Forward discount factor `P(0, T) / P(0, t)`.
    fn forward_discount(&self, t: Time, big_t: Time) -> DiscountFactor {
        self.discount(big_t) / self.discount(t)
    }

    /// Simply-compounded forward rate over `[start, end]`,
    /// `(P(0,start)/P(0,end) − 1) / (end − start)`.
    fn forward_rate(&self, start: Time, end: Time) -> Rate {
        (self.discount(start) / self.discount(end) - 1.0) / (end - start)
    }
}
