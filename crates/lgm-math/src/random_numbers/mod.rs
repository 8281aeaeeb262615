//! Gaussian random number generators.
//!
//! The Monte Carlo engine draws from any [`GaussianRng`]; seeding and the
//! choice of generator stay with the caller.  Two implementations ship with
//! the crate:
//!
//! * [`InverseCumulativeNormalRng`] — Mersenne Twister MT19937-64 (`rand_mt`)
//!   mapped through the inverse normal CDF;
//! * [`DistributionRng`] — any `rand::Rng` sampled through
//!   `rand_distr::StandardNormal`.

use lgm_core::Real;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_mt::Mt19937GenRand64;

/// A source of i.i.d. standard normal deviates.
pub trait GaussianRng {
    /// Draw the next standard normal deviate.
    fn next_gaussian(&mut self) -> Real;

    /// Fill `out` with consecutive deviates.
    fn fill_gaussian(&mut self, out: &mut [Real]) {
        for x in out.iter_mut() {
            *x = self.next_gaussian();
        }
    }

    /// Draw `n` consecutive deviates into a new vector.
    fn gaussian_sequence(&mut self, n: usize) -> Vec<Real> {
        let mut out = vec![0.0; n];
        self.fill_gaussian(&mut out);
        out
    }
}

/// Uniform deviates in `[0, 1)` from the 64-bit Mersenne Twister.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }

    /// Generate the next uniform deviate in `[0, 1)`.
    pub fn next_real(&mut self) -> Real {
        // 53 high bits → exactly representable doubles
        (self.rng.next_u64() >> 11) as Real * (1.0 / (1u64 << 53) as Real)
    }
}

/// Standard normal deviates by inversion of Mersenne Twister uniforms.
pub struct InverseCumulativeNormalRng {
    inner: MersenneTwisterUniformRng,
}

impl InverseCumulativeNormalRng {
    /// Create a new generator backed by a Mersenne Twister with the given
    /// seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: MersenneTwisterUniformRng::new(seed),
        }
    }
}

impl GaussianRng for InverseCumulativeNormalRng {
    fn next_gaussian(&mut self) -> Real {
        // 0 would map to −∞
        let u = loop {
            let u = self.inner.next_real();
            if u > 0.0 {
                break u;
            }
        };
        crate::distributions::normal_cdf_inverse(u)
    }
}

/// Standard normal deviates sampled from a `rand` generator.
#[derive(Debug, Clone)]
pub struct DistributionRng<R = StdRng> {
    rng: R,
}

impl<R: Rng> DistributionRng<R> {
    /// Wrap an existing `rand` generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl DistributionRng<StdRng> {
    /// A reproducible generator seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GaussianRng for DistributionRng<R> {
    fn next_gaussian(&mut self) -> Real {
        self.rng.sample(StandardNormal)
    }
}
