//! Seeded generator wrapper used by path simulation.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Monte Carlo random number generator.
///
/// Wraps `StdRng` seeded from a `u64`. The same seed always yields the same
/// sequence of standard normal variates.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng1 = PricerRng::from_seed(42);
/// let mut rng2 = PricerRng::from_seed(42);
/// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
/// ```
#[derive(Debug, Clone)]
pub struct PricerRng {
    inner: StdRng,
    seed: u64,
}

impl PricerRng {
    /// Creates a generator initialised with `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a single standard normal variate (mean 0, variance 1).
    ///
    /// Sampling uses the Ziggurat method of `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills `buffer` with standard normal variates.
    ///
    /// Draws are consumed in slice order, so a buffer of length n receives
    /// exactly the next n values of the sequence. Empty buffers are a no-op.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
