//! Cox-Ross-Rubinstein binomial pricing for European options.
//!
//! ## Lattice Parameters
//!
//! For N steps over T years:
//! - dt = T / N
//! - u = e^(σ√dt), d = e^(-σ√dt)
//! - p = (e^(r·dt) - d) / (u - d)
//!
//! ## Valuation
//!
//! A European payoff depends only on the terminal node, so instead of a
//! backward induction over N(N+1)/2 nodes each of the N+1 terminal prices
//! S₀·uᵏ·dᴺ⁻ᵏ is weighted by its binomial mass C(N,k)·pᵏ·(1-p)ᴺ⁻ᵏ:
//!
//! ```text
//! V = e^(-rT) · Σₖ C(N,k)·pᵏ·(1-p)ᴺ⁻ᵏ · payoff(S₀·uᵏ·dᴺ⁻ᵏ)
//! ```
//!
//! The result equals the backward-induction value in O(N) time and memory.

use pricer_core::market_data::MarketParameters;
use pricer_core::math::binomial_masses;
use pricer_core::types::{OptionType, PricingError};
use tracing::debug;

/// Binomial lattice pricer.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketParameters;
/// use pricer_models::lattice::BinomialPricer;
///
/// let params = MarketParameters::new(100.0, 105.0, 30.0, 0.01, 0.2).unwrap();
/// let tree = BinomialPricer::new(params, 500).unwrap();
///
/// let call = tree.call_price();
/// assert!((call - 0.6614).abs() < 1e-2);
///
/// // Zero steps is rejected
/// assert!(BinomialPricer::new(params, 0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BinomialPricer {
    params: MarketParameters,
    n_steps: usize,
    dt: f64,
    up: f64,
    down: f64,
    probability: f64,
}

impl BinomialPricer {
    /// Creates a lattice with `n_steps` time steps.
    ///
    /// # Errors
    /// - `PricingError::InvalidParameter` if `n_steps == 0`
    /// - `PricingError::ArbitrageViolation` if the risk-neutral probability
    ///   falls outside (0, 1), which happens when |r|·√dt ≥ σ
    pub fn new(params: MarketParameters, n_steps: usize) -> Result<Self, PricingError> {
        if n_steps == 0 {
            return Err(PricingError::InvalidParameter {
                name: "n_steps",
                value: 0.0,
                reason: "lattice needs at least one step",
            });
        }

        let dt = params.expiry() / n_steps as f64;
        let vol_sqrt_dt = params.volatility() * dt.sqrt();
        let up = vol_sqrt_dt.exp();
        let down = (-vol_sqrt_dt).exp();
        let probability = ((params.rate() * dt).exp() - down) / (up - down);

        if !(probability > 0.0 && probability < 1.0) {
            return Err(PricingError::ArbitrageViolation { probability });
        }

        debug!(n_steps, dt, up, down, probability, "binomial lattice built");

        Ok(Self {
            params,
            n_steps,
            dt,
            up,
            down,
            probability,
        })
    }

    /// Returns the market parameters.
    #[inline]
    pub fn params(&self) -> &MarketParameters {
        &self.params
    }

    /// Returns the number of time steps N.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the step length dt = T / N in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the up multiplier u.
    #[inline]
    pub fn up(&self) -> f64 {
        self.up
    }

    /// Returns the down multiplier d = 1/u.
    #[inline]
    pub fn down(&self) -> f64 {
        self.down
    }

    /// Returns the risk-neutral up probability p.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Terminal nodes as `(price, risk-neutral mass)` for k = 0..=N up-moves.
    ///
    /// Node prices are formed as S₀·e^((2k-N)σ√dt), which equals S₀·uᵏ·dᴺ⁻ᵏ
    /// without repeated powers.
    pub fn terminal_distribution(&self) -> impl Iterator<Item = (f64, f64)> {
        let spot = self.params.spot();
        let n = self.n_steps as f64;
        let log_up = self.up.ln();
        binomial_masses(self.n_steps, self.probability)
            .into_iter()
            .enumerate()
            .map(move |(k, mass)| (spot * ((2.0 * k as f64 - n) * log_up).exp(), mass))
    }

    /// Discounted risk-neutral expectation of the terminal payoff.
    pub fn price(&self, option_type: OptionType) -> f64 {
        let strike = self.params.strike();
        let expected: f64 = self
            .terminal_distribution()
            .map(|(terminal, mass)| option_type.payoff(terminal, strike) * mass)
            .sum();
        expected * self.params.discount_factor()
    }

    /// European call price.
    #[inline]
    pub fn call_price(&self) -> f64 {
        self.price(OptionType::Call)
    }

    /// European put price.
    #[inline]
    pub fn put_price(&self) -> f64 {
        self.price(OptionType::Put)
    }
}
