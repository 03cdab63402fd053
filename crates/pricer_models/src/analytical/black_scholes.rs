//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes-Merton model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::market_data::MarketParameters;
use pricer_core::types::OptionType;
use tracing::trace;

use super::distributions::{norm_cdf, norm_pdf};

/// Price and first-order sensitivities of one option.
///
/// Theta is per year of calendar time, vega per unit volatility and rho per
/// unit rate (no 1% or per-day scaling).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    /// Option price
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂t (time decay, usually negative)
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

/// Closed-form Black-Scholes pricer.
///
/// d₁ and d₂ are computed once at construction and reused by every price
/// and Greek method; all methods are pure.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketParameters;
/// use pricer_models::analytical::AnalyticalPricer;
///
/// let params = MarketParameters::new(100.0, 100.0, 365.0, 0.05, 0.2).unwrap();
/// let bs = AnalyticalPricer::new(params);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = bs.call_price() - bs.put_price() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyticalPricer {
    params: MarketParameters,
    /// T in years
    expiry: f64,
    sqrt_t: f64,
    /// e^(-rT)
    discount: f64,
    d1: f64,
    d2: f64,
}

impl AnalyticalPricer {
    /// Creates a pricer and precomputes d₁, d₂.
    ///
    /// `MarketParameters` guarantees S, K, σ and T are positive, so the
    /// formula is always defined.
    pub fn new(params: MarketParameters) -> Self {
        let expiry = params.expiry();
        let sqrt_t = expiry.sqrt();
        let sigma = params.volatility();
        let vol_sqrt_t = sigma * sqrt_t;

        // d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)
        let log_moneyness = (params.spot() / params.strike()).ln();
        let drift = (params.rate() + 0.5 * sigma * sigma) * expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        trace!(d1, d2, expiry, "black-scholes terms");

        Self {
            params,
            expiry,
            sqrt_t,
            discount: params.discount_factor(),
            d1,
            d2,
        }
    }

    /// Returns the market parameters.
    #[inline]
    pub fn params(&self) -> &MarketParameters {
        &self.params
    }

    /// Returns d₁.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// Returns d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// European call price, C = S·N(d₁) - K·e^(-rT)·N(d₂).
    #[inline]
    pub fn call_price(&self) -> f64 {
        self.params.spot() * norm_cdf(self.d1)
            - self.params.strike() * self.discount * norm_cdf(self.d2)
    }

    /// European put price, P = K·e^(-rT)·N(-d₂) - S·N(-d₁).
    #[inline]
    pub fn put_price(&self) -> f64 {
        self.params.strike() * self.discount * norm_cdf(-self.d2)
            - self.params.spot() * norm_cdf(-self.d1)
    }

    /// Price for the given direction.
    #[inline]
    pub fn price(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_price(),
            OptionType::Put => self.put_price(),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, option_type: OptionType) -> f64 {
        let n_d1 = norm_cdf(self.d1);
        match option_type {
            OptionType::Call => n_d1,
            OptionType::Put => n_d1 - 1.0,
        }
    }

    /// Computes Gamma (∂²V/∂S²) = φ(d₁) / (S·σ·√T).
    ///
    /// Gamma is the same for both calls and puts.
    #[inline]
    pub fn gamma(&self) -> f64 {
        norm_pdf(self.d1) / (self.params.spot() * self.params.volatility() * self.sqrt_t)
    }

    /// Computes Vega (∂V/∂σ) = S·φ(d₁)·√T.
    ///
    /// Vega is the same for both calls and puts.
    #[inline]
    pub fn vega(&self) -> f64 {
        self.params.spot() * norm_pdf(self.d1) * self.sqrt_t
    }

    /// Computes Theta (∂V/∂t).
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    #[inline]
    pub fn theta(&self, option_type: OptionType) -> f64 {
        let spot = self.params.spot();
        let rate = self.params.rate();
        let strike = self.params.strike();

        // Common term: -(S·σ·φ(d₁))/(2√T)
        let term1 = -(spot * norm_pdf(self.d1) * self.params.volatility()) / (2.0 * self.sqrt_t);

        match option_type {
            OptionType::Call => term1 - rate * strike * self.discount * norm_cdf(self.d2),
            OptionType::Put => term1 + rate * strike * self.discount * norm_cdf(-self.d2),
        }
    }

    /// Computes Rho (∂V/∂r).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, option_type: OptionType) -> f64 {
        let scale = self.params.strike() * self.expiry * self.discount;
        match option_type {
            OptionType::Call => scale * norm_cdf(self.d2),
            OptionType::Put => -scale * norm_cdf(-self.d2),
        }
    }

    /// Price and all five Greeks for one direction.
    pub fn greeks(&self, option_type: OptionType) -> Greeks {
        Greeks {
            price: self.price(option_type),
            delta: self.delta(option_type),
            gamma: self.gamma(),
            vega: self.vega(),
            theta: self.theta(option_type),
            rho: self.rho(option_type),
        }
    }
}
