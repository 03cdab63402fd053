//! Validated market parameters for a single-underlying European option.

use crate::types::PricingError;

/// Calendar days per year used to annualise maturities.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Market inputs common to all pricing models.
///
/// Holds spot, strike, calendar days to maturity, the continuously
/// compounded risk-free rate and the annualised volatility. Every field is
/// validated at construction, so a `MarketParameters` value is always usable
/// by any pricer.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketParameters;
///
/// let params = MarketParameters::new(100.0, 105.0, 30.0, 0.01, 0.2).unwrap();
/// assert_eq!(params.spot(), 100.0);
/// assert_eq!(params.strike(), 105.0);
/// assert_eq!(params.maturity_days(), 30.0);
///
/// // Non-positive volatility is rejected
/// assert!(MarketParameters::new(100.0, 105.0, 30.0, 0.01, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMarketParameters", into = "RawMarketParameters")
)]
pub struct MarketParameters {
    spot: f64,
    strike: f64,
    maturity_days: f64,
    rate: f64,
    volatility: f64,
}

impl MarketParameters {
    /// Creates validated market parameters.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (must be positive)
    /// * `strike` - Contract strike (must be positive)
    /// * `maturity_days` - Calendar days to expiry (must be positive)
    /// * `rate` - Continuously compounded risk-free rate (any finite value)
    /// * `volatility` - Annualised volatility of log-returns (must be positive)
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending field.
    pub fn new(
        spot: f64,
        strike: f64,
        maturity_days: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        ensure_positive("spot", spot)?;
        ensure_positive("strike", strike)?;
        ensure_positive("maturity_days", maturity_days)?;
        if !rate.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "rate",
                value: rate,
                reason: "must be finite",
            });
        }
        ensure_positive("volatility", volatility)?;

        Ok(Self {
            spot,
            strike,
            maturity_days,
            rate,
            volatility,
        })
    }

    /// Returns the spot price (S₀).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the calendar days to maturity.
    #[inline]
    pub fn maturity_days(&self) -> f64 {
        self.maturity_days
    }

    /// Returns the risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Time to maturity in years, T = maturity_days / 365.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.maturity_days / DAYS_PER_YEAR
    }

    /// Discount factor to maturity, exp(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry()).exp()
    }

    /// Returns a copy with a different spot, re-validated.
    pub fn with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        Self::new(
            spot,
            self.strike,
            self.maturity_days,
            self.rate,
            self.volatility,
        )
    }

    /// Returns a copy with a different strike, re-validated.
    pub fn with_strike(&self, strike: f64) -> Result<Self, PricingError> {
        Self::new(
            self.spot,
            strike,
            self.maturity_days,
            self.rate,
            self.volatility,
        )
    }

    /// Returns a copy with a different maturity, re-validated.
    pub fn with_maturity_days(&self, maturity_days: f64) -> Result<Self, PricingError> {
        Self::new(
            self.spot,
            self.strike,
            maturity_days,
            self.rate,
            self.volatility,
        )
    }
}

fn ensure_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::not_positive(name, value))
    }
}

/// Unvalidated wire form; deserialisation goes through [`MarketParameters::new`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawMarketParameters {
    spot: f64,
    strike: f64,
    maturity_days: f64,
    rate: f64,
    volatility: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMarketParameters> for MarketParameters {
    type Error = PricingError;

    fn try_from(raw: RawMarketParameters) -> Result<Self, Self::Error> {
        MarketParameters::new(
            raw.spot,
            raw.strike,
            raw.maturity_days,
            raw.rate,
            raw.volatility,
        )
    }
}

#[cfg(feature = "serde")]
impl From<MarketParameters> for RawMarketParameters {
    fn from(params: MarketParameters) -> Self {
        RawMarketParameters {
            spot: params.spot,
            strike: params.strike,
            maturity_days: params.maturity_days,
            rate: params.rate,
            volatility: params.volatility,
        }
    }
}
