//! European option direction.
//!
//! [`OptionType`] replaces free-form `"call"`/`"put"` strings at the API
//! boundary: parsing rejects anything else, so pricing methods never see an
//! unrecognised direction.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::PricingError;

/// Direction of a European option.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let put: OptionType = " PUT ".parse().unwrap();
/// assert_eq!(put, OptionType::Put);
/// assert_eq!(put.payoff(90.0_f64, 105.0), 15.0);
/// assert_eq!(put.to_string(), "put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Both directions, calls first.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Intrinsic value at exercise.
    ///
    /// # Arguments
    /// * `spot` - Underlying price at maturity (S)
    /// * `strike` - Strike price (K)
    #[inline]
    pub fn payoff<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionType::Call => (spot - strike).max(zero),
            OptionType::Put => (strike - spot).max(zero),
        }
    }

    /// Returns `true` for [`OptionType::Call`].
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Lower-case name used in parsing and display.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
    }

    #[test]
    fn test_parse_straddle_rejected() {
        let result = "straddle".parse::<OptionType>();
        assert_eq!(
            result,
            Err(PricingError::InvalidOptionType("straddle".to_string()))
        );
    }

    #[test]
    fn test_parse_empty_rejected() {
        assert!("".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_call_payoff() {
        assert_eq!(OptionType::Call.payoff(110.0_f64, 100.0), 10.0);
        assert_eq!(OptionType::Call.payoff(90.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_put_payoff() {
        assert_eq!(OptionType::Put.payoff(90.0_f64, 100.0), 10.0);
        assert_eq!(OptionType::Put.payoff(110.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_payoff_at_the_money_is_zero() {
        for option_type in OptionType::ALL {
            assert_eq!(option_type.payoff(100.0_f64, 100.0), 0.0);
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for option_type in OptionType::ALL {
            let parsed: OptionType = option_type.to_string().parse().unwrap();
            assert_eq!(parsed, option_type);
        }
        assert_eq!(format!("{:<5}|", OptionType::Put), "put  |");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&OptionType::Put).unwrap();
        assert_eq!(json, "\"put\"");
    }
}
