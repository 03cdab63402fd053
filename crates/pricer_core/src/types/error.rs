//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter validation and pricing operations

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidParameter`: A market or model parameter is outside its domain
/// - `InvalidOptionType`: Option direction other than "call" or "put"
/// - `ArbitrageViolation`: Lattice risk-neutral probability outside (0, 1)
/// - `ModelFailure`: Model could not produce a result for the given input
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidOptionType("straddle".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Invalid option type: 'straddle'. Use 'call' or 'put'"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Parameter outside its valid domain.
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// Unrecognised option type.
    #[error("Invalid option type: '{0}'. Use 'call' or 'put'")]
    InvalidOptionType(String),

    /// Risk-neutral up-probability outside the open unit interval.
    #[error("Arbitrage violation: risk-neutral probability p = {probability} outside (0, 1)")]
    ArbitrageViolation {
        /// The offending probability
        probability: f64,
    },

    /// Model failed to produce valid result
    #[error("Model failure: {0}")]
    ModelFailure(String),
}

impl PricingError {
    /// Builds an [`PricingError::InvalidParameter`] for a value that must be strictly positive.
    #[inline]
    pub fn not_positive(name: &'static str, value: f64) -> Self {
        PricingError::InvalidParameter {
            name,
            value,
            reason: "must be positive and finite",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = PricingError::InvalidParameter {
            name: "volatility",
            value: -0.2,
            reason: "must be positive and finite",
        };
        assert_eq!(
            format!("{}", err),
            "Invalid parameter 'volatility' = -0.2: must be positive and finite"
        );
    }

    #[test]
    fn test_not_positive_helper() {
        let err = PricingError::not_positive("spot", 0.0);
        match err {
            PricingError::InvalidParameter { name, value, .. } => {
                assert_eq!(name, "spot");
                assert_eq!(value, 0.0);
            }
            _ => panic!("Expected InvalidParameter variant"),
        }
    }

    #[test]
    fn test_arbitrage_violation_display() {
        let err = PricingError::ArbitrageViolation { probability: 1.2 };
        assert!(format!("{}", err).contains("p = 1.2"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::ModelFailure("no paths".to_string());
        let _: &dyn std::error::Error = &err;
        assert_eq!(err.to_string(), "Model failure: no paths");
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::InvalidOptionType("digital".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
