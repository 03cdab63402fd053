//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that market data types are accessible via absolute path.
#[test]
fn test_market_data_module_exports() {
    use pricer_core::market_data::params::MarketParameters as ByPath;
    use pricer_core::market_data::{MarketParameters, DAYS_PER_YEAR};

    let params: MarketParameters = ByPath::new(100.0, 105.0, 73.0, 0.01, 0.2).unwrap();
    assert_eq!(params.expiry(), 73.0 / DAYS_PER_YEAR);
}

/// Test that types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::error::PricingError;
    use pricer_core::types::option_type::OptionType;

    let put: OptionType = " PUT ".parse().unwrap();
    assert_eq!(put, OptionType::Put);
    assert_eq!(put.payoff(90.0_f64, 100.0), 10.0);

    let err = "straddle".parse::<OptionType>().unwrap_err();
    assert_eq!(err, PricingError::InvalidOptionType("straddle".to_string()));
}

/// Test that re-exported types match their defining modules.
#[test]
fn test_types_reexports() {
    use pricer_core::types::{OptionType, PricingError};

    let err: PricingError = PricingError::not_positive("volatility", 0.0);
    assert!(err.to_string().contains("volatility"));
    assert!(OptionType::Call.is_call());
}

/// Test that math helpers are accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use pricer_core::math::combinatorics::binomial_masses;
    use pricer_core::math::ln_binomial_coefficients;

    assert_eq!(ln_binomial_coefficients(10).len(), 11);
    let total: f64 = binomial_masses(10, 0.3).iter().sum();
    assert!((total - 1.0).abs() < 1e-12);
}

/// Test that market parameters validate through every entry point.
#[test]
fn test_market_parameters_error_propagation() {
    use pricer_core::market_data::MarketParameters;
    use pricer_core::types::PricingError;

    fn build(spot: f64) -> Result<f64, PricingError> {
        let params = MarketParameters::new(spot, 100.0, 30.0, 0.0, 0.2)?;
        Ok(params.discount_factor())
    }

    assert_eq!(build(100.0).unwrap(), 1.0);
    assert!(matches!(
        build(f64::NAN),
        Err(PricingError::InvalidParameter { name: "spot", .. })
    ));
}
