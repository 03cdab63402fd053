//! Market inputs shared by every pricing model.
//!
//! # Components
//!
//! - [`params`]: Validated spot, strike, maturity, rate and volatility ([`MarketParameters`])
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::MarketParameters;
//!
//! let params = MarketParameters::new(100.0, 100.0, 365.0, 0.05, 0.2).unwrap();
//! assert_eq!(params.expiry(), 1.0);
//! assert!((params.discount_factor() - 0.951229).abs() < 1e-5);
//! ```

pub mod params;

// Re-export commonly used types
pub use params::{MarketParameters, DAYS_PER_YEAR};
