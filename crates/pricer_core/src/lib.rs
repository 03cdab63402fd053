//! # pricer_core: Foundation for European Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer shared by every pricing model:
//! - Validated market inputs: `MarketParameters` (`market_data`)
//! - Option direction and payoff: `OptionType` (`types::option_type`)
//! - Error types: `PricingError` (`types::error`)
//! - Numerically stable combinatorics for lattice models (`math::combinatorics`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::MarketParameters;
//! use pricer_core::types::OptionType;
//!
//! let params = MarketParameters::new(100.0, 105.0, 30.0, 0.01, 0.2).unwrap();
//! assert!((params.expiry() - 30.0 / 365.0).abs() < 1e-15);
//!
//! let call: OptionType = "call".parse().unwrap();
//! assert_eq!(call.payoff(110.0_f64, 105.0), 5.0);
//!
//! assert!("straddle".parse::<OptionType>().is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `MarketParameters` and `OptionType`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
