//! Core option and error types.
//!
//! This module provides:
//! - `option_type`: Call/put direction with intrinsic payoff evaluation
//! - `error`: Structured error type shared by every pricing model
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`] from `option_type`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option_type;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use option_type::OptionType;
