//! Closed-form Black-Scholes pricing for European options.
//!
//! This module provides:
//! - [`AnalyticalPricer`]: Black-Scholes call/put prices
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho) and the [`Greeks`] bundle
//! - Standard normal CDF/PDF in [`distributions`]

pub mod black_scholes;
pub mod distributions;

// Re-export main types at module level
pub use black_scholes::{AnalyticalPricer, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
