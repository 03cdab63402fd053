//! Monte Carlo pricing of European options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (path count, seed, antithetic pairing)
//! ├── GbmStep           (per-day drift and diffusion constants)
//! ├── simulate_prices() ──> PriceMatrix (steps × paths)
//! └── price(&PriceMatrix, OptionType) ──> PricingResult
//! ```
//!
//! A [`PriceMatrix`] is a plain value: pricing and charting consume it by
//! reference, and nothing is cached on the pricer.
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::market_data::MarketParameters;
//! use pricer_core::types::OptionType;
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer, PathChart};
//!
//! let params = MarketParameters::new(100.0, 100.0, 90.0, 0.05, 0.2).unwrap();
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .antithetic(true)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(params, config).unwrap();
//!
//! let matrix = pricer.simulate_prices();
//! let put = pricer.price(&matrix, OptionType::Put).unwrap();
//! println!("Put: {:.4} +/- {:.4}", put.price, put.confidence_95());
//!
//! // Hand the first paths to an external charting tool
//! let chart = PathChart::from_matrix(&matrix, 20, params.strike());
//! assert_eq!(chart.series.len(), 20);
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod pricer;

pub use config::{
    MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_SEED, MAX_CELLS, MAX_PATHS, MAX_STEPS,
};
pub use error::{ConfigError, McError};
pub use paths::{GbmStep, PathChart, PriceMatrix};
pub use pricer::{MonteCarloPricer, PricingResult};
