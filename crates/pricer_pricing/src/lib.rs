//! # Pricer Pricing (Monte Carlo Engine)
//!
//! Monte Carlo valuation of European options under risk-neutral geometric
//! Brownian motion.
//!
//! ## Modules
//!
//! - [`rng`]: Seeded pseudo-random number generation ([`rng::PricerRng`])
//! - [`mc`]: Configuration, path simulation and payoff averaging
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::market_data::MarketParameters;
//! use pricer_core::types::OptionType;
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let params = MarketParameters::new(100.0, 105.0, 30.0, 0.01, 0.2).unwrap();
//! let config = MonteCarloConfig::builder().n_paths(1000).build().unwrap();
//! let pricer = MonteCarloPricer::new(params, config).unwrap();
//!
//! // Simulation returns the price matrix; pricing consumes it explicitly
//! let matrix = pricer.simulate_prices();
//! let result = pricer.price(&matrix, OptionType::Call).unwrap();
//! assert!(result.price > 0.0);
//! assert!(result.std_error > 0.0);
//! ```
//!
//! ## Reproducibility
//!
//! Every call to `simulate_prices` builds its own generator from the
//! configured seed, so identical parameters and seeds always produce
//! identical matrices, independent of call order or thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
