//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for Monte Carlo simulation.
//!
//! - **Reproducibility**: generators are always constructed from an explicit seed
//! - **Efficiency**: batch draws go into caller-owned `&mut [f64]` slices
//! - **Locality**: a generator is owned by one simulation call, never shared
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let normal_value = rng.gen_normal();
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;
