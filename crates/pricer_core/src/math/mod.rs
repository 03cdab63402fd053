//! Numerical helpers shared by the pricing models.
//!
//! This module provides:
//! - [`combinatorics`]: Log-space binomial coefficients and probability masses

pub mod combinatorics;

pub use combinatorics::{binomial_masses, ln_binomial_coefficients};
