//! Lattice pricing models.
//!
//! - [`BinomialPricer`]: Cox-Ross-Rubinstein recombining binomial lattice,
//!   valued by direct risk-neutral weighting of the terminal nodes

pub mod binomial;

pub use binomial::BinomialPricer;
