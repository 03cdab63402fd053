//! # Pricer Models (L2: Business Logic)
//!
//! Deterministic European option pricing models.
//!
//! This crate provides:
//! - Closed-form Black-Scholes prices and Greeks ([`analytical`])
//! - Cox-Ross-Rubinstein binomial lattice pricing ([`lattice`])
//!
//! ## Design Principles
//!
//! - **Validated inputs**: every model is built from a
//!   [`MarketParameters`](pricer_core::market_data::MarketParameters) value
//! - **Precompute once**: model constants are derived at construction
//! - **Pure pricing methods**: pricers are immutable and `Send + Sync`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod lattice;
