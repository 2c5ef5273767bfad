//! # Greeks Engine (L2: Pricing Kernel)
//!
//! Closed-form Black-Scholes valuation of European calls and puts without
//! dividends.
//!
//! This crate provides:
//! - Price, Delta, Gamma, Theta, Vega and Rho as pure functions
//! - A `BlackScholes` model value exposing the same formulas as methods
//! - Standard normal CDF/PDF
//! - Batch evaluation over many independent quotes
//!
//! ## Design Principles
//!
//! - **Pure functions**: no hidden state, no I/O, safe to call from any thread
//! - **One formula, one place**: free functions delegate to the model methods,
//!   and every formula shares a single d1/d2 helper
//! - **Fail fast**: domain violations return `AnalyticalError` instead of NaN
//!
//! ## Quick Start
//!
//! ```
//! use greeks_engine::analytical::{price, delta};
//! use greeks_core::types::OptionType;
//!
//! let call = price(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
//! assert!((call - 10.4506).abs() < 1e-3);
//!
//! let d = delta(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Put).unwrap();
//! assert!(d < 0.0 && d > -1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
