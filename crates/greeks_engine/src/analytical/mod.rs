//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form Black-Scholes solutions:
//! - Price and analytical Greeks (Delta, Gamma, Theta, Vega, Rho)
//! - The shared d1/d2 computation
//! - Standard normal CDF/PDF
//! - Batch evaluation of many quotes
//!
//! ## Design Principles
//!
//! - **Pure**: output depends only on the arguments
//! - **Explicit expiry boundary**: T ≤ 0 never reaches the d1/d2 helper
//! - **No silent NaN**: domain violations and non-finite inputs are errors

pub mod batch;
pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use batch::{greeks_batch, price_batch, OptionQuote};
pub use black_scholes::{
    d1_d2, delta, gamma, greeks, price, rho, theta, vega, BlackScholes, Greeks, D1D2,
};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
