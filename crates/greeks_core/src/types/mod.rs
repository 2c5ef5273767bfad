//! Core option types.
//!
//! This module provides:
//! - `option_type`: The closed call/put selector
//! - `error`: Structured error types for pricing operations
//!
//! # Re-exports
//!
//! - [`OptionType`] from `option_type`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option_type;

pub use error::PricingError;
pub use option_type::OptionType;
