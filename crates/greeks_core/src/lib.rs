//! # greeks_core: Shared Types for the Black-Scholes Greeks Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! greeks_core is the bottom layer of the workspace, providing:
//! - The option type selector: `OptionType` (`types::option_type`)
//! - The crate-wide error taxonomy: `PricingError` (`types::error`)
//!
//! Layer 1 has no dependencies on other greeks_* crates and no pricing
//! logic. The analytic formulas live in `greeks_engine`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use greeks_core::types::{OptionType, PricingError};
//!
//! let call: OptionType = "call".parse().unwrap();
//! assert_eq!(call, OptionType::Call);
//!
//! let err = "straddle".parse::<OptionType>().unwrap_err();
//! assert_eq!(err, PricingError::InvalidOptionType("straddle".to_string()));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionType`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
