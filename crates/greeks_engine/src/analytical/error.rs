//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Domain violations of the closed-form formulas

use greeks_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Raised whenever an input would make a closed-form formula undefined
/// (log of a non-positive ratio, division by zero) or when any input is
/// NaN or infinite. A T ≤ 0 expiry is a boundary, not an error.
///
/// # Variants
/// - `InvalidSpot`: Non-positive spot price with T > 0
/// - `InvalidStrike`: Non-positive strike with T > 0
/// - `InvalidVolatility`: Non-positive volatility with T > 0
/// - `InvalidExpiry`: d1/d2 requested at or after expiry
/// - `NonFiniteInput`: NaN or infinite argument
/// - `NumericalInstability`: Finite inputs produced a non-finite result
///
/// # Examples
/// ```
/// use greeks_engine::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// d1/d2 requested for T ≤ 0, where they are undefined.
    #[error("Invalid expiry for d1/d2: T = {expiry}")]
    InvalidExpiry {
        /// The non-positive expiry
        expiry: f64,
    },

    /// NaN or infinite input.
    #[error("Non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Name of the offending argument
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_strike_display() {
        let err = AnalyticalError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike: K = 0");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = AnalyticalError::InvalidExpiry { expiry: -0.5 };
        assert_eq!(format!("{}", err), "Invalid expiry for d1/d2: T = -0.5");
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = AnalyticalError::NumericalInstability {
            message: "price overflowed".to_string(),
        };
        assert_eq!(format!("{}", err), "Numerical instability: price overflowed");
    }

    #[test]
    fn test_non_finite_display() {
        let err = AnalyticalError::NonFiniteInput {
            name: "expiry",
            value: f64::NAN,
        };
        assert_eq!(format!("{}", err), "Non-finite input: expiry = NaN");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    // ==========================================================
    // From<AnalyticalError> for PricingError tests
    // ==========================================================

    #[test]
    fn test_domain_errors_map_to_invalid_input() {
        let cases = [
            AnalyticalError::InvalidVolatility { volatility: -0.1 },
            AnalyticalError::InvalidSpot { spot: -50.0 },
            AnalyticalError::InvalidStrike { strike: 0.0 },
            AnalyticalError::InvalidExpiry { expiry: 0.0 },
            AnalyticalError::NonFiniteInput {
                name: "rate",
                value: f64::INFINITY,
            },
        ];
        for err in cases {
            let msg = err.to_string();
            match PricingError::from(err) {
                PricingError::InvalidInput(m) => assert_eq!(m, msg),
                other => panic!("Expected InvalidInput variant, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_numerical_instability_to_pricing_error() {
        let err = AnalyticalError::NumericalInstability {
            message: "Overflow".to_string(),
        };
        match PricingError::from(err) {
            PricingError::NumericalInstability(msg) => assert!(msg.contains("Overflow")),
            other => panic!("Expected NumericalInstability variant, got {:?}", other),
        }
    }
}
