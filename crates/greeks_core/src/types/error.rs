//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced to callers of any pricing operation

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every pricing failure reaches the caller as one of these variants.
/// Model-specific errors (such as the analytic domain errors in
/// `greeks_engine`) convert into this type with `From`.
///
/// # Variants
/// - `InvalidInput`: Market data or parameters outside the model domain
/// - `InvalidOptionType`: Option selector other than call or put
/// - `NumericalInstability`: Computation produced a non-finite value
///
/// # Examples
/// ```
/// use greeks_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Option type outside {call, put}
    #[error("Invalid option type: '{0}'. Expected 'call' or 'put'")]
    InvalidOptionType(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PricingError::InvalidInput("Test error".to_string());
        assert_eq!(format!("{}", err), "Invalid input: Test error");
    }

    #[test]
    fn test_invalid_option_type_display() {
        let err = PricingError::InvalidOptionType("straddle".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid option type: 'straddle'. Expected 'call' or 'put'"
        );
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = PricingError::NumericalInstability("d1 is NaN".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: d1 is NaN");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("x".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::InvalidOptionType("foo".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
