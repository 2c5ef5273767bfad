//! Error types for the greeks CLI.

use greeks_core::types::PricingError;
use greeks_engine::analytical::AnalyticalError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Rejected by the pricing engine
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Engine self-check did not reproduce a reference value
    #[error("Self-check failed: {0}")]
    SelfCheck(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering error
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

impl From<AnalyticalError> for CliError {
    fn from(err: AnalyticalError) -> Self {
        Self::Pricing(err.into())
    }
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
