//! Option type selector.
//!
//! A closed two-value enumeration. Parsing anything other than a call or
//! put label fails with [`PricingError::InvalidOptionType`]; there is no
//! default.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// European option type.
///
/// # Examples
/// ```
/// use greeks_core::types::OptionType;
///
/// let put: OptionType = "PUT".parse().unwrap();
/// assert_eq!(put, OptionType::Put);
/// assert_eq!(put.to_string(), "put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike: payoff max(S - K, 0)
    Call,
    /// Right to sell at the strike: payoff max(K - S, 0)
    Put,
}

impl OptionType {
    /// Payoff at expiry for the given spot and strike.
    ///
    /// # Examples
    /// ```
    /// use greeks_core::types::OptionType;
    ///
    /// assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
    /// assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Parses an option type label (case-insensitive).
    ///
    /// Accepts `call`/`c` and `put`/`p`.
    fn from_str(s: &str) -> Result<Self, PricingError> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
