//! Batch evaluation over many independent option quotes.
//!
//! With the `parallel` feature (default) quotes are evaluated with Rayon's
//! `par_iter()`; without it a sequential iterator is used. Either way the
//! output has the input's order and each entry is exactly the single-call
//! result, since every formula is a pure function of its quote.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use greeks_core::types::OptionType;

use super::black_scholes::{BlackScholes, Greeks};
use super::error::AnalyticalError;

/// One set of Black-Scholes inputs.
///
/// # Examples
/// ```
/// use greeks_engine::analytical::OptionQuote;
/// use greeks_core::types::OptionType;
///
/// let quote = OptionQuote::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call);
/// assert!(quote.price().unwrap() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionQuote {
    /// Spot price (S)
    pub spot: f64,
    /// Strike (K)
    pub strike: f64,
    /// Risk-free rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
    /// Time to expiry in years (T)
    pub expiry: f64,
    /// Call or put
    pub option_type: OptionType,
}

impl OptionQuote {
    /// Creates a quote.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            rate,
            volatility,
            expiry,
            option_type,
        }
    }

    fn model(&self) -> Result<BlackScholes, AnalyticalError> {
        BlackScholes::new(self.spot, self.rate, self.volatility)
    }

    /// Price of this quote.
    pub fn price(&self) -> Result<f64, AnalyticalError> {
        self.model()?.price(self.strike, self.expiry, self.option_type)
    }

    /// Price and Greeks of this quote.
    pub fn greeks(&self) -> Result<Greeks, AnalyticalError> {
        self.model()?.greeks(self.strike, self.expiry, self.option_type)
    }
}

fn map_quotes<R, F>(quotes: &[OptionQuote], f: F) -> Vec<R>
where
    R: Send,
    F: Fn(&OptionQuote) -> R + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        quotes.par_iter().map(f).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        quotes.iter().map(f).collect()
    }
}

/// Prices every quote. A failing quote yields an `Err` in its slot and
/// does not affect the others.
pub fn price_batch(quotes: &[OptionQuote]) -> Vec<Result<f64, AnalyticalError>> {
    map_quotes(quotes, OptionQuote::price)
}

/// Price and Greeks for every quote.
pub fn greeks_batch(quotes: &[OptionQuote]) -> Vec<Result<Greeks, AnalyticalError>> {
    map_quotes(quotes, OptionQuote::greeks)
}
