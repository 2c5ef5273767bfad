//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. `price` and `greeks`
//! share [`OptionArgs`] for describing a single European option.

pub mod check;
pub mod greeks;
pub mod price;

use std::str::FromStr;

use clap::Args;
use greeks_core::types::OptionType;
use greeks_engine::analytical::OptionQuote;

use crate::config::{CliConfig, OutputFormat};
use crate::{CliError, Result};

/// Inputs describing one European option
#[derive(Args, Debug, Clone)]
pub struct OptionArgs {
    /// Spot price of the underlying (S)
    #[arg(short, long, allow_negative_numbers = true)]
    pub spot: f64,

    /// Strike price (K)
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub strike: f64,

    /// Continuously compounded risk-free rate (r) [default: from config]
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Annualised volatility (σ) [default: from config]
    #[arg(long = "vol", allow_negative_numbers = true)]
    pub volatility: Option<f64>,

    /// Time to expiry in years (T); zero or negative means expired
    #[arg(short, long, allow_negative_numbers = true)]
    pub expiry: f64,

    /// Option type (call, put, c, p)
    #[arg(short = 't', long)]
    pub option_type: String,

    /// Output format (table, json) [default: from config]
    #[arg(short, long)]
    pub format: Option<String>,
}

impl OptionArgs {
    /// Resolve the arguments into a quote, filling rate and volatility from
    /// the configuration when they were not given.
    pub fn quote(&self, config: &CliConfig) -> Result<OptionQuote> {
        let option_type = OptionType::from_str(&self.option_type)?;
        Ok(OptionQuote::new(
            self.spot,
            self.strike,
            self.rate.unwrap_or(config.default_rate),
            self.volatility.unwrap_or(config.default_volatility),
            self.expiry,
            option_type,
        ))
    }

    /// `--format` if given, else the configured format.
    pub fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        match &self.format {
            Some(raw) => {
                OutputFormat::from_str(raw).map_err(|e| CliError::invalid_argument(e.to_string()))
            }
            None => Ok(config.output_format),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::OptionArgs;

    pub fn args(option_type: &str) -> OptionArgs {
        OptionArgs {
            spot: 100.0,
            strike: 100.0,
            rate: Some(0.05),
            volatility: Some(0.2),
            expiry: 1.0,
            option_type: option_type.to_string(),
            format: Some("json".to_string()),
        }
    }
}
