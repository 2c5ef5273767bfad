//! Check command implementation
//!
//! Prints the resolved configuration and runs the engine against reference
//! values.

use std::io::Write;

use greeks_core::types::OptionType;
use greeks_engine::analytical::{greeks, price};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Reference inputs: S = K = 100, r = 5%, σ = 20%, T = 1.
const REFERENCE: (f64, f64, f64, f64, f64) = (100.0, 100.0, 0.05, 0.2, 1.0);
const REFERENCE_CALL: f64 = 10.450583572185565;
const REFERENCE_PUT: f64 = 5.573526022256971;
const TOLERANCE: f64 = 1e-8;

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Checking configuration and engine");
    let report = self_check(config)?;
    writeln!(std::io::stdout().lock(), "{report}")?;
    info!("Check complete");
    Ok(())
}

fn expect_close(what: &str, actual: f64, expected: f64) -> Result<()> {
    if (actual - expected).abs() > TOLERANCE {
        return Err(CliError::SelfCheck(format!(
            "{what}: got {actual}, expected {expected}"
        )));
    }
    Ok(())
}

fn self_check(config: &CliConfig) -> Result<String> {
    let (s, k, r, sigma, t) = REFERENCE;

    if config.default_volatility == 0.0 {
        warn!("default_volatility is 0; live options need an explicit --vol");
    }

    let call = price(s, k, r, sigma, t, OptionType::Call)?;
    let put = price(s, k, r, sigma, t, OptionType::Put)?;
    expect_close("call price", call, REFERENCE_CALL)?;
    expect_close("put price", put, REFERENCE_PUT)?;
    expect_close("put-call parity", call - put, s - k * (-r * t).exp())?;

    let bundle = greeks(s, k, r, sigma, t, OptionType::Call)?;
    expect_close("bundle price", bundle.price, call)?;

    let expired = greeks(110.0, k, r, 0.0, 0.0, OptionType::Call)?;
    expect_close("expired payoff", expired.price, 10.0)?;
    expect_close("expired delta", expired.delta, 1.0)?;

    let lines = [
        format!("greeks v{}", env!("CARGO_PKG_VERSION")),
        "Configuration:".to_string(),
        format!("  log_level:          {}", config.log_level),
        format!("  output_format:      {}", config.output_format),
        format!("  default_rate:       {}", config.default_rate),
        format!("  default_volatility: {}", config.default_volatility),
        format!("  precision:          {}", config.precision),
        "Engine:".to_string(),
        format!("  reference call:     {call:.10}"),
        format!("  reference put:      {put:.10}"),
        "  status:             ok".to_string(),
    ];
    Ok(lines.join("\n"))
}
