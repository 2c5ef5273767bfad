//! Greeks command implementation
//!
//! Computes the price and all five Greeks of a single European option in
//! one pass.

use std::io::Write;

use tracing::{debug, info, warn};

use super::OptionArgs;
use crate::config::CliConfig;
use crate::output;
use crate::Result;

/// Run the greeks command
pub fn run(args: &OptionArgs, config: &CliConfig) -> Result<()> {
    let rendered = evaluate(args, config)?;
    writeln!(std::io::stdout().lock(), "{rendered}")?;
    Ok(())
}

fn evaluate(args: &OptionArgs, config: &CliConfig) -> Result<String> {
    let quote = args.quote(config)?;
    let format = args.output_format(config)?;

    info!(option_type = %quote.option_type, %format, "Computing greeks");
    debug!(
        spot = quote.spot,
        strike = quote.strike,
        rate = quote.rate,
        volatility = quote.volatility,
        expiry = quote.expiry,
        "Inputs"
    );

    let greeks = quote
        .greeks()
        .inspect_err(|e| warn!(error = %e, "Greeks evaluation failed"))?;
    debug!(
        price = greeks.price,
        delta = greeks.delta,
        gamma = greeks.gamma,
        theta = greeks.theta,
        vega = greeks.vega,
        rho = greeks.rho,
        "Evaluated"
    );

    output::render_greeks(&quote, &greeks, format, config.precision)
}
