//! Price command implementation
//!
//! Prices a single European option.

use std::io::Write;

use tracing::{debug, info, warn};

use super::OptionArgs;
use crate::config::CliConfig;
use crate::output;
use crate::Result;

/// Run the price command
pub fn run(args: &OptionArgs, config: &CliConfig) -> Result<()> {
    let rendered = evaluate(args, config)?;
    writeln!(std::io::stdout().lock(), "{rendered}")?;
    Ok(())
}

fn evaluate(args: &OptionArgs, config: &CliConfig) -> Result<String> {
    let quote = args.quote(config)?;
    let format = args.output_format(config)?;

    info!(option_type = %quote.option_type, %format, "Pricing option");
    debug!(
        spot = quote.spot,
        strike = quote.strike,
        rate = quote.rate,
        volatility = quote.volatility,
        expiry = quote.expiry,
        "Inputs"
    );

    let price = quote.price().inspect_err(|e| warn!(error = %e, "Pricing failed"))?;
    debug!(price, "Priced");

    output::render_price(&quote, price, format, config.precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::args;
    use crate::CliError;
    use approx::assert_relative_eq;
    use greeks_core::types::PricingError;

    fn priced(a: &OptionArgs) -> f64 {
        let out = evaluate(a, &CliConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        value["price"].as_f64().unwrap()
    }

    #[test]
    fn test_reference_prices() {
        assert_relative_eq!(priced(&args("call")), 10.450583572185565, epsilon = 1e-8);
        assert_relative_eq!(priced(&args("put")), 5.573526022256971, epsilon = 1e-8);
    }

    #[test]
    fn test_expired_option_prices_at_intrinsic() {
        let mut a = args("call");
        a.spot = 110.0;
        a.expiry = 0.0;
        a.volatility = Some(0.0);
        assert_eq!(priced(&a), 10.0);
    }

    #[test]
    fn test_zero_volatility_is_rejected() {
        let mut a = args("call");
        a.volatility = Some(0.0);
        let err = evaluate(&a, &CliConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Pricing(PricingError::InvalidInput(_))));
    }

    #[test]
    fn test_table_output() {
        let mut a = args("c");
        a.format = Some("table".to_string());
        let config = CliConfig {
            precision: 2,
            ..Default::default()
        };
        let out = evaluate(&a, &config).unwrap();
        assert!(out.contains("10.45"));
        assert!(!out.contains("10.451"));
    }
}
