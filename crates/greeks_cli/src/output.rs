//! Rendering of command results for stdout.
//!
//! Tables use box-drawing characters and a fixed number of decimals; JSON is
//! pretty-printed with full `f64` precision.

use greeks_engine::analytical::{Greeks, OptionQuote};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

const LABEL_WIDTH: usize = 10;
const VALUE_WIDTH: usize = 24;

#[derive(Serialize)]
struct PriceReport<'a> {
    quote: &'a OptionQuote,
    price: f64,
}

#[derive(Serialize)]
struct GreeksReport<'a> {
    quote: &'a OptionQuote,
    greeks: &'a Greeks,
}

/// Render a single price.
pub fn render_price(
    quote: &OptionQuote,
    price: f64,
    format: OutputFormat,
    precision: usize,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&PriceReport { quote, price })?),
        OutputFormat::Table => Ok(table(quote, &[("price", price)], precision)),
    }
}

/// Render the price and all five Greeks.
pub fn render_greeks(
    quote: &OptionQuote,
    greeks: &Greeks,
    format: OutputFormat,
    precision: usize,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&GreeksReport { quote, greeks })?),
        OutputFormat::Table => {
            let rows = [
                ("price", greeks.price),
                ("delta", greeks.delta),
                ("gamma", greeks.gamma),
                ("theta", greeks.theta),
                ("vega", greeks.vega),
                ("rho", greeks.rho),
            ];
            Ok(table(quote, &rows, precision))
        }
    }
}

fn describe(quote: &OptionQuote) -> String {
    format!(
        "{} S={} K={} r={} σ={} T={}",
        quote.option_type, quote.spot, quote.strike, quote.rate, quote.volatility, quote.expiry
    )
}

fn table(quote: &OptionQuote, rows: &[(&str, f64)], precision: usize) -> String {
    let rule = |left: char, mid: char, right: char| {
        format!(
            "{left}{}{mid}{}{right}",
            "─".repeat(LABEL_WIDTH + 2),
            "─".repeat(VALUE_WIDTH + 2)
        )
    };

    let mut lines = Vec::with_capacity(rows.len() + 5);
    lines.push(describe(quote));
    lines.push(rule('┌', '┬', '┐'));
    lines.push(format!(
        "│ {:<lw$} │ {:>vw$} │",
        "Measure",
        "Value",
        lw = LABEL_WIDTH,
        vw = VALUE_WIDTH
    ));
    lines.push(rule('├', '┼', '┤'));
    for (label, value) in rows {
        lines.push(format!(
            "│ {:<lw$} │ {:>vw$.prec$} │",
            label,
            value,
            lw = LABEL_WIDTH,
            vw = VALUE_WIDTH,
            prec = precision
        ));
    }
    lines.push(rule('└', '┴', '┘'));
    lines.join("\n")
}
