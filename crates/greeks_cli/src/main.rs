//! greeks - Black-Scholes prices and Greeks from the command line
//!
//! # Commands
//!
//! - `greeks price --spot S --strike K --expiry T --option-type call` - Price one option
//! - `greeks greeks --spot S --strike K --expiry T --option-type put` - Price plus all Greeks
//! - `greeks check` - Show the resolved configuration and self-test the engine
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate parses arguments, resolves
//! configuration, and renders results. All numerics live in
//! `greeks_engine`. Results go to stdout; logs go to stderr.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::OptionArgs;
use config::{build_config, CliArgs};

/// Black-Scholes European option pricer
#[derive(Parser)]
#[command(name = "greeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML) [default: ./greeks.toml if present]
    #[arg(short, long, global = true, value_name = "FILE", env = "GREEKS_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option
    Price(OptionArgs),

    /// Price a European option and compute its Greeks
    Greeks(OptionArgs),

    /// Check configuration and self-test the engine
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            verbose: cli.verbose,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        log_level = %config.log_level,
        output_format = %config.output_format,
        default_rate = config.default_rate,
        default_volatility = config.default_volatility,
        precision = config.precision,
        "Configuration loaded"
    );

    let result = match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config),
        Commands::Greeks(args) => commands::greeks::run(args, &config),
        Commands::Check => commands::check::run(&config),
    };

    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }
    result
}
