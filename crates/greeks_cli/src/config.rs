//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`GREEKS_*`)
//! 3. Config file
//! 4. Default values

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "GREEKS_LOG_LEVEL";
/// Environment variable overriding the output format.
pub const ENV_OUTPUT_FORMAT: &str = "GREEKS_OUTPUT_FORMAT";
/// Environment variable overriding the default risk-free rate.
pub const ENV_DEFAULT_RATE: &str = "GREEKS_DEFAULT_RATE";
/// Environment variable overriding the default volatility.
pub const ENV_DEFAULT_VOLATILITY: &str = "GREEKS_DEFAULT_VOLATILITY";

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "greeks.toml";

/// Largest number of decimals the table renderer will print.
pub const MAX_PRECISION: usize = 15;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Invalid precision: {0}. Must be at most {MAX_PRECISION}")]
    InvalidPrecision(usize),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels understood by the tracing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is not set
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Default output format
    #[serde(deserialize_with = "deserialize_output_format")]
    pub output_format: OutputFormat,
    /// Risk-free rate used when `--rate` is omitted
    pub default_rate: f64,
    /// Volatility used when `--vol` is omitted
    pub default_volatility: f64,
    /// Decimals printed in table output
    pub precision: usize,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_output_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            output_format: OutputFormat::Table,
            default_rate: 0.0,
            default_volatility: 0.2,
            precision: 6,
        }
    }
}

fn parse_f64(name: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
        })
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields whose `GREEKS_*` variable is set.
    ///
    /// `lookup` resolves a variable name; [`build_config`] passes the
    /// process environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.output_format = OutputFormat::from_str(&format)?;
        }
        if let Some(rate) = lookup(ENV_DEFAULT_RATE) {
            self.default_rate = parse_f64(ENV_DEFAULT_RATE, &rate)?;
        }
        if let Some(vol) = lookup(ENV_DEFAULT_VOLATILITY) {
            self.default_volatility = parse_f64(ENV_DEFAULT_VOLATILITY, &vol)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_rate.is_finite() {
            return Err(ConfigError::InvalidValue {
                name: "default_rate",
                value: self.default_rate.to_string(),
            });
        }
        // Zero is allowed: it is only an error for a live option, which the
        // engine reports on its own.
        if !self.default_volatility.is_finite() || self.default_volatility < 0.0 {
            return Err(ConfigError::InvalidValue {
                name: "default_volatility",
                value: self.default_volatility.to_string(),
            });
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        Ok(())
    }
}

/// Global CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// `--verbose` forces debug logging
    pub verbose: bool,
}

/// Build configuration from all sources
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // An explicit path must exist; the implicit one is optional.
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let implicit = Path::new(DEFAULT_CONFIG_FILE);
            if implicit.is_file() {
                CliConfig::from_file(implicit)?
            } else {
                CliConfig::default()
            }
        }
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
