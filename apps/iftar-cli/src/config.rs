//! CLI configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override what is loaded here.
//!
//! | variable             | default     | meaning                          |
//! |----------------------|-------------|----------------------------------|
//! | `IFTAR_CHECKOUT_URL` | `/checkout` | prefix for generated hand-off URLs |
//! | `IFTAR_CURRENCY`     | `CAD`       | code printed after totals        |
//! | `IFTAR_OUTPUT`       | `human`     | `human` or `json`                |

use std::env;

use clap::ValueEnum;
use serde::Serialize;

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Checkout page the `encode` command points at.
    pub checkout_url: String,

    /// ISO 4217 code shown after totals.
    pub currency_code: String,

    /// Default output format.
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            checkout_url: "/checkout".to_string(),
            currency_code: iftar_core::format::CURRENCY_CODE.to_string(),
            output: OutputFormat::Human,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let checkout_url = lookup("IFTAR_CHECKOUT_URL").unwrap_or(defaults.checkout_url);
        if checkout_url.trim().is_empty() || checkout_url.contains('?') {
            return Err(ConfigError::InvalidValue("IFTAR_CHECKOUT_URL".to_string()));
        }

        let currency_code = lookup("IFTAR_CURRENCY").unwrap_or(defaults.currency_code);
        if currency_code.len() != 3 || !currency_code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ConfigError::InvalidValue("IFTAR_CURRENCY".to_string()));
        }

        let output = match lookup("IFTAR_OUTPUT") {
            None => defaults.output,
            Some(raw) => OutputFormat::from_str(&raw, true)
                .map_err(|_| ConfigError::InvalidValue("IFTAR_OUTPUT".to_string()))?,
        };

        Ok(CliConfig {
            checkout_url,
            currency_code,
            output,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
