//! iftar - command-line front end for IftarBox ordering
//!
//! Prices checkout URLs, builds them from flags, and checks them the same
//! way the checkout page does.

#![forbid(unsafe_code)]

mod commands;
mod config;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::encode::EncodeArgs;
use config::{CliConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "iftar",
    version,
    about = "Price, build and check IftarBox checkout links",
    author = "IftarBox Team"
)]
struct Cli {
    /// Output format (overrides IFTAR_OUTPUT)
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Currency code printed after totals (overrides IFTAR_CURRENCY)
    #[arg(long, global = true)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the price breakdown for a checkout URL or query string
    Quote {
        /// Full URL or bare query, e.g. "box=family&type=one-day"
        query: String,
    },

    /// Build a checkout URL from an order
    Encode(EncodeArgs),

    /// Report every problem with a checkout URL (exit code 1 if any)
    Validate {
        /// Full URL or bare query
        query: String,
    },

    /// List the delivery dates of an order
    Schedule {
        /// Full URL or bare query
        query: String,
    },
}

fn main() -> ExitCode {
    init_tracing();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = CliConfig::load().context("failed to load configuration")?;
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(currency) = cli.currency {
        config.currency_code = currency;
    }
    debug!(?config, "configuration loaded");

    let format = config.output;
    let (text, code) = match cli.command {
        Commands::Quote { query } => {
            let text = commands::quote::execute(&query, format, &config)?;
            (text, ExitCode::SUCCESS)
        }
        Commands::Encode(args) => {
            let text = commands::encode::execute(&args, format, &config)?;
            (text, ExitCode::SUCCESS)
        }
        Commands::Validate { query } => {
            let outcome = commands::validate::execute(&query, format)?;
            let code = if outcome.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
            (outcome.output, code)
        }
        Commands::Schedule { query } => {
            let text = commands::schedule::execute(&query, format)?;
            (text, ExitCode::SUCCESS)
        }
    };

    println!("{text}");
    Ok(code)
}

/// Logs go to stderr so stdout stays parseable with `--output json`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,iftar_core=info,iftar_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
