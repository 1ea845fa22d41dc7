//! # courier-quote
//!
//! Command-line shipping-fee preview for the courier lane.
//!
//! ## Usage
//! ```text
//! courier-quote quote --weight 0.5 --length 40 --width 30 --height 30
//! courier-quote cart cart.json
//! courier-quote checkout - < cart.json
//! courier-quote rates --format text
//! ```
//!
//! Results go to stdout, logs go to stderr.

mod checkout;
mod cli;
mod commands;
mod config;
mod error;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, OutputFormat};
use crate::config::CliConfig;
use crate::error::ApiError;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_env().with_format(cli.format);

    init_tracing(&config.log_filter)?;
    for ignored in &config.ignored {
        warn!(value = %ignored, "ignoring invalid configuration value");
    }
    info!(output = %config.output, lane = %config.lane, "configuration loaded");

    match commands::execute(&cli.command, &config) {
        Ok(outcome) => {
            let rendered = outcome.render(config.output).context("rendering result")?;
            println!("{}", rendered);
            Ok(())
        }
        Err(err) => {
            println!("{}", render_error(&err, config.output)?);
            std::process::exit(err.exit_code());
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `COURIER_LOG=courier_core=trace` - Same, when RUST_LOG is unset
/// - Default: INFO, DEBUG for this workspace's crates
fn init_tracing(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter)
        .or_else(|_| EnvFilter::try_new(config::DEFAULT_LOG_FILTER))
        .context("building log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("installing tracing subscriber")
}

fn render_error(err: &ApiError, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(err)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(err)?,
        OutputFormat::Text => err.to_string(),
    })
}
