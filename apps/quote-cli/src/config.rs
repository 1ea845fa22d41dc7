//! # CLI Configuration
//!
//! Stores configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--format`)
//! 2. Environment variables (`COURIER_*`, `RUST_LOG`)
//! 3. Defaults (this file)
//!
//! Pricing itself has no configuration. The divisor, the 50 kg ceiling and
//! the tables are part of courier-core's contract with the server.

use serde::Serialize;

use crate::cli::OutputFormat;

/// Default log filter when neither `RUST_LOG` nor `COURIER_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,courier_core=debug,courier_quote=debug";

/// Default lane label echoed into checkout drafts.
pub const DEFAULT_LANE: &str = "regional-courier";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,

    /// How results are written to stdout.
    pub output: OutputFormat,

    /// Carrier lane label for order drafts.
    pub lane: String,

    /// Values that were present but rejected, reported once logging is up.
    #[serde(skip)]
    pub ignored: Vec<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::default(),
            lane: DEFAULT_LANE.to_string(),
            ignored: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Creates a CliConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `RUST_LOG` / `COURIER_LOG`: log filter (`RUST_LOG` wins)
    /// - `COURIER_OUTPUT`: `json`, `pretty` or `text`
    /// - `COURIER_LANE`: lane label for checkout drafts
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();

        if let Some(filter) = lookup("RUST_LOG").or_else(|| lookup("COURIER_LOG")) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        if let Some(output) = lookup("COURIER_OUTPUT") {
            match output.parse::<OutputFormat>() {
                Ok(format) => config.output = format,
                Err(e) => config.ignored.push(format!("COURIER_OUTPUT: {}", e)),
            }
        }

        if let Some(lane) = lookup("COURIER_LANE") {
            if !lane.trim().is_empty() {
                config.lane = lane.trim().to_string();
            }
        }

        config
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.output = format;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup(&[]));
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.lane, DEFAULT_LANE);
    }

    #[test]
    fn test_env_overrides() {
        let config = CliConfig::from_lookup(lookup(&[
            ("COURIER_LOG", "warn"),
            ("COURIER_OUTPUT", "Pretty"),
            ("COURIER_LANE", " luzon-express "),
        ]));
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.output, OutputFormat::Pretty);
        assert_eq!(config.lane, "luzon-express");
    }

    #[test]
    fn test_rust_log_wins_over_courier_log() {
        let config = CliConfig::from_lookup(lookup(&[
            ("RUST_LOG", "trace"),
            ("COURIER_LOG", "warn"),
        ]));
        assert_eq!(config.log_filter, "trace");
    }

    #[test]
    fn test_invalid_output_falls_back() {
        let config = CliConfig::from_lookup(lookup(&[("COURIER_OUTPUT", "xml")]));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.ignored, vec!["COURIER_OUTPUT: unknown output format 'xml'"]);
    }

    #[test]
    fn test_flag_overrides_env() {
        let config = CliConfig::from_lookup(lookup(&[("COURIER_OUTPUT", "text")]))
            .with_format(Some(OutputFormat::Pretty));
        assert_eq!(config.output, OutputFormat::Pretty);

        let config = CliConfig::default().with_format(None);
        assert_eq!(config.output, OutputFormat::Json);
    }
}
