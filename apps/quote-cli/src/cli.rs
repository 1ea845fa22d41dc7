//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Compact JSON, one document per run
    #[default]
    Json,
    /// Indented JSON
    Pretty,
    /// The display string only (e.g. "₱70 (3 kg)")
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            "text" => Ok(OutputFormat::Text),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "courier-quote")]
#[command(version)]
#[command(about = "Preview the courier shipping fee for a parcel or a cart")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, pretty, text). Uses COURIER_OUTPUT if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Quote a single shipment from its weight and optional dimensions
    Quote {
        /// Actual weight in kilograms
        #[arg(long, short = 'w', allow_negative_numbers = true)]
        weight: f64,

        /// Length in centimetres
        #[arg(long, allow_negative_numbers = true)]
        length: Option<f64>,

        /// Width in centimetres
        #[arg(long, allow_negative_numbers = true)]
        width: Option<f64>,

        /// Height in centimetres
        #[arg(long, allow_negative_numbers = true)]
        height: Option<f64>,
    },

    /// Quote a cart read from a JSON array of items ("-" for stdin)
    Cart {
        /// Path to the cart JSON file
        input: PathBuf,
    },

    /// Build an order draft for a cart; the shipping fee is left for the server
    Checkout {
        /// Path to the cart JSON file ("-" for stdin)
        input: PathBuf,
    },

    /// Print the bag tiers, rate table and limits
    Rates,
}
