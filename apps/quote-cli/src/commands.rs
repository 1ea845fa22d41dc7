//! # Commands
//!
//! One function per subcommand. Each returns an [`Outcome`]; rendering and
//! exit codes live in `main.rs`.

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use courier_core::rates::BAG_MAX_KG;
use courier_core::{
    quote_cart, quote_single_shipment, BagTier, CartItemInput, Money, ShipmentQuoteResult,
    BAG_TIERS, MAX_BILL_KG, MIN_BILL_KG, RATE_TABLE, VOLUMETRIC_DIVISOR,
};

use crate::checkout::{draft_order, OrderDraft, ShippingPreview};
use crate::cli::{Commands, OutputFormat};
use crate::config::CliConfig;
use crate::error::ApiError;

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Quote(ShipmentQuoteResult),
    Draft(OrderDraft),
    Rates(RateCard),
}

impl Outcome {
    /// Plain-text rendering for `--format text`.
    pub fn text(&self) -> String {
        match self {
            Outcome::Quote(quote) => quote.display.clone(),
            Outcome::Draft(draft) => match &draft.shipping {
                ShippingPreview::Quoted { quote } => format!(
                    "{} (preview; submitted shipping fee {})",
                    quote.display, draft.shipping_fee
                ),
                ShippingPreview::ManualQuoteRequired { bill_kg, max_kg } => format!(
                    "Manual quote required: {} kg exceeds {} kg",
                    bill_kg, max_kg
                ),
            },
            Outcome::Rates(card) => card.text(),
        }
    }

    /// Renders in the configured format.
    pub fn render(&self, format: OutputFormat) -> Result<String, ApiError> {
        Ok(match format {
            OutputFormat::Json => serde_json::to_string(self)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(self)?,
            OutputFormat::Text => self.text(),
        })
    }
}

/// One row of the published rate table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateRow {
    pub kg: u32,
    pub fee: Money,
}

/// The constants a caller needs to explain pricing to a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCard {
    pub bag_tiers: Vec<BagTier>,
    pub rate_table: Vec<RateRow>,
    pub volumetric_divisor: f64,
    pub min_bill_kg: u32,
    pub max_bill_kg: u32,
}

impl RateCard {
    /// Snapshot of the calculator's published constants.
    pub fn current() -> Self {
        RateCard {
            bag_tiers: BAG_TIERS.to_vec(),
            rate_table: RATE_TABLE
                .iter()
                .map(|(kg, fee)| RateRow { kg: *kg, fee: *fee })
                .collect(),
            volumetric_divisor: VOLUMETRIC_DIVISOR,
            min_bill_kg: MIN_BILL_KG,
            max_bill_kg: MAX_BILL_KG,
        }
    }

    fn text(&self) -> String {
        let mut lines = Vec::new();
        lines.push("Flat-rate bags:".to_string());
        for tier in &self.bag_tiers {
            lines.push(format!("  <= {} kg  {:<14} {}", tier.max_kg, tier.key.key(), tier.fee));
        }
        lines.push("Rate table:".to_string());
        // Rows at or below the bag ceiling are shadowed by the bags.
        for row in self.rate_table.iter().filter(|row| row.kg > BAG_MAX_KG) {
            lines.push(format!("  {:>2} kg  {}", row.kg, row.fee));
        }
        lines.push(format!(
            "Volumetric weight = L x W x H (cm) / {}; billed {}..={} kg, heavier needs a manual quote",
            self.volumetric_divisor, self.min_bill_kg, self.max_bill_kg
        ));
        lines.join("\n")
    }
}

/// Dispatches a parsed command.
pub fn execute(command: &Commands, config: &CliConfig) -> Result<Outcome, ApiError> {
    match command {
        Commands::Quote {
            weight,
            length,
            width,
            height,
        } => {
            debug!(weight = %weight, ?length, ?width, ?height, "quote command");
            let quote = quote_single_shipment(*weight, *length, *width, *height)?;
            Ok(Outcome::Quote(quote))
        }
        Commands::Cart { input } => {
            let items = read_cart(input)?;
            debug!(items = items.len(), "cart command");
            let quote = quote_cart(&items)?;
            Ok(Outcome::Quote(quote))
        }
        Commands::Checkout { input } => {
            let items = read_cart(input)?;
            debug!(items = items.len(), lane = %config.lane, "checkout command");
            let draft = draft_order(&config.lane, items)?;
            debug!(preview_fee = ?draft.preview_fee(), "order draft built");
            if let ShippingPreview::ManualQuoteRequired { bill_kg, .. } = &draft.shipping {
                info!(bill_kg = *bill_kg, "cart routed to manual quote");
            }
            Ok(Outcome::Draft(draft))
        }
        Commands::Rates => {
            debug!("rates command");
            Ok(Outcome::Rates(RateCard::current()))
        }
    }
}

/// Reads a JSON array of cart items from a file, or stdin for `-`.
pub fn read_cart(path: &Path) -> Result<Vec<CartItemInput>, ApiError> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    parse_cart(&raw)
}

/// Parses the cart JSON document.
pub fn parse_cart(raw: &str) -> Result<Vec<CartItemInput>, ApiError> {
    Ok(serde_json::from_str(raw)?)
}
