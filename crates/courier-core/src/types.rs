//! # Domain Types
//!
//! Inputs, intermediate values and the result record of a shipping quote.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Quote Types                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │ ShipmentInput   │   │ CartItemInput   │   │ ShipmentQuoteResult │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  actualKg       │   │  weightKg       │   │  actualKg (4 dp)    │   │
//! │  │  lengthCm?      │   │  dims?          │   │  volumetricKg       │   │
//! │  │  widthCm?       │   │  quantity       │   │  chargeableKg       │   │
//! │  │  heightCm?      │   │                 │   │  billKg, fee, tier  │   │
//! │  └────────┬────────┘   └────────┬────────┘   │  bagSpec, display   │   │
//! │           │ validate            │ validate   └─────────────────────┘   │
//! │           ▼                     ▼                                      │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ Dimensions (all three, all > 0)         │                           │
//! │  └─────────────────────────────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Raw inputs keep dimensions as three independent `Option`s because that is
//! what a form posts. Validation turns them into `Option<Dimensions>`, after
//! which "partially dimensioned" can no longer be represented.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Inputs
// =============================================================================

/// A single shipment as entered on the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShipmentInput {
    /// Measured weight in kilograms.
    pub actual_kg: f64,
    pub length_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub height_cm: Option<f64>,
}

impl ShipmentInput {
    /// A shipment with no dimensions.
    pub fn new(actual_kg: f64) -> Self {
        ShipmentInput {
            actual_kg,
            ..Default::default()
        }
    }

    /// Sets all three dimensions at once.
    pub fn with_dimensions(mut self, length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        self.length_cm = Some(length_cm);
        self.width_cm = Some(width_cm);
        self.height_cm = Some(height_cm);
        self
    }
}

/// One cart line contributing to a combined shipment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItemInput {
    /// Weight of ONE unit in kilograms.
    pub weight_kg: f64,
    pub length_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub height_cm: Option<f64>,
    /// Number of units; must be positive.
    pub quantity: i64,
}

impl CartItemInput {
    /// A cart line with no dimensions.
    pub fn new(weight_kg: f64, quantity: i64) -> Self {
        CartItemInput {
            weight_kg,
            length_cm: None,
            width_cm: None,
            height_cm: None,
            quantity,
        }
    }

    /// Sets the per-unit dimensions.
    pub fn with_dimensions(mut self, length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        self.length_cm = Some(length_cm);
        self.width_cm = Some(width_cm);
        self.height_cm = Some(height_cm);
        self
    }
}

/// A complete, validated set of parcel dimensions in centimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl Dimensions {
    /// `L × W × H` in cubic centimetres.
    #[inline]
    pub fn volume_cm3(&self) -> f64 {
        self.length_cm * self.width_cm * self.height_cm
    }
}

/// A validated line: per-unit weight, optional dimensions, unit count.
///
/// A single shipment is a parcel with `quantity == 1`, so both entry points
/// share one aggregation path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parcel {
    pub weight_kg: f64,
    pub dimensions: Option<Dimensions>,
    pub quantity: i64,
}

// =============================================================================
// Pricing Tier
// =============================================================================

/// Which stage of the fee ladder priced the shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum PricingTier {
    /// Flat-rate bag (billKg 1..=8).
    Bag,
    /// Per-kilogram table (billKg 9..=50).
    RateTable,
}

/// Flat-rate bag identifiers, as the carrier names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BagSpec {
    #[serde(rename = "SMALL_LE_3KG")]
    SmallLe3Kg,
    #[serde(rename = "MEDIUM_LE_5KG")]
    MediumLe5Kg,
    #[serde(rename = "BIG_LE_8KG")]
    BigLe8Kg,
}

impl BagSpec {
    /// The wire key of the bag.
    pub const fn key(&self) -> &'static str {
        match self {
            BagSpec::SmallLe3Kg => "SMALL_LE_3KG",
            BagSpec::MediumLe5Kg => "MEDIUM_LE_5KG",
            BagSpec::BigLe8Kg => "BIG_LE_8KG",
        }
    }
}

/// One rung of the flat-rate bag ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BagTier {
    pub key: BagSpec,
    /// Inclusive upper bound in whole kilograms.
    pub max_kg: u32,
    pub fee: Money,
}

// =============================================================================
// Quote Result
// =============================================================================

/// The normalized result record shown to the user before checkout.
///
/// ## Serialization
/// ```json
/// {
///   "actualKg": 0.5,
///   "volumetricKg": 7.2,
///   "chargeableKg": 7.2,
///   "billKg": 8,
///   "fee": 160,
///   "tier": "BAG",
///   "bagSpec": "BIG_LE_8KG",
///   "display": "₱160 (8 kg)"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ShipmentQuoteResult {
    /// Total actual weight, rounded to 4 decimals.
    pub actual_kg: f64,
    /// Total volumetric weight, rounded to 4 decimals.
    pub volumetric_kg: f64,
    /// `max(actualKg, volumetricKg)`, rounded to 4 decimals.
    pub chargeable_kg: f64,
    /// Whole kilograms billed, in `1..=50`.
    pub bill_kg: u32,
    pub fee: Money,
    pub tier: PricingTier,
    /// Present if and only if `tier` is `BAG`.
    pub bag_spec: Option<BagSpec>,
    /// `"₱{fee} ({billKg} kg)"`.
    pub display: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bag_spec_wire_keys() {
        for spec in [BagSpec::SmallLe3Kg, BagSpec::MediumLe5Kg, BagSpec::BigLe8Kg] {
            let json = serde_json::to_value(spec).unwrap();
            assert_eq!(json, json!(spec.key()));
        }
    }

    #[test]
    fn test_pricing_tier_wire_names() {
        assert_eq!(serde_json::to_value(PricingTier::Bag).unwrap(), json!("BAG"));
        assert_eq!(
            serde_json::to_value(PricingTier::RateTable).unwrap(),
            json!("RATE_TABLE")
        );
    }

    #[test]
    fn test_shipment_input_deserializes_without_dimensions() {
        let input: ShipmentInput = serde_json::from_value(json!({ "actualKg": 2.5 })).unwrap();
        assert_eq!(input, ShipmentInput::new(2.5));
    }

    #[test]
    fn test_cart_item_deserializes_camel_case() {
        let item: CartItemInput = serde_json::from_value(json!({
            "weightKg": 1.0,
            "lengthCm": 10.0,
            "widthCm": 20.0,
            "heightCm": 30.0,
            "quantity": 2
        }))
        .unwrap();
        assert_eq!(item, CartItemInput::new(1.0, 2).with_dimensions(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_dimensions_volume() {
        let dims = Dimensions {
            length_cm: 40.0,
            width_cm: 30.0,
            height_cm: 30.0,
        };
        assert_eq!(dims.volume_cm3(), 36000.0);
    }
}
