//! # Fee Ladder
//!
//! Maps billable kilograms to a fee through two ordered stages.
//!
//! ## Ladder
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Fee Ladder                                      │
//! │                                                                         │
//! │  billKg ──► Stage 1: flat bags (billKg ≤ 8)                            │
//! │             first tier whose maxKg ≥ billKg wins                       │
//! │               ≤3 kg  SMALL_LE_3KG   ₱70                                │
//! │               ≤5 kg  MEDIUM_LE_5KG  ₱120                               │
//! │               ≤8 kg  BIG_LE_8KG     ₱160                               │
//! │                 │                                                       │
//! │                 ▼ (no bag)                                              │
//! │          Stage 2: rate table (9..=50 kg), one literal entry per kg     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Bag Precedence
//! The rate table also carries entries for 1..=8 kg. They are never reached:
//! the bag stage always answers first for those weights, and the server twin
//! does the same. Do not merge the two stages.

use serde::Serialize;
use ts_rs::TS;

use crate::billable::BillableKg;
use crate::money::Money;
use crate::types::{BagSpec, BagTier, PricingTier};

// =============================================================================
// Pricing Data
// =============================================================================

/// Flat-rate bags, ascending by `max_kg`. The order is load-bearing.
pub static BAG_TIERS: [BagTier; 3] = [
    BagTier {
        key: BagSpec::SmallLe3Kg,
        max_kg: 3,
        fee: Money::from_pesos(70),
    },
    BagTier {
        key: BagSpec::MediumLe5Kg,
        max_kg: 5,
        fee: Money::from_pesos(120),
    },
    BagTier {
        key: BagSpec::BigLe8Kg,
        max_kg: 8,
        fee: Money::from_pesos(160),
    },
];

/// Heaviest billable weight a bag can carry.
pub const BAG_MAX_KG: u32 = 8;

/// Carrier rate card: `(kg, fee)` for every whole kilogram 1..=50.
///
/// Literal pricing data. Entry `i` is for `i + 1` kg.
pub static RATE_TABLE: [(u32, Money); 50] = [
    (1, Money::from_pesos(155)),
    (2, Money::from_pesos(195)),
    (3, Money::from_pesos(235)),
    (4, Money::from_pesos(275)),
    (5, Money::from_pesos(315)),
    (6, Money::from_pesos(355)),
    (7, Money::from_pesos(375)),
    (8, Money::from_pesos(395)),
    (9, Money::from_pesos(455)),
    (10, Money::from_pesos(515)),
    (11, Money::from_pesos(575)),
    (12, Money::from_pesos(635)),
    (13, Money::from_pesos(695)),
    (14, Money::from_pesos(755)),
    (15, Money::from_pesos(815)),
    (16, Money::from_pesos(875)),
    (17, Money::from_pesos(935)),
    (18, Money::from_pesos(995)),
    (19, Money::from_pesos(1055)),
    (20, Money::from_pesos(1115)),
    (21, Money::from_pesos(1175)),
    (22, Money::from_pesos(1235)),
    (23, Money::from_pesos(1295)),
    (24, Money::from_pesos(1355)),
    (25, Money::from_pesos(1415)),
    (26, Money::from_pesos(1475)),
    (27, Money::from_pesos(1535)),
    (28, Money::from_pesos(1595)),
    (29, Money::from_pesos(1655)),
    (30, Money::from_pesos(1715)),
    (31, Money::from_pesos(1775)),
    (32, Money::from_pesos(1835)),
    (33, Money::from_pesos(1895)),
    (34, Money::from_pesos(1955)),
    (35, Money::from_pesos(2015)),
    (36, Money::from_pesos(2075)),
    (37, Money::from_pesos(2135)),
    (38, Money::from_pesos(2195)),
    (39, Money::from_pesos(2255)),
    (40, Money::from_pesos(2315)),
    (41, Money::from_pesos(2375)),
    (42, Money::from_pesos(2435)),
    (43, Money::from_pesos(2495)),
    (44, Money::from_pesos(2555)),
    (45, Money::from_pesos(2615)),
    (46, Money::from_pesos(2675)),
    (47, Money::from_pesos(2735)),
    (48, Money::from_pesos(2795)),
    (49, Money::from_pesos(2855)),
    (50, Money::from_pesos(2915)),
];

// =============================================================================
// Lookups
// =============================================================================

/// Result of running the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FeeQuote {
    pub fee: Money,
    pub tier: PricingTier,
    pub bag_spec: Option<BagSpec>,
}

/// First bag whose bound covers `kg`, scanning in ladder order.
pub fn bag_tier_for(kg: u32) -> Option<&'static BagTier> {
    BAG_TIERS.iter().find(|tier| tier.max_kg >= kg)
}

/// Raw rate-table lookup, ignoring bag precedence.
///
/// ## Example
/// ```rust
/// use courier_core::rates::rate_for_kg;
///
/// assert_eq!(rate_for_kg(25).map(|m| m.pesos()), Some(1415));
/// assert_eq!(rate_for_kg(51), None);
/// ```
pub fn rate_for_kg(kg: u32) -> Option<Money> {
    let index = kg.checked_sub(1)? as usize;
    RATE_TABLE
        .get(index)
        .filter(|(entry_kg, _)| *entry_kg == kg)
        .map(|(_, fee)| *fee)
}

/// Runs the two-stage ladder.
///
/// Total over [`BillableKg`]: every value in 1..=50 is covered by a bag or by
/// the table, so there is no "no fee" outcome to fall back from.
pub fn resolve_fee(bill_kg: BillableKg) -> FeeQuote {
    let kg = bill_kg.kg();

    if kg <= BAG_MAX_KG {
        if let Some(tier) = bag_tier_for(kg) {
            return FeeQuote {
                fee: tier.fee,
                tier: PricingTier::Bag,
                bag_spec: Some(tier.key),
            };
        }
    }

    let (entry_kg, fee) = RATE_TABLE[(kg - 1) as usize];
    debug_assert_eq!(entry_kg, kg, "rate table out of order at {} kg", kg);
    FeeQuote {
        fee,
        tier: PricingTier::RateTable,
        bag_spec: None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
