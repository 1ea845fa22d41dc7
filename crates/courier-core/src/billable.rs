//! # Billable-Weight Resolver
//!
//! Turns the weight totals into the whole-kilogram figure the carrier bills.
//!
//! ## Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  chargeableKg = max(actualKg, volumetricKg)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  billKg = max(1, ceil(chargeableKg))     ← unrounded chargeableKg      │
//! │       │                                                                 │
//! │       ├── billKg > 50 → MANUAL_QUOTE_REQUIRED { billKg, maxKg: 50 }    │
//! │       │                                                                 │
//! │       └── OK → BillableKg (1..=50) → fee ladder                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;

use crate::error::{CalculationError, CalculationResult};
use crate::weight::WeightTotals;
use crate::{MAX_BILL_KG, MIN_BILL_KG};

/// Whole kilograms billed, guaranteed to lie in `MIN_BILL_KG..=MAX_BILL_KG`.
///
/// Only [`resolve_billable`] constructs it, which is what lets the fee
/// ladder be total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BillableKg(u32);

impl BillableKg {
    /// Returns the billable kilograms as a plain integer.
    #[inline]
    pub const fn kg(&self) -> u32 {
        self.0
    }

    /// Wraps a whole-kilogram value if it is inside the automatable range.
    pub fn new(kg: u32) -> Option<Self> {
        (MIN_BILL_KG..=MAX_BILL_KG)
            .contains(&kg)
            .then_some(BillableKg(kg))
    }
}

impl fmt::Display for BillableKg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.0)
    }
}

/// Output of the resolver: the unrounded basis and the billed kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillableWeight {
    pub chargeable_kg: f64,
    pub bill_kg: BillableKg,
}

/// `max(actual, volumetric)`.
#[inline]
pub fn chargeable_kg(totals: &WeightTotals) -> f64 {
    totals.actual_kg.max(totals.volumetric_kg)
}

/// Resolves the billable weight or refuses to price automatically.
///
/// ## Example
/// ```rust
/// use courier_core::billable::resolve_billable;
/// use courier_core::weight::WeightTotals;
///
/// let totals = WeightTotals { actual_kg: 0.5, volumetric_kg: 7.2 };
/// let billable = resolve_billable(&totals).unwrap();
/// assert_eq!(billable.bill_kg.kg(), 8);
///
/// let heavy = WeightTotals { actual_kg: 55.0, volumetric_kg: 0.0 };
/// assert!(resolve_billable(&heavy).unwrap_err().is_manual_quote());
/// ```
pub fn resolve_billable(totals: &WeightTotals) -> CalculationResult<BillableWeight> {
    let chargeable = chargeable_kg(totals);
    let ceiled = chargeable.ceil();

    if ceiled > MAX_BILL_KG as f64 {
        return Err(CalculationError::ManualQuoteRequired {
            // `as` saturates, so an absurd total still reports a number.
            bill_kg: ceiled as u64,
            max_kg: MAX_BILL_KG,
        });
    }

    let kg = (ceiled as u32).max(MIN_BILL_KG);
    Ok(BillableWeight {
        chargeable_kg: chargeable,
        bill_kg: BillableKg(kg),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(actual_kg: f64, volumetric_kg: f64) -> WeightTotals {
        WeightTotals {
            actual_kg,
            volumetric_kg,
        }
    }

    #[test]
    fn test_chargeable_is_max() {
        assert_eq!(chargeable_kg(&totals(2.5, 0.0)), 2.5);
        assert_eq!(chargeable_kg(&totals(0.5, 7.2)), 7.2);
        assert_eq!(chargeable_kg(&totals(9.0, 7.2)), 9.0);
    }

    #[test]
    fn test_bill_kg_rounds_up() {
        assert_eq!(resolve_billable(&totals(2.5, 0.0)).unwrap().bill_kg.kg(), 3);
        assert_eq!(resolve_billable(&totals(3.0, 0.0)).unwrap().bill_kg.kg(), 3);
        assert_eq!(resolve_billable(&totals(3.0001, 0.0)).unwrap().bill_kg.kg(), 4);
    }

    #[test]
    fn test_bill_kg_minimum_is_one() {
        let billable = resolve_billable(&totals(0.01, 0.0)).unwrap();
        assert_eq!(billable.bill_kg.kg(), 1);
        assert_eq!(billable.chargeable_kg, 0.01);
    }

    #[test]
    fn test_exactly_fifty_is_priced() {
        assert_eq!(resolve_billable(&totals(50.0, 0.0)).unwrap().bill_kg.kg(), 50);
    }

    #[test]
    fn test_above_fifty_requires_manual_quote() {
        let err = resolve_billable(&totals(50.01, 0.0)).unwrap_err();
        assert_eq!(
            err,
            CalculationError::ManualQuoteRequired {
                bill_kg: 51,
                max_kg: 50
            }
        );

        let err = resolve_billable(&totals(1.0, 120.4)).unwrap_err();
        assert_eq!(
            err,
            CalculationError::ManualQuoteRequired {
                bill_kg: 121,
                max_kg: 50
            }
        );
    }

    #[test]
    fn test_billable_kg_bounds() {
        assert!(BillableKg::new(0).is_none());
        assert_eq!(BillableKg::new(1).map(|b| b.kg()), Some(1));
        assert_eq!(BillableKg::new(50).map(|b| b.kg()), Some(50));
        assert!(BillableKg::new(51).is_none());
        assert_eq!(BillableKg::new(8).unwrap().to_string(), "8 kg");
    }
}
