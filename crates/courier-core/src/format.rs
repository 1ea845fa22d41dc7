//! # Result Formatter
//!
//! Builds the user-facing record. Rounding here is cosmetic: the fee was
//! already fixed from the unrounded chargeable weight.

use crate::billable::{BillableKg, BillableWeight};
use crate::money::Money;
use crate::rates::FeeQuote;
use crate::types::ShipmentQuoteResult;
use crate::weight::WeightTotals;

/// Decimal places kept on weights in the result record.
pub const WEIGHT_DECIMALS: i32 = 4;

/// Rounds to [`WEIGHT_DECIMALS`] places, half away from zero.
///
/// ```rust
/// use courier_core::format::round_weight;
///
/// assert_eq!(round_weight(7.200000000000001), 7.2);
/// assert_eq!(round_weight(1.23456), 1.2346);
/// ```
pub fn round_weight(value: f64) -> f64 {
    let factor = 10f64.powi(WEIGHT_DECIMALS);
    (value * factor).round() / factor
}

/// `"₱1,415 (25 kg)"`.
pub fn format_display(fee: Money, bill_kg: BillableKg) -> String {
    format!("{} ({})", fee, bill_kg)
}

/// Assembles the final record from the pipeline's intermediate values.
pub fn build_result(
    totals: &WeightTotals,
    billable: &BillableWeight,
    fee: &FeeQuote,
) -> ShipmentQuoteResult {
    ShipmentQuoteResult {
        actual_kg: round_weight(totals.actual_kg),
        volumetric_kg: round_weight(totals.volumetric_kg),
        chargeable_kg: round_weight(billable.chargeable_kg),
        bill_kg: billable.bill_kg.kg(),
        fee: fee.fee,
        tier: fee.tier,
        bag_spec: fee.bag_spec,
        display: format_display(fee.fee, billable.bill_kg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn billed(kg: u32) -> BillableKg {
        BillableKg::new(kg).expect("kg inside 1..=50")
    }

    #[test]
    fn test_round_weight() {
        assert_eq!(round_weight(2.5), 2.5);
        assert_eq!(round_weight(0.1 + 0.2), 0.3);
        assert_eq!(round_weight(3.00004), 3.0);
        assert_eq!(round_weight(0.0), 0.0);
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format_display(Money::from_pesos(70), billed(3)), "₱70 (3 kg)");
        assert_eq!(
            format_display(Money::from_pesos(2615), billed(45)),
            "₱2,615 (45 kg)"
        );
    }
}
