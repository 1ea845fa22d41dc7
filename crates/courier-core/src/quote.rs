//! # Quote Entry Points
//!
//! The two public ways into the pipeline.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ShipmentInput ─┐                                                       │
//! │                 ├─► validate ─► aggregate ─► resolve_billable ─┐        │
//! │  [CartItemInput]┘   (Parcel)   (totals)     (BillableKg)       │        │
//! │                                                                 ▼        │
//! │                     ShipmentQuoteResult ◄── build_result ◄── resolve_fee │
//! │                                                                         │
//! │  Any stage may return CalculationError; nothing after it runs.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both functions are pure: no I/O, no shared state, same input same output.
//! The result is a preview. The server recomputes the fee at settlement.

use tracing::debug;

use crate::billable::resolve_billable;
use crate::error::CalculationResult;
use crate::format::build_result;
use crate::rates::resolve_fee;
use crate::types::{CartItemInput, Parcel, ShipmentInput, ShipmentQuoteResult};
use crate::validation::{validate_cart, validate_shipment};
use crate::weight::aggregate;

/// Quotes one shipment from its weight and optional dimensions.
///
/// ## Example
/// ```rust
/// use courier_core::quote_single_shipment;
///
/// let quote = quote_single_shipment(0.5, Some(40.0), Some(30.0), Some(30.0)).unwrap();
/// assert_eq!(quote.volumetric_kg, 7.2);
/// assert_eq!(quote.bill_kg, 8);
/// assert_eq!(quote.display, "₱160 (8 kg)");
/// ```
pub fn quote_single_shipment(
    actual_kg: f64,
    length_cm: Option<f64>,
    width_cm: Option<f64>,
    height_cm: Option<f64>,
) -> CalculationResult<ShipmentQuoteResult> {
    quote_shipment(&ShipmentInput {
        actual_kg,
        length_cm,
        width_cm,
        height_cm,
    })
}

/// Same as [`quote_single_shipment`], taking the form record directly.
pub fn quote_shipment(input: &ShipmentInput) -> CalculationResult<ShipmentQuoteResult> {
    let parcel = validate_shipment(input)?;
    price(&[parcel])
}

/// Quotes a cart as one combined shipment.
///
/// ## Example
/// ```rust
/// use courier_core::{quote_cart, CartItemInput};
///
/// let quote = quote_cart(&[CartItemInput::new(1.0, 2), CartItemInput::new(3.0, 1)]).unwrap();
/// assert_eq!(quote.actual_kg, 5.0);
/// assert_eq!(quote.fee.pesos(), 120);
///
/// assert!(quote_cart(&[]).is_err());
/// ```
pub fn quote_cart(items: &[CartItemInput]) -> CalculationResult<ShipmentQuoteResult> {
    let parcels = validate_cart(items)?;
    price(&parcels)
}

fn price(parcels: &[Parcel]) -> CalculationResult<ShipmentQuoteResult> {
    let totals = aggregate(parcels);

    let billable = resolve_billable(&totals).map_err(|err| {
        debug!(
            actual_kg = totals.actual_kg,
            volumetric_kg = totals.volumetric_kg,
            code = %err.code(),
            "quote refused"
        );
        err
    })?;

    let fee = resolve_fee(billable.bill_kg);
    let result = build_result(&totals, &billable, &fee);

    debug!(
        parcels = parcels.len(),
        bill_kg = result.bill_kg,
        fee = result.fee.pesos(),
        tier = ?result.tier,
        "shipping quote computed"
    );

    Ok(result)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CalculationError, ErrorCode, FieldValue};
    use crate::types::{BagSpec, PricingTier};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn scenario_small_bag() {
        let quote = quote_single_shipment(2.5, None, None, None).unwrap();
        assert_eq!(quote.chargeable_kg, 2.5);
        assert_eq!(quote.bill_kg, 3);
        assert_eq!(quote.fee.pesos(), 70);
        assert_eq!(quote.tier, PricingTier::Bag);
        assert_eq!(quote.bag_spec, Some(BagSpec::SmallLe3Kg));
        assert_eq!(quote.display, "₱70 (3 kg)");
    }

    #[test]
    fn scenario_volumetric_wins() {
        let quote = quote_single_shipment(0.5, Some(40.0), Some(30.0), Some(30.0)).unwrap();
        assert_eq!(
            quote,
            ShipmentQuoteResult {
                actual_kg: 0.5,
                volumetric_kg: 7.2,
                chargeable_kg: 7.2,
                bill_kg: 8,
                fee: crate::Money::from_pesos(160),
                tier: PricingTier::Bag,
                bag_spec: Some(BagSpec::BigLe8Kg),
                display: "₱160 (8 kg)".to_string(),
            }
        );
    }

    #[test]
    fn scenario_rate_table() {
        let quote = quote_single_shipment(45.0, None, None, None).unwrap();
        assert_eq!(quote.bill_kg, 45);
        assert_eq!(quote.fee.pesos(), 2615);
        assert_eq!(quote.tier, PricingTier::RateTable);
        assert_eq!(quote.bag_spec, None);
        assert_eq!(quote.display, "₱2,615 (45 kg)");
    }

    #[test]
    fn scenario_manual_quote() {
        let err = quote_single_shipment(55.0, None, None, None).unwrap_err();
        assert_eq!(
            err,
            CalculationError::ManualQuoteRequired {
                bill_kg: 55,
                max_kg: 50
            }
        );
        assert_eq!(err.code(), ErrorCode::ManualQuoteRequired);
    }

    #[test]
    fn scenario_cart_totals() {
        let items = [CartItemInput::new(1.0, 2), CartItemInput::new(3.0, 1)];
        let quote = quote_cart(&items).unwrap();
        assert_eq!(quote.actual_kg, 5.0);
        assert_eq!(quote.bill_kg, 5);
        assert_eq!(quote.fee.pesos(), 120);
        assert_eq!(quote.bag_spec, Some(BagSpec::MediumLe5Kg));
    }

    #[test]
    fn scenario_partial_dimensions() {
        let err = quote_single_shipment(1.0, Some(10.0), Some(10.0), None).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
        let CalculationError::Validation(inner) = err else {
            panic!("expected a validation error");
        };
        assert_eq!(inner.field(), "heightCm");
        assert_eq!(inner.value(), FieldValue::Missing);
    }

    #[test]
    fn test_cart_rejects_empty() {
        let err = quote_cart(&[]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[test]
    fn test_cart_single_bad_item_fails_whole_cart() {
        let items = [
            CartItemInput::new(1.0, 1),
            CartItemInput::new(1.0, 1).with_dimensions(10.0, f64::INFINITY, 10.0),
        ];
        let err = quote_cart(&items).unwrap_err();
        let CalculationError::Validation(inner) = err else {
            panic!("expected a validation error");
        };
        assert_eq!(inner.field(), "items[1].widthCm");
    }

    #[test]
    fn test_cart_volumetric_can_trigger_manual_quote() {
        // 3 × (60×50×40 / 5000 = 24 kg) = 72 kg volumetric
        let items = [CartItemInput::new(2.0, 3).with_dimensions(60.0, 50.0, 40.0)];
        let err = quote_cart(&items).unwrap_err();
        assert_eq!(
            err,
            CalculationError::ManualQuoteRequired {
                bill_kg: 72,
                max_kg: 50
            }
        );
    }

    #[test]
    fn test_single_and_one_line_cart_agree() {
        let single = quote_single_shipment(3.2, Some(20.0), Some(20.0), Some(20.0)).unwrap();
        let cart = quote_cart(&[CartItemInput::new(3.2, 1).with_dimensions(20.0, 20.0, 20.0)])
            .unwrap();
        assert_eq!(single, cart);
    }

    fn dims() -> impl Strategy<Value = Option<(f64, f64, f64)>> {
        prop::option::of((1.0f64..80.0, 1.0f64..80.0, 1.0f64..80.0))
    }

    proptest! {
        #[test]
        fn prop_no_dimensions_means_actual_is_chargeable(actual in 0.001f64..50.0) {
            let quote = quote_single_shipment(actual, None, None, None).unwrap();
            prop_assert_eq!(quote.volumetric_kg, 0.0);
            prop_assert_eq!(quote.chargeable_kg, crate::format::round_weight(actual));
        }

        #[test]
        fn prop_billing_invariants(actual in 0.001f64..70.0, d in dims()) {
            let (l, w, h) = match d {
                Some((l, w, h)) => (Some(l), Some(w), Some(h)),
                None => (None, None, None),
            };
            let volumetric = d.map(|(l, w, h)| l * w * h / 5000.0).unwrap_or(0.0);
            let chargeable = actual.max(volumetric);
            let expected_bill = chargeable.ceil().max(1.0);

            match quote_single_shipment(actual, l, w, h) {
                Ok(quote) => {
                    prop_assert!(expected_bill <= 50.0);
                    prop_assert_eq!(quote.bill_kg as f64, expected_bill);
                    prop_assert_eq!(quote.chargeable_kg, crate::format::round_weight(chargeable));
                    prop_assert_eq!(quote.bag_spec.is_some(), quote.tier == PricingTier::Bag);
                    prop_assert_eq!(quote.tier == PricingTier::Bag, quote.bill_kg <= 8);
                }
                Err(err) => {
                    prop_assert!(expected_bill > 50.0);
                    prop_assert_eq!(
                        err,
                        CalculationError::ManualQuoteRequired {
                            bill_kg: expected_bill as u64,
                            max_kg: 50,
                        }
                    );
                }
            }
        }

        #[test]
        fn prop_non_positive_weight_rejected(actual in -100.0f64..=0.0) {
            let err = quote_single_shipment(actual, None, None, None).unwrap_err();
            prop_assert_eq!(err.code(), ErrorCode::ValidationError);
        }

        #[test]
        fn prop_deterministic(actual in 0.001f64..60.0, d in dims()) {
            let (l, w, h) = match d {
                Some((l, w, h)) => (Some(l), Some(w), Some(h)),
                None => (None, None, None),
            };
            prop_assert_eq!(
                quote_single_shipment(actual, l, w, h),
                quote_single_shipment(actual, l, w, h)
            );
        }
    }
}
