//! # Checkout Draft
//!
//! What the checkout module submits for a cart on this lane.
//!
//! ## Settlement Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quote_cart(items)                                                      │
//! │       │                                                                 │
//! │       ├── Ok(quote) ────────► shipping.status = QUOTED                  │
//! │       │                       shipping.quote  = preview shown to user   │
//! │       │                                                                 │
//! │       ├── ManualQuoteRequired ► shipping.status = MANUAL_QUOTE_REQUIRED │
//! │       │                       UI offers "contact us for a quote"        │
//! │       │                                                                 │
//! │       └── Validation ───────► no draft, error goes back to the form     │
//! │                                                                         │
//! │  shippingFee submitted = 0 in EVERY draft. The server recomputes the    │
//! │  fee with its own calculator and that number is the one charged.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use courier_core::{quote_cart, CalculationError, CartItemInput, Money, ShipmentQuoteResult};

/// Shipping section of an order draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingPreview {
    /// The calculator priced the cart; advisory only.
    Quoted { quote: ShipmentQuoteResult },

    /// Too heavy for automatic pricing.
    #[serde(rename_all = "camelCase")]
    ManualQuoteRequired { bill_kg: u64, max_kg: u32 },
}

/// An order ready to submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub lane: String,
    pub items: Vec<CartItemInput>,
    pub shipping: ShippingPreview,
    /// Fee sent with the order. Always zero: the server settles it.
    pub shipping_fee: Money,
}

impl OrderDraft {
    /// The preview fee shown to the user, if the cart could be priced.
    pub fn preview_fee(&self) -> Option<Money> {
        match &self.shipping {
            ShippingPreview::Quoted { quote } => Some(quote.fee),
            ShippingPreview::ManualQuoteRequired { .. } => None,
        }
    }
}

/// Builds the order draft for a cart.
///
/// Validation errors are returned to the caller; a manual-quote outcome
/// becomes part of the draft.
pub fn draft_order(lane: &str, items: Vec<CartItemInput>) -> Result<OrderDraft, CalculationError> {
    let shipping = match quote_cart(&items) {
        Ok(quote) => ShippingPreview::Quoted { quote },
        Err(CalculationError::ManualQuoteRequired { bill_kg, max_kg }) => {
            ShippingPreview::ManualQuoteRequired { bill_kg, max_kg }
        }
        Err(err) => return Err(err),
    };

    Ok(OrderDraft {
        lane: lane.to_string(),
        items,
        shipping,
        shipping_fee: Money::zero(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quoted_draft_submits_zero_fee() {
        let items = vec![CartItemInput::new(1.0, 2), CartItemInput::new(3.0, 1)];
        let draft = draft_order("regional-courier", items).unwrap();

        assert!(draft.shipping_fee.is_zero());
        assert_eq!(draft.preview_fee(), Some(Money::from_pesos(120)));

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["shippingFee"], json!(0));
        assert_eq!(value["shipping"]["status"], json!("QUOTED"));
        assert_eq!(value["shipping"]["quote"]["fee"], json!(120));
    }

    #[test]
    fn test_manual_quote_draft() {
        let draft = draft_order("regional-courier", vec![CartItemInput::new(30.0, 2)]).unwrap();

        assert_eq!(
            draft.shipping,
            ShippingPreview::ManualQuoteRequired {
                bill_kg: 60,
                max_kg: 50
            }
        );
        assert_eq!(draft.preview_fee(), None);
        assert!(draft.shipping_fee.is_zero());

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value["shipping"],
            json!({ "status": "MANUAL_QUOTE_REQUIRED", "billKg": 60, "maxKg": 50 })
        );
    }

    #[test]
    fn test_invalid_cart_has_no_draft() {
        let err = draft_order("regional-courier", vec![]).unwrap_err();
        assert!(!err.is_manual_quote());
    }
}
