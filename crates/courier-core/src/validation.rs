//! # Validation Module
//!
//! Rejects malformed input before any arithmetic runs.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Rules                                   │
//! │                                                                         │
//! │  weight (actualKg / weightKg)                                          │
//! │  ├── finite            else NotFinite                                  │
//! │  └── > 0               else MustBePositive                             │
//! │                                                                         │
//! │  dimensions (lengthCm, widthCm, heightCm)                              │
//! │  ├── none supplied     → no volumetric weight                          │
//! │  ├── some supplied     → IncompleteDimensions (first missing field)    │
//! │  └── all supplied      → each finite and > 0                           │
//! │                                                                         │
//! │  quantity (cart only)                                                  │
//! │  └── > 0               else MustBePositive                             │
//! │                                                                         │
//! │  items (cart only)                                                     │
//! │  └── non-empty         else Required                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Checks run in field order and stop at the first failure, so the same bad
//! input always reports the same field.
//!
//! ## Usage
//! ```rust
//! use courier_core::validation::{validate_dimensions, validate_weight};
//!
//! assert!(validate_weight("actualKg", 2.5).is_ok());
//! assert!(validate_weight("actualKg", 0.0).is_err());
//! assert!(validate_dimensions(Some(10.0), Some(10.0), None).is_err());
//! ```

use crate::error::{FieldValue, ValidationError};
use crate::types::{CartItemInput, Dimensions, Parcel, ShipmentInput};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a strictly positive, finite measurement.
///
/// Used for weights and for each dimension.
pub fn validate_weight(field: &str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
            value,
        });
    }

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
            value: FieldValue::Number(value),
        });
    }

    Ok(value)
}

/// Validates a line quantity.
pub fn validate_quantity(qty: i64) -> ValidationResult<i64> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
            value: FieldValue::Integer(qty),
        });
    }

    Ok(qty)
}

/// Validates the all-or-nothing dimension triple.
///
/// ## Returns
/// - `Ok(None)` when no dimension was supplied
/// - `Ok(Some(dims))` when all three are supplied and valid
/// - `Err(IncompleteDimensions)` naming the first missing field otherwise
pub fn validate_dimensions(
    length_cm: Option<f64>,
    width_cm: Option<f64>,
    height_cm: Option<f64>,
) -> ValidationResult<Option<Dimensions>> {
    match (length_cm, width_cm, height_cm) {
        (None, None, None) => Ok(None),
        (Some(length), Some(width), Some(height)) => Ok(Some(Dimensions {
            length_cm: validate_weight("lengthCm", length)?,
            width_cm: validate_weight("widthCm", width)?,
            height_cm: validate_weight("heightCm", height)?,
        })),
        (length, width, _) => {
            let missing = if length.is_none() {
                "lengthCm"
            } else if width.is_none() {
                "widthCm"
            } else {
                "heightCm"
            };
            Err(ValidationError::IncompleteDimensions {
                field: missing.to_string(),
            })
        }
    }
}

// =============================================================================
// Input Validators
// =============================================================================

/// Validates a single-shipment form into a one-unit parcel.
pub fn validate_shipment(input: &ShipmentInput) -> ValidationResult<Parcel> {
    let weight_kg = validate_weight("actualKg", input.actual_kg)?;
    let dimensions = validate_dimensions(input.length_cm, input.width_cm, input.height_cm)?;

    Ok(Parcel {
        weight_kg,
        dimensions,
        quantity: 1,
    })
}

/// Validates one cart line. Field names are NOT yet prefixed with the
/// item position; [`validate_cart`] does that.
pub fn validate_cart_item(item: &CartItemInput) -> ValidationResult<Parcel> {
    let weight_kg = validate_weight("weightKg", item.weight_kg)?;
    let dimensions = validate_dimensions(item.length_cm, item.width_cm, item.height_cm)?;
    let quantity = validate_quantity(item.quantity)?;

    Ok(Parcel {
        weight_kg,
        dimensions,
        quantity,
    })
}

/// Validates every cart line; the first bad line fails the whole cart.
///
/// ## Example
/// ```rust
/// use courier_core::types::CartItemInput;
/// use courier_core::validation::validate_cart;
///
/// let err = validate_cart(&[CartItemInput::new(1.0, 1), CartItemInput::new(-1.0, 1)])
///     .unwrap_err();
/// assert_eq!(err.field(), "items[1].weightKg");
/// ```
pub fn validate_cart(items: &[CartItemInput]) -> ValidationResult<Vec<Parcel>> {
    if items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_cart_item(item).map_err(|err| err.at_item(index)))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
