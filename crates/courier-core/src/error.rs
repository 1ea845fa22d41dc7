//! # Error Types
//!
//! Domain-specific error types for courier-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CalculationError (closed: exactly two codes)                          │
//! │  ├── Validation(ValidationError)  → VALIDATION_ERROR                   │
//! │  │     field-level: which input, which value                           │
//! │  └── ManualQuoteRequired          → MANUAL_QUOTE_REQUIRED              │
//! │        billKg above the automatable ceiling                            │
//! │                                                                         │
//! │  Flow: ValidationError → CalculationError → caller (CLI / checkout)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Carry the field name and offending value, never a generic message
//! 3. Both codes are fatal to the call; nothing here is retried or downgraded
//! 4. `MANUAL_QUOTE_REQUIRED` is a business outcome, not a bug

use serde::Serialize;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Field Value
// =============================================================================

/// The offending value attached to a validation failure.
///
/// Serializes untagged so the caller sees `"value": 0`, `"value": -2.5`
/// or `"value": null` for a missing field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// The field was not supplied at all.
    Missing,
    /// A real-valued measurement (kg or cm).
    Number(f64),
    /// An integer input such as a quantity.
    Integer(i64),
    /// A collection length, e.g. an empty item list.
    Count(usize),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Missing => write!(f, "missing"),
            FieldValue::Number(v) => write!(f, "{}", v),
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Count(v) => write!(f, "{} entries", v),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the validator before any arithmetic runs. Every variant names
/// the field so the checkout form can highlight the exact input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required collection is empty (the cart has no items).
    #[error("{field} is required")]
    Required { field: String },

    /// A number is NaN or infinite.
    #[error("{field} must be a finite number (got {value})")]
    NotFinite { field: String, value: f64 },

    /// A weight, dimension or quantity is zero or negative.
    #[error("{field} must be greater than zero (got {value})")]
    MustBePositive { field: String, value: FieldValue },

    /// Some but not all of length/width/height were supplied.
    ///
    /// ## User Workflow
    /// ```text
    /// Length: 10   Width: 10   Height: [  ]
    ///      │
    ///      ▼
    /// IncompleteDimensions { field: "heightCm" }
    ///      │
    ///      ▼
    /// UI highlights the Height box: "required when any dimension is set"
    /// ```
    #[error("{field} is required when any dimension is supplied")]
    IncompleteDimensions { field: String },
}

impl ValidationError {
    /// The offending field name (`actualKg`, `items[2].quantity`, ...).
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::NotFinite { field, .. }
            | ValidationError::MustBePositive { field, .. }
            | ValidationError::IncompleteDimensions { field } => field,
        }
    }

    /// The offending value.
    pub fn value(&self) -> FieldValue {
        match self {
            ValidationError::Required { .. } => FieldValue::Count(0),
            ValidationError::NotFinite { value, .. } => FieldValue::Number(*value),
            ValidationError::MustBePositive { value, .. } => *value,
            ValidationError::IncompleteDimensions { .. } => FieldValue::Missing,
        }
    }

    /// Prefixes the field with a cart position: `weightKg` → `items[1].weightKg`.
    pub(crate) fn at_item(self, index: usize) -> Self {
        let prefix = |field: String| format!("items[{}].{}", index, field);
        match self {
            ValidationError::Required { field } => ValidationError::Required {
                field: prefix(field),
            },
            ValidationError::NotFinite { field, value } => ValidationError::NotFinite {
                field: prefix(field),
                value,
            },
            ValidationError::MustBePositive { field, value } => ValidationError::MustBePositive {
                field: prefix(field),
                value,
            },
            ValidationError::IncompleteDimensions { field } => {
                ValidationError::IncompleteDimensions {
                    field: prefix(field),
                }
            }
        }
    }
}

// =============================================================================
// Calculation Error
// =============================================================================

/// Every way a quote can fail.
///
/// Closed on purpose: callers branch on exactly these two outcomes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// Malformed or incomplete input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Well-formed input above the automatable range.
    ///
    /// ## When This Occurs
    /// - `ceil(chargeableKg)` is above 50 kg
    /// - The carrier prices these by negotiation; the caller must show a
    ///   "contact us for a quote" path instead of a number
    #[error("Billable weight {bill_kg} kg exceeds {max_kg} kg; a manual quote is required")]
    ManualQuoteRequired { bill_kg: u64, max_kg: u32 },
}

/// Machine-readable error codes, shared with the server twin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    ManualQuoteRequired,
}

impl ErrorCode {
    /// The wire spelling of the code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::ManualQuoteRequired => "MANUAL_QUOTE_REQUIRED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured context for an error, serialized as `{field, value}` or
/// `{billKg, maxKg}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    Field {
        field: String,
        value: FieldValue,
    },
    #[serde(rename_all = "camelCase")]
    Limit {
        bill_kg: u64,
        max_kg: u32,
    },
}

/// The full error record as the checkout module receives it.
///
/// ```json
/// { "code": "MANUAL_QUOTE_REQUIRED",
///   "message": "Billable weight 55 kg exceeds 50 kg; a manual quote is required",
///   "details": { "billKg": 55, "maxKg": 50 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPayload {
    pub code: ErrorCode,
    pub message: String,
    pub details: ErrorDetails,
}

impl CalculationError {
    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            CalculationError::Validation(_) => ErrorCode::ValidationError,
            CalculationError::ManualQuoteRequired { .. } => ErrorCode::ManualQuoteRequired,
        }
    }

    /// Returns the structured context for this failure.
    pub fn details(&self) -> ErrorDetails {
        match self {
            CalculationError::Validation(err) => ErrorDetails::Field {
                field: err.field().to_string(),
                value: err.value(),
            },
            CalculationError::ManualQuoteRequired { bill_kg, max_kg } => ErrorDetails::Limit {
                bill_kg: *bill_kg,
                max_kg: *max_kg,
            },
        }
    }

    /// Checks whether the caller should route to the manual-quote path.
    pub fn is_manual_quote(&self) -> bool {
        matches!(self, CalculationError::ManualQuoteRequired { .. })
    }

    /// Builds the serializable `{code, message, details}` record.
    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload {
            code: self.code(),
            message: self.to_string(),
            details: self.details(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CalculationError.
pub type CalculationResult<T> = Result<T, CalculationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "actualKg".to_string(),
            value: FieldValue::Number(-2.5),
        };
        assert_eq!(err.to_string(), "actualKg must be greater than zero (got -2.5)");

        let err = ValidationError::IncompleteDimensions {
            field: "heightCm".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "heightCm is required when any dimension is supplied"
        );
    }

    #[test]
    fn test_manual_quote_message() {
        let err = CalculationError::ManualQuoteRequired {
            bill_kg: 55,
            max_kg: 50,
        };
        assert_eq!(
            err.to_string(),
            "Billable weight 55 kg exceeds 50 kg; a manual quote is required"
        );
        assert!(err.is_manual_quote());
    }

    #[test]
    fn test_validation_converts_to_calculation_error() {
        let err: CalculationError = ValidationError::Required {
            field: "items".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert!(!err.is_manual_quote());
        assert_eq!(err.to_string(), "items is required");
    }

    #[test]
    fn test_at_item_prefixes_field() {
        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
            value: FieldValue::Integer(0),
        }
        .at_item(3);
        assert_eq!(err.field(), "items[3].quantity");
        assert_eq!(err.value(), FieldValue::Integer(0));
    }

    #[test]
    fn test_payload_serialization_validation() {
        let err: CalculationError = ValidationError::IncompleteDimensions {
            field: "heightCm".to_string(),
        }
        .into();
        let value = serde_json::to_value(err.to_payload()).unwrap();
        assert_eq!(
            value,
            json!({
                "code": "VALIDATION_ERROR",
                "message": "heightCm is required when any dimension is supplied",
                "details": { "field": "heightCm", "value": null }
            })
        );
    }

    #[test]
    fn test_payload_serialization_manual_quote() {
        let err = CalculationError::ManualQuoteRequired {
            bill_kg: 55,
            max_kg: 50,
        };
        let value = serde_json::to_value(err.details()).unwrap();
        assert_eq!(value, json!({ "billKg": 55, "maxKg": 50 }));
        assert_eq!(err.code().to_string(), "MANUAL_QUOTE_REQUIRED");
    }
}
