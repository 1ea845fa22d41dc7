//! # API Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command                                                                │
//! │     │                                                                   │
//! │     ├── read / parse input ──── io / serde_json ──┐                    │
//! │     │                                             ▼                    │
//! │     ├── courier-core ───── CalculationError ──► ApiError ──► stdout    │
//! │     │                                             │           + exit   │
//! │     └── success ──────────────────────────────────┼─────────► stdout   │
//! │                                                   │                    │
//! │  exit 2: VALIDATION_ERROR / MANUAL_QUOTE_REQUIRED │                    │
//! │  exit 1: INVALID_INPUT / IO_ERROR ◄───────────────┘                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Calculation errors keep their core code and details untouched, so a
//! script can branch on `MANUAL_QUOTE_REQUIRED` exactly like the checkout UI.

use serde::Serialize;
use thiserror::Error;

use courier_core::{CalculationError, ErrorCode, ErrorDetails};

/// Error returned from commands, serialized to stdout on failure.
///
/// ```json
/// {
///   "code": "MANUAL_QUOTE_REQUIRED",
///   "message": "Billable weight 55 kg exceeds 50 kg; a manual quote is required",
///   "details": { "billKg": 55, "maxKg": 50 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{code}: {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ApiErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Structured context, present for calculation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

/// Error codes for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    /// Input failed courier-core validation
    ValidationError,

    /// Shipment is above the automatable range
    ManualQuoteRequired,

    /// Input could not be parsed as JSON
    InvalidInput,

    /// Input file could not be read
    IoError,
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            ApiErrorCode::ValidationError => "VALIDATION_ERROR",
            ApiErrorCode::ManualQuoteRequired => "MANUAL_QUOTE_REQUIRED",
            ApiErrorCode::InvalidInput => "INVALID_INPUT",
            ApiErrorCode::IoError => "IO_ERROR",
        };
        f.write_str(code)
    }
}

impl ApiError {
    /// Creates a new API error without details.
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::new(ApiErrorCode::InvalidInput, message)
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.code {
            ApiErrorCode::ValidationError | ApiErrorCode::ManualQuoteRequired => 2,
            ApiErrorCode::InvalidInput | ApiErrorCode::IoError => 1,
        }
    }
}

/// Converts calculation errors, keeping code and details intact.
impl From<CalculationError> for ApiError {
    fn from(err: CalculationError) -> Self {
        let code = match err.code() {
            ErrorCode::ValidationError => ApiErrorCode::ValidationError,
            ErrorCode::ManualQuoteRequired => ApiErrorCode::ManualQuoteRequired,
        };
        ApiError {
            code,
            message: err.to_string(),
            details: Some(err.details()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::invalid_input(format!("Invalid JSON input: {}", err))
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Failed to read input: {}", err);
        ApiError::new(ApiErrorCode::IoError, format!("Failed to read input: {}", err))
    }
}
