//! # courier-core: Shipping-Fee Preview for the Courier Lane
//!
//! This crate prices a shipment for one regional carrier from its weight and
//! dimensions, or from a whole cart. It is pure computation with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Checkout / Cart (external caller)                  │   │
//! │  │    shows the preview, submits the order with a zero fee        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ quote_single_shipment / quote_cart     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ courier-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  validation ─► weight ─► billable ─► rates ─► format            │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CACHE • NO CLOCK • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │        Server twin (system of record, settles the fee)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`] - Rejects malformed input with field-level errors
//! - [`weight`] - Actual and volumetric weight totals
//! - [`billable`] - Billable kilograms and the 50 kg ceiling
//! - [`rates`] - Bag tiers, rate table, fee ladder
//! - [`format`] - Result record and display string
//! - [`quote`] - Public entry points
//! - [`money`] - Whole-peso money type
//! - [`types`] - Inputs and the result record
//! - [`error`] - `CalculationError` and friends
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, on every thread
//! 2. **Mirror the Server**: constants, rounding and ladder order match the
//!    server twin exactly; see `tests/fixtures/conformance.json`
//! 3. **Refuse, Never Guess**: above 50 kg the answer is an error, not a fee
//! 4. **Explicit Errors**: all failures are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use courier_core::{quote_single_shipment, PricingTier};
//!
//! let quote = quote_single_shipment(2.5, None, None, None).unwrap();
//! assert_eq!(quote.bill_kg, 3);
//! assert_eq!(quote.fee.pesos(), 70);
//! assert_eq!(quote.tier, PricingTier::Bag);
//! assert_eq!(quote.display, "₱70 (3 kg)");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billable;
pub mod error;
pub mod format;
pub mod money;
pub mod quote;
pub mod rates;
pub mod types;
pub mod validation;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{
    CalculationError, CalculationResult, ErrorCode, ErrorDetails, ErrorPayload, FieldValue,
    ValidationError,
};
pub use money::Money;
pub use quote::{quote_cart, quote_shipment, quote_single_shipment};
pub use rates::{BAG_TIERS, RATE_TABLE};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Carrier's volumetric divisor: `L × W × H (cm³) / 5000 = kg`.
///
/// Fixed by the carrier's published formula; never parameterized.
pub const VOLUMETRIC_DIVISOR: f64 = 5000.0;

/// Lowest billable weight. A shipment never bills as zero.
pub const MIN_BILL_KG: u32 = 1;

/// Highest automatically priced weight.
///
/// ## Business Reason
/// Above this the carrier negotiates rates by hand, so the calculator
/// returns `MANUAL_QUOTE_REQUIRED` instead of a number.
pub const MAX_BILL_KG: u32 = 50;
