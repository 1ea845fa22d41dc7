//! # Money Module
//!
//! Provides the `Money` type for shipping fees.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Weights are real numbers (2.5 kg, 7.2 kg volumetric)                   │
//! │  Fees are NOT: every fee on the carrier's card is a whole peso amount. │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pesos                                            │
//! │    Floating point stops at the billable-weight `ceil`.                 │
//! │    Everything after that is integer lookup, so the preview and the     │
//! │    server can never disagree by a rounding centavo.                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use courier_core::money::Money;
//!
//! let fee = Money::from_pesos(1415);
//! assert_eq!(fee.pesos(), 1415);
//! assert_eq!(fee.to_string(), "₱1,415");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use ts_rs::TS;

/// Currency symbol used in every display string.
pub const CURRENCY_SYMBOL: &str = "₱";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole Philippine pesos.
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the wire type the server uses for fees
/// - **Single field tuple struct**: serializes as a bare number (`70`)
/// - **No float constructor**: fees come from literal tables, never arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole pesos.
    ///
    /// ## Example
    /// ```rust
    /// use courier_core::money::Money;
    ///
    /// let fee = Money::from_pesos(70);
    /// assert_eq!(fee.pesos(), 70);
    /// ```
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos)
    }

    /// Returns the amount in whole pesos.
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    ///
    /// Used by callers as the settlement placeholder, never by the calculator.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

/// Groups the integer part in threes: `2915` → `"2,915"`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `₱1,415`. The separator is fixed, not locale-driven, so the
/// preview string matches the server's byte for byte.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}",
            sign,
            CURRENCY_SYMBOL,
            group_thousands(self.0.unsigned_abs())
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
