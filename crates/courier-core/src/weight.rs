//! # Weight Aggregator
//!
//! Reduces validated parcels to two scalar totals: actual and volumetric
//! weight.
//!
//! ## Volumetric Formula
//! ```text
//! volumetricKg = lengthCm × widthCm × heightCm / 5000
//!
//! 40 × 30 × 30 cm  →  36000 / 5000  →  7.2 kg
//! ```
//!
//! The divisor is the carrier's published constant. It is not configurable:
//! changing it here without changing the server twin would desync the price.

use crate::types::{Dimensions, Parcel};
use crate::VOLUMETRIC_DIVISOR;

/// Summed weights of everything in the shipment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightTotals {
    pub actual_kg: f64,
    pub volumetric_kg: f64,
}

/// Volumetric weight of one unit, or `0` without dimensions.
#[inline]
pub fn volumetric_kg(dimensions: Option<&Dimensions>) -> f64 {
    match dimensions {
        Some(dims) => dims.volume_cm3() / VOLUMETRIC_DIVISOR,
        None => 0.0,
    }
}

/// Sums `weight × quantity` and `volumetric × quantity` over the parcels,
/// in input order.
pub fn aggregate(parcels: &[Parcel]) -> WeightTotals {
    parcels
        .iter()
        .fold(WeightTotals::default(), |totals, parcel| {
            let quantity = parcel.quantity as f64;
            WeightTotals {
                actual_kg: totals.actual_kg + parcel.weight_kg * quantity,
                volumetric_kg: totals.volumetric_kg
                    + volumetric_kg(parcel.dimensions.as_ref()) * quantity,
            }
        })
}
