//! # Delivery Fee
//!
//! Combines great-circle distance with the active delivery rule and a
//! weight surcharge.
//!
//! ## Fee Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fee = base_fee + distance_km × cost_per_km                             │
//! │                 + max(weight - 5, 0) × 0.50                             │
//! │                                                                         │
//! │  distance_km = haversine(warehouse, destination)                        │
//! │                                                                         │
//! │  No active rule, or no destination ──► fee 0, distance 0 (degraded     │
//! │  mode by design, never an error)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::geo::haversine_km;
use crate::types::{Coordinates, DeliveryRule};
use crate::{WEIGHT_SURCHARGE_PER_KG, WEIGHT_SURCHARGE_THRESHOLD_KG};

/// A delivery fee together with the distance it was priced over.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeliveryQuote {
    /// Total delivery fee (base + per-km + weight surcharge), unrounded.
    pub fee: f64,
    /// Great-circle warehouse-to-destination distance in km.
    pub distance_km: f64,
}

impl DeliveryQuote {
    /// The degraded-mode quote used when no rule or destination exists.
    #[inline]
    pub const fn zero() -> Self {
        DeliveryQuote {
            fee: 0.0,
            distance_km: 0.0,
        }
    }
}

/// Quotes the delivery fee for an order.
///
/// Missing rule and missing destination both take the designed fallback
/// path and return [`DeliveryQuote::zero`]; neither is an error.
///
/// ## Example
/// ```rust
/// use tally_core::delivery::delivery_quote;
/// use tally_core::types::{Coordinates, DeliveryRule};
///
/// let rule = DeliveryRule {
///     id: "d1".into(),
///     base_fee: 5.0,
///     cost_per_km: 1.0,
///     warehouse_lat: 9.9285,
///     warehouse_lng: -8.8921,
///     description: None,
/// };
///
/// // Destination at the warehouse itself: base fee plus the surcharge
/// // for the 5 kg over the threshold.
/// let quote = delivery_quote(Some(Coordinates::new(9.9285, -8.8921)), 10.0, Some(&rule));
/// assert_eq!(quote.fee, 7.5);
/// assert_eq!(quote.distance_km, 0.0);
/// ```
pub fn delivery_quote(
    destination: Option<Coordinates>,
    weight: f64,
    rule: Option<&DeliveryRule>,
) -> DeliveryQuote {
    let (Some(destination), Some(rule)) = (destination, rule) else {
        return DeliveryQuote::zero();
    };

    let distance_km = haversine_km(rule.warehouse(), destination);
    let mut fee = rule.base_fee + distance_km * rule.cost_per_km;

    if weight > WEIGHT_SURCHARGE_THRESHOLD_KG {
        fee += (weight - WEIGHT_SURCHARGE_THRESHOLD_KG) * WEIGHT_SURCHARGE_PER_KG;
    }

    DeliveryQuote { fee, distance_km }
}

// =============================================================================
// Unit Tests
// =============================================================================
