//! # Great-Circle Distance
//!
//! Haversine distance between two latitude/longitude points.
//!
//! ## The Haversine Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  dLat = radians(lat2 - lat1)                                            │
//! │  dLng = radians(lng2 - lng1)                                            │
//! │                                                                         │
//! │  a = sin²(dLat/2) + cos(radians(lat1))·cos(radians(lat2))·sin²(dLng/2)  │
//! │  c = 2·atan2(√a, √(1-a))                                                │
//! │                                                                         │
//! │  distance = R·c      with R = 6371 km (mean Earth radius)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Good to ~0.5% over typical delivery distances, which is more than
//! enough for a per-km fee model.

use crate::types::Coordinates;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the great-circle distance between two points in kilometers.
///
/// Pure function: no error conditions for finite inputs, identical inputs
/// always produce identical output.
///
/// ## Example
/// ```rust
/// use tally_core::geo::haversine_km;
/// use tally_core::types::Coordinates;
///
/// let a = Coordinates::new(9.9285, -8.8921);
/// assert_eq!(haversine_km(a, a), 0.0);
/// ```
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lng = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

// =============================================================================
// Unit Tests
// =============================================================================
