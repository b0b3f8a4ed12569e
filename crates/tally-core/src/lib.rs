//! # tally-core: Pure Pricing Logic for Tally
//!
//! This crate is the **heart** of Tally. It computes the final payable
//! amount for an order as a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  pricing-api (Axum HTTP)                        │   │
//! │  │    validate request ──► cache lookup ──► JSON response         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │    tax    │  │ discount  │  │ delivery  │  │  engine   │  │   │
//! │  │   │ brackets  │  │   rules   │  │ geo + fee │  │ breakdown │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  tally-db (Rule Store)                          │   │
//! │  │        SQLite queries, migrations, rule snapshots               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (OrderInput, DiscountRule, PricingBreakdown, ...)
//! - [`geo`] - Great-circle distance between coordinates
//! - [`tax`] - Tax bracket lookup
//! - [`discount`] - Discount rule evaluation
//! - [`delivery`] - Delivery fee computation
//! - [`engine`] - Orchestrates the above into a full breakdown
//! - [`validation`] - Boundary input validation
//! - [`error`] - Typed validation errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Rules**: Rule sets are passed in as immutable snapshots,
//!    never fetched behind the caller's back
//! 4. **Explicit Errors**: Validation errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::engine;
//! use tally_core::types::{OrderInput, RuleSnapshot};
//!
//! let order = OrderInput {
//!     subtotal: 250.0,
//!     weight: 2.0,
//!     destination: None,
//!     products: None,
//! };
//!
//! // Subtotal 250 falls in the 5% tax bracket; with no rules loaded
//! // there is no discount and no delivery fee
//! let breakdown = engine::calculate(&order, &RuleSnapshot::default());
//! assert_eq!(breakdown.tax_rate, 5.0);
//! assert_eq!(breakdown.final_amount, 262.5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod delivery;
pub mod discount;
pub mod engine;
pub mod error;
pub mod geo;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::PricingBreakdown` instead of
// `use tally_core::types::PricingBreakdown`

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Weight threshold (kg) above which the delivery surcharge kicks in.
///
/// ## Business Reason
/// Orders up to 5 kg ship at the plain distance-based fee. Every kg over
/// the threshold costs [`WEIGHT_SURCHARGE_PER_KG`] extra.
pub const WEIGHT_SURCHARGE_THRESHOLD_KG: f64 = 5.0;

/// Flat surcharge per kg over [`WEIGHT_SURCHARGE_THRESHOLD_KG`].
///
/// Fixed by the fee model, not configurable per delivery rule.
pub const WEIGHT_SURCHARGE_PER_KG: f64 = 0.50;

/// Rounds a value to 2 decimal places for monetary/percentage display.
///
/// ## Example
/// ```rust
/// use tally_core::round2;
///
/// assert_eq!(round2(12.3456), 12.35);
/// assert_eq!(round2(0.125), 0.13);
/// ```
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.3456), 12.35);
        assert_eq!(round2(7.124), 7.12);
        assert_eq!(round2(7.126), 7.13);
        assert_eq!(round2(232.5), 232.5);
        assert_eq!(round2(0.0), 0.0);
    }
}
