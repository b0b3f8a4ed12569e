//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OrderInput    │   │  DiscountRule   │   │  DeliveryRule   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  subtotal       │   │  kind           │   │  base_fee       │       │
//! │  │  weight         │   │  threshold      │   │  cost_per_km    │       │
//! │  │  destination    │   │  rate           │   │  warehouse_lat  │       │
//! │  │  products       │   │  required_...   │   │  warehouse_lng  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌───────────────────────────────────────┐       │
//! │  │  RuleSnapshot   │   │          PricingBreakdown             │       │
//! │  │  ─────────────  │   │  ─────────────────────────────────    │       │
//! │  │  discounts []   │   │  subtotal, tax, discount, delivery,   │       │
//! │  │  delivery ?     │   │  final_amount (all rounded to 2 dp)   │       │
//! │  └─────────────────┘   └───────────────────────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Everything here is either a read-only input or a single computed output
//! per request. Nothing is mutated and nothing is persisted by the core.

use serde::{Deserialize, Serialize};

// =============================================================================
// Coordinates
// =============================================================================

/// A latitude/longitude pair in decimal degrees.
///
/// Inputs must be finite; the boundary validator enforces this before
/// anything reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Coordinates {
            latitude,
            longitude,
        }
    }
}

// =============================================================================
// Order Input
// =============================================================================

/// The order as seen by the pricing engine.
///
/// ## Invariant
/// `destination` carries latitude and longitude together: the boundary
/// validator rejects requests where only one of the two is supplied, so
/// the core never sees a half-present pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInput {
    /// Pre-tax, pre-discount order value. Non-negative.
    pub subtotal: f64,

    /// Total order weight in kg. Non-negative.
    pub weight: f64,

    /// Where the order ships to, if a delivery quote is wanted.
    pub destination: Option<Coordinates>,

    /// Product names in the order, used by product-combo discount rules.
    pub products: Option<Vec<String>>,
}

// =============================================================================
// Discount Rules
// =============================================================================

/// The condition family a discount rule belongs to.
///
/// Rule records come from storage, so the set of kinds can grow ahead of
/// this enum. Anything we do not recognize deserializes as `Unknown` and
/// is skipped during evaluation rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    /// Applies when the order subtotal is strictly above a threshold.
    OrderTotal,
    /// Applies when the order contains at least one required product.
    ProductCombo,
    /// Any kind this version of the engine does not understand.
    #[serde(other)]
    Unknown,
}

/// A single discount rule record.
///
/// Immutable reference data: loaded once per calculation as part of a
/// [`RuleSnapshot`] and never modified by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountRule {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Which condition family this rule belongs to.
    pub kind: DiscountKind,

    /// Subtotal threshold. Only meaningful for `OrderTotal` rules.
    pub threshold: f64,

    /// Discount as a decimal fraction (0.05 = 5%).
    pub rate: f64,

    /// Products that trigger the rule. Only meaningful for `ProductCombo`
    /// rules; one overlapping product is enough.
    pub required_products: Vec<String>,
}

impl DiscountRule {
    /// Convenience constructor for an order-total rule.
    pub fn order_total(id: impl Into<String>, threshold: f64, rate: f64) -> Self {
        DiscountRule {
            id: id.into(),
            kind: DiscountKind::OrderTotal,
            threshold,
            rate,
            required_products: Vec::new(),
        }
    }

    /// Convenience constructor for a product-combo rule.
    pub fn product_combo(
        id: impl Into<String>,
        rate: f64,
        required_products: Vec<String>,
    ) -> Self {
        DiscountRule {
            id: id.into(),
            kind: DiscountKind::ProductCombo,
            threshold: 0.0,
            rate,
            required_products,
        }
    }
}

// =============================================================================
// Delivery Rule
// =============================================================================

/// The fee model for deliveries from a single warehouse.
///
/// At most one rule is active at a time. When none exists the engine
/// quotes a zero fee and zero distance rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRule {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Flat fee charged on every delivery.
    pub base_fee: f64,

    /// Fee per km of great-circle distance from the warehouse.
    pub cost_per_km: f64,

    /// Warehouse latitude in decimal degrees.
    pub warehouse_lat: f64,

    /// Warehouse longitude in decimal degrees.
    pub warehouse_lng: f64,

    /// Human-readable label ("Jos warehouse").
    pub description: Option<String>,
}

impl DeliveryRule {
    /// Returns the warehouse position as coordinates.
    #[inline]
    pub fn warehouse(&self) -> Coordinates {
        Coordinates::new(self.warehouse_lat, self.warehouse_lng)
    }
}

// =============================================================================
// Rule Snapshot
// =============================================================================

/// An immutable view of the rule set for one calculation.
///
/// ## Why a snapshot?
/// The engine never talks to storage. The caller loads whatever rules are
/// current, freezes them here, and passes them in. This keeps the engine
/// pure and trivially testable, and means concurrent callers cannot
/// observe rules changing mid-calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSnapshot {
    /// All active discount rules, evaluated independently.
    pub discounts: Vec<DiscountRule>,

    /// The active delivery rule, if one exists.
    pub delivery: Option<DeliveryRule>,
}

// =============================================================================
// Pricing Breakdown
// =============================================================================

/// The full result of one pricing calculation.
///
/// Rates are percentages for display (5.0 = 5%); every field is rounded
/// to 2 decimal places. This struct is the sole contract surface of the
/// core: however it gets wrapped (HTTP, CLI, batch), this is what comes
/// out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub subtotal: f64,
    /// Tax rate as a percentage (e.g. 5.0).
    pub tax_rate: f64,
    pub tax_amount: f64,
    /// Discount rate as a percentage. Uncapped: independent rules sum, so
    /// this can exceed 100.
    pub discount_rate: f64,
    pub discount_amount: f64,
    pub delivery_fee: f64,
    /// Great-circle distance to the destination in km.
    pub delivery_distance: f64,
    pub final_amount: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_kind_serde_names() {
        let kind: DiscountKind = serde_json::from_str("\"order_total\"").unwrap();
        assert_eq!(kind, DiscountKind::OrderTotal);

        let kind: DiscountKind = serde_json::from_str("\"product_combo\"").unwrap();
        assert_eq!(kind, DiscountKind::ProductCombo);
    }

    #[test]
    fn test_discount_kind_unknown_is_tolerated() {
        let kind: DiscountKind = serde_json::from_str("\"flash_sale\"").unwrap();
        assert_eq!(kind, DiscountKind::Unknown);
    }

    #[test]
    fn test_rule_constructors() {
        let rule = DiscountRule::order_total("r1", 200.0, 0.05);
        assert_eq!(rule.kind, DiscountKind::OrderTotal);
        assert!(rule.required_products.is_empty());

        let rule = DiscountRule::product_combo("r2", 0.10, vec!["Laptop".into()]);
        assert_eq!(rule.kind, DiscountKind::ProductCombo);
        assert_eq!(rule.threshold, 0.0);
    }

    #[test]
    fn test_warehouse_coordinates() {
        let rule = DeliveryRule {
            id: "d1".into(),
            base_fee: 5.0,
            cost_per_km: 1.0,
            warehouse_lat: 9.9285,
            warehouse_lng: -8.8921,
            description: Some("Jos warehouse".into()),
        };
        assert_eq!(rule.warehouse(), Coordinates::new(9.9285, -8.8921));
    }
}
