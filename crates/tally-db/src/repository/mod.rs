//! # Repository Module
//!
//! Rule repositories for the pricing engine.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Each repository owns the SQL for one rule table and converts rows     │
//! │  into tally-core domain types at the boundary:                         │
//! │                                                                         │
//! │  discount_rules table ──► DiscountRuleRepository ──► Vec<DiscountRule> │
//! │  delivery_rules table ──► DeliveryRuleRepository ──► Option<Delivery..>│
//! │                                                                         │
//! │  Database::snapshot() bundles both into one immutable RuleSnapshot.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod delivery;
pub mod discount;

use uuid::Uuid;

/// Generates a fresh rule ID for either rule table.
pub fn generate_rule_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique_uuids() {
        let id = generate_rule_id();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_ne!(id, generate_rule_id());
    }
}
