//! # Discount Rule Evaluation
//!
//! Aggregates the discount rate for an order from a set of rule records.
//!
//! ## Evaluation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every rule is checked INDEPENDENTLY and matching rates are SUMMED      │
//! │                                                                         │
//! │  order_total    threshold=200  rate=0.05 ── subtotal 250 > 200? ── ✓   │
//! │  product_combo  ["Laptop",..]  rate=0.10 ── overlap with order? ── ✓   │
//! │                                                          ──────────    │
//! │                                                  discount rate: 0.15   │
//! │                                                                         │
//! │  Rules are not mutually exclusive and evaluation order is irrelevant.  │
//! │  The sum is NOT capped - it can exceed 1.0 by design.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{DiscountKind, DiscountRule, OrderInput};

/// Computes the total discount rate for an order as a decimal fraction.
///
/// - `OrderTotal` rules match when the subtotal is **strictly** greater
///   than the rule threshold.
/// - `ProductCombo` rules match when the order's product list shares at
///   least one entry with the rule's required products. One overlap is
///   enough; the order does not need the full combo.
/// - `Unknown` rule kinds are skipped.
/// - An order without a product list matches no combo rules.
///
/// ## Example
/// ```rust
/// use tally_core::discount::discount_rate;
/// use tally_core::types::{DiscountRule, OrderInput};
///
/// let order = OrderInput {
///     subtotal: 250.0,
///     weight: 1.0,
///     destination: None,
///     products: Some(vec!["Laptop".into(), "Headphones".into()]),
/// };
/// let rules = vec![
///     DiscountRule::order_total("r1", 200.0, 0.05),
///     DiscountRule::product_combo("r2", 0.10, vec!["Laptop".into()]),
/// ];
///
/// // 0.05 + 0.10: summed as plain f64 fractions
/// assert!((discount_rate(&order, &rules) - 0.15).abs() < 1e-12);
/// ```
pub fn discount_rate(order: &OrderInput, rules: &[DiscountRule]) -> f64 {
    rules
        .iter()
        .filter(|rule| rule_applies(order, rule))
        .map(|rule| rule.rate)
        .sum()
}

/// Checks whether a single rule matches the order.
fn rule_applies(order: &OrderInput, rule: &DiscountRule) -> bool {
    match rule.kind {
        DiscountKind::OrderTotal => order.subtotal > rule.threshold,
        DiscountKind::ProductCombo => match &order.products {
            Some(products) => rule
                .required_products
                .iter()
                .any(|required| products.contains(required)),
            None => false,
        },
        DiscountKind::Unknown => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn order(subtotal: f64, products: Option<Vec<&str>>) -> OrderInput {
        OrderInput {
            subtotal,
            weight: 1.0,
            destination: None,
            products: products.map(|p| p.into_iter().map(String::from).collect()),
        }
    }

    #[test]
    fn test_order_total_threshold_is_strict() {
        let rules = vec![DiscountRule::order_total("r1", 200.0, 0.05)];

        // Exactly at the threshold does not qualify.
        assert_eq!(discount_rate(&order(200.0, None), &rules), 0.0);
        assert_eq!(discount_rate(&order(200.01, None), &rules), 0.05);
    }

    #[test]
    fn test_product_combo_needs_one_overlap_only() {
        let rules = vec![DiscountRule::product_combo(
            "r1",
            0.10,
            vec!["Laptop".into(), "Headphones".into()],
        )];

        // One of the two required products present is enough.
        assert_eq!(
            discount_rate(&order(50.0, Some(vec!["Laptop", "Mouse"])), &rules),
            0.10
        );
        assert_eq!(
            discount_rate(&order(50.0, Some(vec!["Mouse"])), &rules),
            0.0
        );
    }

    #[test]
    fn test_no_product_list_means_no_combo_discount() {
        let rules = vec![DiscountRule::product_combo("r1", 0.10, vec!["Laptop".into()])];
        assert_eq!(discount_rate(&order(50.0, None), &rules), 0.0);
    }

    #[test]
    fn test_independent_rules_are_summed() {
        let rules = vec![
            DiscountRule::order_total("r1", 200.0, 0.05),
            DiscountRule::product_combo("r2", 0.10, vec!["Laptop".into(), "Headphones".into()]),
        ];
        let order = order(250.0, Some(vec!["Laptop", "Headphones"]));
        assert!((discount_rate(&order, &rules) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_kind_is_ignored() {
        let mut rule = DiscountRule::order_total("r1", 0.0, 0.50);
        rule.kind = DiscountKind::Unknown;

        assert_eq!(discount_rate(&order(1000.0, None), &[rule]), 0.0);
    }

    #[test]
    fn test_sum_is_not_capped() {
        let rules = vec![
            DiscountRule::order_total("r1", 10.0, 0.60),
            DiscountRule::order_total("r2", 20.0, 0.70),
        ];
        // 130% discount, preserved as-is.
        let total = discount_rate(&order(100.0, None), &rules);
        assert!((total - 1.30).abs() < 1e-12);
    }

    #[test]
    fn test_product_match_is_case_sensitive() {
        let rules = vec![DiscountRule::product_combo("r1", 0.10, vec!["Laptop".into()])];
        assert_eq!(
            discount_rate(&order(50.0, Some(vec!["laptop"])), &rules),
            0.0
        );
    }
}
