//! # Pricing Engine
//!
//! Orchestrates tax, discounts and delivery into a final breakdown.
//!
//! ## Calculation Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. tax_rate      = tax::tax_rate(subtotal)                             │
//! │  2. discount_rate = discount::discount_rate(order, rules)               │
//! │  3. quote         = delivery::delivery_quote(dest, weight, rule)        │
//! │  4. tax_amount      = subtotal × tax_rate                               │
//! │     discount_amount = subtotal × discount_rate                          │
//! │  5. final = subtotal + tax_amount + quote.fee - discount_amount         │
//! │  6. round everything to 2 dp, rates ×100 for percentage display         │
//! │                                                                         │
//! │  The discount applies to the SUBTOTAL only. It never shrinks the tax    │
//! │  amount or the delivery fee.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine performs no validation and no I/O: the boundary validator
//! guarantees well-formed input, the caller supplies the rule snapshot,
//! and the same input always produces the identical breakdown.

use crate::round2;
use crate::types::{OrderInput, PricingBreakdown, RuleSnapshot};
use crate::{delivery, discount, tax};

/// Computes the full pricing breakdown for an order.
///
/// Pure and deterministic; returns unconditionally. The only defensive
/// behavior in the whole pipeline is the zero delivery quote when no
/// delivery rule (or destination) exists.
///
/// Note the discount sum is uncapped: a rule set granting more than 100%
/// yields a negative final amount, faithfully.
///
/// ## Example
/// ```rust
/// use tally_core::engine::calculate;
/// use tally_core::types::{OrderInput, RuleSnapshot};
///
/// let order = OrderInput {
///     subtotal: 250.0,
///     weight: 2.0,
///     destination: None,
///     products: None,
/// };
/// let breakdown = calculate(&order, &RuleSnapshot::default());
///
/// assert_eq!(breakdown.tax_rate, 5.0);
/// assert_eq!(breakdown.tax_amount, 12.5);
/// assert_eq!(breakdown.final_amount, 262.5);
/// ```
pub fn calculate(order: &OrderInput, rules: &RuleSnapshot) -> PricingBreakdown {
    let tax_rate = tax::tax_rate(order.subtotal);
    let discount_rate = discount::discount_rate(order, &rules.discounts);
    let quote = delivery::delivery_quote(order.destination, order.weight, rules.delivery.as_ref());

    let tax_amount = order.subtotal * tax_rate;
    let discount_amount = order.subtotal * discount_rate;
    let final_amount = order.subtotal + tax_amount + quote.fee - discount_amount;

    PricingBreakdown {
        subtotal: order.subtotal,
        tax_rate: round2(tax_rate * 100.0),
        tax_amount: round2(tax_amount),
        discount_rate: round2(discount_rate * 100.0),
        discount_amount: round2(discount_amount),
        delivery_fee: round2(quote.fee),
        delivery_distance: round2(quote.distance_km),
        final_amount: round2(final_amount),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
