//! # Tax Brackets
//!
//! Maps an order subtotal to its tax rate.
//!
//! ## Bracket Table
//! ```text
//! ┌───────────────────┬──────┐
//! │ subtotal range    │ rate │
//! ├───────────────────┼──────┤
//! │ [0, 100)          │ 0%   │
//! │ [100, 500)        │ 5%   │
//! │ [500, 1000)       │ 8%   │
//! │ [1000, ∞)         │ 12%  │
//! └───────────────────┴──────┘
//! ```
//!
//! Brackets are half-open and lower-inclusive: exactly 100.00 already
//! pays 5%, exactly 500.00 already pays 8%.

/// Returns the tax rate for a subtotal as a decimal fraction (0.05 = 5%).
///
/// Deterministic, no side effects, no error conditions for non-negative
/// input. The rate is monotonically non-decreasing in the subtotal.
///
/// ## Example
/// ```rust
/// use tally_core::tax::tax_rate;
///
/// assert_eq!(tax_rate(99.99), 0.0);
/// assert_eq!(tax_rate(250.0), 0.05);
/// assert_eq!(tax_rate(1000.0), 0.12);
/// ```
pub fn tax_rate(subtotal: f64) -> f64 {
    if subtotal >= 1000.0 {
        0.12
    } else if subtotal >= 500.0 {
        0.08
    } else if subtotal >= 100.0 {
        0.05
    } else {
        0.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Bracket boundaries are lower-inclusive.
    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(tax_rate(0.0), 0.0);
        assert_eq!(tax_rate(99.99), 0.0);
        assert_eq!(tax_rate(100.0), 0.05);
        assert_eq!(tax_rate(499.99), 0.05);
        assert_eq!(tax_rate(500.0), 0.08);
        assert_eq!(tax_rate(999.99), 0.08);
        assert_eq!(tax_rate(1000.0), 0.12);
        assert_eq!(tax_rate(1_000_000.0), 0.12);
    }

    /// Rate never decreases as the subtotal grows.
    #[test]
    fn test_monotonic_non_decreasing() {
        let mut last = 0.0;
        let mut subtotal = 0.0;
        while subtotal <= 1500.0 {
            let rate = tax_rate(subtotal);
            assert!(rate >= last, "rate dropped at subtotal {subtotal}");
            last = rate;
            subtotal += 0.5;
        }
    }
}
