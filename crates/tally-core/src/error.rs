//! # Error Types
//!
//! Typed validation errors for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  └── ValidationError  - Boundary input failures                        │
//! │                                                                         │
//! │  tally-db errors (separate crate)                                      │
//! │  └── DbError          - Rule store failures                            │
//! │                                                                         │
//! │  pricing-api errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see (422 vs 500)             │
//! │                                                                         │
//! │  Flow: ValidationError ──► ApiError(422)                               │
//! │        DbError         ──► ApiError(500)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine itself never fails: once an [`crate::types::OrderInput`]
//! passes validation, every calculation succeeds. That is why this crate
//! has no "CoreError" - the only failure mode the core owns is rejecting
//! malformed input at the boundary.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Boundary input validation errors.
///
/// These occur when caller input does not meet the contract the engine
/// relies on. Used for early validation before the calculation runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Numeric field must be zero or greater.
    #[error("{field} must be non-negative")]
    MustBeNonNegative { field: String },

    /// Numeric field is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Destination coordinates must come as a pair.
    #[error("destination {present} was given without {missing}")]
    IncompleteCoordinates {
        present: &'static str,
        missing: &'static str,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "subtotal".to_string(),
        };
        assert_eq!(err.to_string(), "subtotal must be non-negative");

        let err = ValidationError::IncompleteCoordinates {
            present: "latitude",
            missing: "longitude",
        };
        assert_eq!(
            err.to_string(),
            "destination latitude was given without longitude"
        );
    }
}
