//! # Validation Module
//!
//! Boundary input validation for the pricing engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP request (pricing-api)                                   │
//! │  ├── Type validation (JSON deserialization)                            │
//! │  └── Declarative field checks (validator derive)                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (pure, reusable from any wrapper)                │
//! │  ├── Finiteness and sign checks                                        │
//! │  └── Coordinate pairing (both present or both absent)                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Engine runs - guaranteed well-formed input, never fails               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Coordinates, OrderInput};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a monetary or weight amount.
///
/// ## Rules
/// - Must be finite (not NaN, not infinite)
/// - Must be non-negative (zero is allowed)
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_amount;
///
/// assert!(validate_amount("subtotal", 250.0).is_ok());
/// assert!(validate_amount("subtotal", 0.0).is_ok());
/// assert!(validate_amount("subtotal", -1.0).is_err());
/// assert!(validate_amount("subtotal", f64::NAN).is_err());
/// ```
pub fn validate_amount(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a single coordinate component (finite degrees).
pub fn validate_coordinate(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates the destination pair: both components present or both absent.
///
/// Returns the assembled [`Coordinates`] when the pair is complete.
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_destination;
///
/// assert!(validate_destination(Some(9.9285), Some(-8.8921)).is_ok());
/// assert!(validate_destination(None, None).unwrap().is_none());
/// assert!(validate_destination(Some(9.9285), None).is_err());
/// ```
pub fn validate_destination(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> ValidationResult<Option<Coordinates>> {
    match (latitude, longitude) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => {
            validate_coordinate("destination_latitude", lat)?;
            validate_coordinate("destination_longitude", lng)?;
            Ok(Some(Coordinates::new(lat, lng)))
        }
        (Some(_), None) => Err(ValidationError::IncompleteCoordinates {
            present: "latitude",
            missing: "longitude",
        }),
        (None, Some(_)) => Err(ValidationError::IncompleteCoordinates {
            present: "longitude",
            missing: "latitude",
        }),
    }
}

// =============================================================================
// Order Assembly
// =============================================================================

/// Validates raw order fields and assembles the [`OrderInput`] the engine
/// consumes. This is the single gate through which wrapper layers hand
/// data to the core.
pub fn validate_order(
    subtotal: f64,
    weight: f64,
    destination_latitude: Option<f64>,
    destination_longitude: Option<f64>,
    products: Option<Vec<String>>,
) -> ValidationResult<OrderInput> {
    validate_amount("subtotal", subtotal)?;
    validate_amount("weight", weight)?;
    let destination = validate_destination(destination_latitude, destination_longitude)?;

    Ok(OrderInput {
        subtotal,
        weight,
        destination,
        products,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("subtotal", 0.0).is_ok());
        assert!(validate_amount("subtotal", 250.5).is_ok());

        assert_eq!(
            validate_amount("subtotal", -0.01),
            Err(ValidationError::MustBeNonNegative {
                field: "subtotal".into()
            })
        );
        assert!(validate_amount("weight", f64::NAN).is_err());
        assert!(validate_amount("weight", f64::INFINITY).is_err());
    }

    #[test]
    fn test_destination_pairing() {
        assert_eq!(validate_destination(None, None).unwrap(), None);

        let coords = validate_destination(Some(9.9285), Some(-8.8921)).unwrap();
        assert_eq!(coords, Some(Coordinates::new(9.9285, -8.8921)));

        assert!(validate_destination(Some(9.9285), None).is_err());
        assert!(validate_destination(None, Some(-8.8921)).is_err());
    }

    #[test]
    fn test_destination_must_be_finite() {
        assert!(validate_destination(Some(f64::NAN), Some(0.0)).is_err());
        assert!(validate_destination(Some(0.0), Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_validate_order_assembles_input() {
        let order = validate_order(
            250.0,
            10.0,
            Some(9.9285),
            Some(-8.8921),
            Some(vec!["Laptop".into()]),
        )
        .unwrap();

        assert_eq!(order.subtotal, 250.0);
        assert_eq!(order.destination, Some(Coordinates::new(9.9285, -8.8921)));
        assert_eq!(order.products.as_deref(), Some(&["Laptop".to_string()][..]));
    }

    #[test]
    fn test_validate_order_rejects_bad_fields() {
        assert!(validate_order(-1.0, 0.0, None, None, None).is_err());
        assert!(validate_order(10.0, -1.0, None, None, None).is_err());
        assert!(validate_order(10.0, 1.0, Some(1.0), None, None).is_err());
    }
}
