//! Error types for the Pricing API.
//!
//! Two failure kinds matter at this boundary:
//! - malformed client input → 422 with field details
//! - anything internal (rule store down, corrupt rule row) → 500 with a
//!   generic message; the details go to the log, never to the client

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use tally_core::error::ValidationError;
use tally_db::DbError;

/// Pricing API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Declarative field validation failed (validator derive).
    #[error("Invalid input data")]
    FieldValidation(#[from] validator::ValidationErrors),

    /// Core boundary validation failed (e.g. half a coordinate pair).
    #[error("Invalid input data: {0}")]
    Validation(#[from] ValidationError),

    /// Rule store failure.
    #[error("Rule store error: {0}")]
    Db(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::FieldValidation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "Invalid input data",
                    "details": errors,
                })),
            )
                .into_response(),

            ApiError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "Invalid input data",
                    "details": err.to_string(),
                })),
            )
                .into_response(),

            ApiError::Db(err) => {
                error!(error = %err, "Rule store failure during calculation");
                internal_response()
            }
        }
    }
}

/// The one internal-error body clients ever see.
fn internal_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "An error occurred while calculating the order amount",
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_422() {
        let err = ApiError::Validation(ValidationError::MustBeNonNegative {
            field: "subtotal".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_db_error_maps_to_500() {
        let err = ApiError::Db(DbError::PoolExhausted);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
