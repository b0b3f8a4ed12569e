//! # Order Calculation Endpoint
//!
//! `POST /api/order/calculate`
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  JSON body                                                              │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  validator derive (field ranges) ─── fail ──► 422 + details            │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  core validation (coordinate pairing, finiteness) ── fail ──► 422      │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  response cache ── hit ──► cached breakdown                            │
//! │    │ miss                                                               │
//! │    ▼                                                                    │
//! │  rule snapshot from SQLite ─── fail ──► 500 (logged, generic body)     │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  tally_core::engine::calculate ──► cache ──► 200 + PricingBreakdown    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Expected JSON payload
//! ```json
//! {
//!   "subtotal": 250.00,
//!   "weight": 10,
//!   "destination_latitude": 40.730610,
//!   "destination_longitude": -73.935242,
//!   "products": ["Laptop", "Headphones"]
//! }
//! ```

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::{debug, info};
use validator::Validate;

use tally_core::engine;
use tally_core::types::{OrderInput, PricingBreakdown};
use tally_core::validation::validate_order;

use crate::cache;
use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request DTO
// =============================================================================

/// The calculate-order request body.
///
/// Coordinates arrive as two separate optional fields; the pairing rule
/// lives in core validation, which also assembles the [`OrderInput`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CalculateOrderRequest {
    #[validate(range(min = 0.0, message = "must be non-negative"))]
    pub subtotal: f64,

    #[validate(range(min = 0.0, message = "must be non-negative"))]
    pub weight: f64,

    pub destination_latitude: Option<f64>,

    pub destination_longitude: Option<f64>,

    pub products: Option<Vec<String>>,
}

impl CalculateOrderRequest {
    /// Runs both validation layers and produces the engine input.
    fn into_order(self) -> Result<OrderInput, ApiError> {
        self.validate()?;

        let order = validate_order(
            self.subtotal,
            self.weight,
            self.destination_latitude,
            self.destination_longitude,
            self.products,
        )?;

        Ok(order)
    }
}

// =============================================================================
// Handler
// =============================================================================

/// Calculates the final payable amount for an order.
pub async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateOrderRequest>,
) -> Result<Json<PricingBreakdown>, ApiError> {
    let order = request.into_order()?;

    // Identical validated input within the TTL window short-circuits to
    // the cached breakdown. Correctness is unaffected: the engine is
    // deterministic over the same rule snapshot.
    let key = cache::cache_key(&order);
    if let Some(cached) = state.cache.get(&key) {
        debug!(key = %key, "Returning cached breakdown");
        return Ok(Json(cached));
    }

    let snapshot = state.db.snapshot().await?;
    let breakdown = engine::calculate(&order, &snapshot);
    state.cache.insert(key, breakdown.clone());

    // Audit log, mirroring the calculation inputs and outcome.
    info!(
        subtotal = order.subtotal,
        weight = order.weight,
        has_destination = order.destination.is_some(),
        products = order.products.as_ref().map(|p| p.len()).unwrap_or(0),
        final_amount = breakdown.final_amount,
        "Order calculation performed"
    );

    Ok(Json(breakdown))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::time::Duration;
    use tower::ServiceExt;

    use crate::cache::ResponseCache;
    use tally_core::types::{DeliveryRule, DiscountRule};
    use tally_db::{Database, DbConfig};

    async fn test_state() -> AppState {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // Reference rule set from the seeder.
        db.discount_rules()
            .insert(&DiscountRule::order_total("r1", 200.0, 0.05))
            .await
            .unwrap();
        db.discount_rules()
            .insert(&DiscountRule::product_combo(
                "r2",
                0.10,
                vec!["Laptop".into(), "Headphones".into()],
            ))
            .await
            .unwrap();
        db.delivery_rules()
            .insert(&DeliveryRule {
                id: "d1".into(),
                base_fee: 5.0,
                cost_per_km: 1.0,
                warehouse_lat: 9.9285,
                warehouse_lng: -8.8921,
                description: Some("Jos warehouse".into()),
            })
            .await
            .unwrap();

        AppState::new(db, ResponseCache::new(Duration::from_secs(60)))
    }

    async fn post_calculate(state: AppState, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let app = crate::routes::router().with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/order/calculate")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_full_calculation_via_http() {
        let state = test_state().await;

        let (status, body) = post_calculate(
            state,
            serde_json::json!({
                "subtotal": 250.00,
                "weight": 10,
                "destination_latitude": 9.9285,
                "destination_longitude": -8.8921,
                "products": ["Laptop", "Headphones"]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tax_rate"], 5.0);
        assert_eq!(body["discount_rate"], 15.0);
        assert_eq!(body["delivery_fee"], 7.5);
        assert_eq!(body["final_amount"], 232.5);
    }

    #[tokio::test]
    async fn test_half_coordinate_pair_is_rejected() {
        let state = test_state().await;

        let (status, body) = post_calculate(
            state,
            serde_json::json!({
                "subtotal": 100.0,
                "weight": 1,
                "destination_latitude": 9.9285
            }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Invalid input data");
    }

    #[tokio::test]
    async fn test_negative_subtotal_is_rejected() {
        let state = test_state().await;

        let (status, _) = post_calculate(
            state,
            serde_json::json!({ "subtotal": -1.0, "weight": 1 }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_repeat_request_is_served_from_cache() {
        let state = test_state().await;
        let body = serde_json::json!({ "subtotal": 250.0, "weight": 1 });

        let (status, first) = post_calculate(state.clone(), body.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(state.cache.len(), 1);

        let (status, second) = post_calculate(state, body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first, second);
    }
}
