//! # HTTP Routes
//!
//! Route table for the pricing API.

pub mod health;
pub mod order;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Builds the full application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/order/calculate", post(order::calculate))
        .route("/health", get(health::health))
}
