//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /reservation`         - Reserve a table
//! - `GET    /reservation/search`  - Search restaurant availability
//! - `DELETE /reservation/{id}`    - Cancel a reservation (participant only)
//! - `GET    /health`              - Health check
//! - anything else                 - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Bounded deadline per request
//! - **Rate limiting** - Per-IP token bucket on the reservation endpoints
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use axum::Router;
use axum::routing::{delete, get, post};
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

use crate::api::handlers::{
    create_reservation_handler, delete_reservation_handler, health_handler, search_handler,
};
use crate::api::middleware::{rate_limit, tracing};
use crate::error::AppError;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// `request_timeout` bounds every request; requests exceeding it receive
/// `408 Request Timeout`.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let reservation_routes = Router::new()
        .route("/reservation", post(create_reservation_handler))
        .route("/reservation/search", get(search_handler))
        .route("/reservation/{id}", delete(delete_reservation_handler))
        .layer(rate_limit::layer());

    let router = Router::new()
        .merge(reservation_routes)
        .route("/health", get(health_handler))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// JSON 404 for unknown routes.
async fn fallback_handler() -> AppError {
    AppError::not_found("Sorry, the requested resource couldn't be found", json!({}))
}
