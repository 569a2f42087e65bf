//! API Routes
//!
//! Configures the Axum router with the sum service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{calculate_handler, health_handler, AppState};
use crate::render::CALCULATE_PATH;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/calculate?len=n` - Sum 1..=n, memoized in the store
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin, method and header
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(CALCULATE_PATH, get(calculate_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
