use axum::{
    middleware as axum_mw,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::middleware::timing;
use crate::AppState;

/// Builds the full Axum `Router` with all routes and middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // ── Instance identity ───────────────────────────────────
        .route("/api/instance", get(handlers::instance::instance_info))
        // ── Load simulation ─────────────────────────────────────
        .route("/api/test", get(handlers::ping::test_endpoint))
        .route("/api/heavy", post(handlers::heavy::heavy_operation))
        // ── Metrics ─────────────────────────────────────────────
        .route(
            "/api/metrics/custom",
            get(handlers::metrics::custom_metrics),
        )
        // ── Balancer health check ───────────────────────────────
        .route("/health", get(handlers::health::health))
        // ── Provide shared state to all routes above ────────────
        .with_state(state)
        // ── Global middleware (applied bottom-up) ───────────────
        .layer(axum_mw::from_fn(timing::timing_middleware))
        .layer(CorsLayer::permissive())
}
