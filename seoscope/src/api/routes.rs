//! HTTP API Route Definitions

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::handlers::{self, AppState};

/// Create the API router with all routes
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/api/seo-data", get(handlers::seo_data))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
