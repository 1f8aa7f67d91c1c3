//! Request handlers for the JSON API

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use seoscope_core::lookup::execute_lookup;
use seoscope_scanner::Fetcher;
use tracing::debug;

use super::types::{ErrorResponse, HealthResponse, SeoDataParams, ServiceDescriptor};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Fetcher,
}

impl AppState {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }
}

pub async fn home() -> impl IntoResponse {
    Json(ServiceDescriptor::default())
}

/// Health check endpoint. Does not touch the upstream.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}

pub async fn seo_data(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = SeoDataParams::from_pairs(pairs);
    let Some(url) = params.url() else {
        debug!("Rejecting seo-data request without url");
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::missing_url())).into_response();
    };

    match execute_lookup(&state.fetcher, url).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(e.to_string())),
        )
            .into_response(),
    }
}
