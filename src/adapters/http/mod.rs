//! HTTP adapters - REST API implementations.

pub mod cohort;
mod layers;

pub use cohort::{cohort_router, CohortApiError, CohortAppState};
pub use layers::with_http_layers;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health - Liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// The full API: `/health` plus every endpoint under `/api`, traced per request.
pub fn api_router(state: CohortAppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", cohort_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
