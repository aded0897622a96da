use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::config::PublicConfig;
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `GET /api/config` — the client-visible runtime configuration.
///
/// Only [`PublicConfig`] is serialized here; the private tier never leaves
/// the server.
async fn public_config(State(state): State<AppState>) -> Json<PublicConfig> {
    Json(state.config.public.clone())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/config", get(public_config))
}
