//! Health Routes

use axum::{Json, Router, routing::get};

use shared::client::HealthResponse;

use crate::core::ServerState;

/// Build health router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

/// Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
