//! Profile Routes

pub mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Build profile router
/// - /api/users/profile: protected (requires authentication)
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/users/profile", get(handler::profile))
}
