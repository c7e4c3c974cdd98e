//! Liveness endpoint for process supervisors and uptime monitors

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// `status` is always "ok" while the server answers. `spotify` tells an
/// operator whether the playlist section can show live data or is pinned to
/// the fallback list by missing configuration.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub spotify: String,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let spotify = if state.playlists.is_configured() {
        "configured"
    } else {
        "unconfigured"
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        module: "folio-web".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        spotify: spotify.to_string(),
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
