//! Playlist endpoint
//!
//! Always answers 200 with a JSON array of playlist summaries. Upstream or
//! configuration failures are logged and replaced by the fallback list.

use axum::{extract::State, Json};
use folio_common::PlaylistSummary;

use crate::AppState;

/// GET /api/spotify/playlists
pub async fn get_playlists(State(state): State<AppState>) -> Json<Vec<PlaylistSummary>> {
    Json(state.playlists.summaries_or_fallback().await)
}
