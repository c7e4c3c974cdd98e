//! folio-web library - portfolio page and playlist proxy
//!
//! Serves the rendered portfolio page and the Spotify playlist endpoint.

use std::sync::Arc;

use axum::Router;
use folio_common::SiteContent;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod playlists;
pub mod render;
pub mod spotify;

pub use playlists::PlaylistService;

/// Route serving playlist summaries
pub const PLAYLISTS_PATH: &str = "/api/spotify/playlists";

/// Application state shared across HTTP handlers
///
/// Both members are built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    /// Page content tables
    pub content: Arc<SiteContent>,
    /// Live playlist source with fallback
    pub playlists: Arc<PlaylistService>,
}

impl AppState {
    /// Create new application state
    pub fn new(content: SiteContent, playlists: PlaylistService) -> Self {
        Self {
            content: Arc::new(content),
            playlists: Arc::new(playlists),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::serve_index))
        .route(PLAYLISTS_PATH, get(api::get_playlists))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
