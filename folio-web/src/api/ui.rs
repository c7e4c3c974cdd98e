//! Page serving route

use axum::{extract::State, response::Html};

use crate::render::render_page;
use crate::AppState;

/// GET /
///
/// Renders the portfolio page from the shared content tables
pub async fn serve_index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.content))
}
