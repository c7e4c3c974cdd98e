//! HTTP API handlers for folio-web

pub mod buildinfo;
pub mod health;
pub mod playlists;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use playlists::get_playlists;
pub use ui::serve_index;
