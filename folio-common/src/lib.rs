//! # folio common library
//!
//! Shared code for the folio crates:
//! - Bootstrap configuration and credential resolution
//! - Page content tables
//! - Playlist summary type and its fallback table
//! - Common error type

pub mod config;
pub mod content;
pub mod error;
pub mod playlist;

pub use content::SiteContent;
pub use error::{Error, Result};
pub use playlist::{fallback_playlists, PlaylistSummary};
