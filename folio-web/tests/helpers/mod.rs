//! Test Helper Utilities
//!
//! Shared utilities for testing folio-web

pub mod fake_spotify;

// Re-export commonly used items
pub use fake_spotify::{
    closed_url, FakePlaylist, FakeSpotify, FAKE_CLIENT_ID, FAKE_CLIENT_SECRET, FAKE_TOKEN,
};
