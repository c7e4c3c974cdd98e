//! Public playlist representation served by `/api/spotify/playlists`

use serde::{Deserialize, Serialize};

/// Reduced view of an upstream playlist
///
/// Identical in shape whether built from live data or taken from
/// [`fallback_playlists`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    /// Empty when the upstream playlist has no description
    pub description: String,
    /// First cover image, empty when the playlist has none
    pub image_url: String,
    pub spotify_url: String,
    pub track_count: u32,
}

/// Canned playlists served whenever live retrieval fails
pub fn fallback_playlists() -> Vec<PlaylistSummary> {
    vec![
        PlaylistSummary {
            id: "mock-1".to_string(),
            name: "Coding Focus".to_string(),
            description: "Deep focus music for programming sessions".to_string(),
            image_url: "https://via.placeholder.com/300x300/ff6b35/ffffff?text=Coding+Focus"
                .to_string(),
            spotify_url: "https://open.spotify.com/embed/playlist/1nKtByrMkHKxK3e38n33SH"
                .to_string(),
            track_count: 50,
        },
        PlaylistSummary {
            id: "mock-2".to_string(),
            name: "Data Engineering Vibes".to_string(),
            description: "Chill beats for data pipeline debugging".to_string(),
            image_url: "https://via.placeholder.com/300x300/ff6b35/ffffff?text=DE+Vibes"
                .to_string(),
            spotify_url: "https://open.spotify.com/playlist/example".to_string(),
            track_count: 42,
        },
        PlaylistSummary {
            id: "mock-3".to_string(),
            name: "Late Night Debugging".to_string(),
            description: "Lo-fi hip hop for those 2am bug fixes".to_string(),
            image_url: "https://via.placeholder.com/300x300/ff6b35/ffffff?text=Late+Night"
                .to_string(),
            spotify_url: "https://open.spotify.com/playlist/example".to_string(),
            track_count: 38,
        },
    ]
}
