//! Spotify Web API client
//!
//! Client-credentials token exchange and playlist detail lookup. Only the
//! fields needed to build a [`PlaylistSummary`] are deserialized.

use folio_common::config::Credentials;
use folio_common::PlaylistSummary;
use serde::Deserialize;
use thiserror::Error;

const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Playlist retrieval errors
///
/// Every variant ends in the same place: the fallback playlist list.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Credentials or playlist list missing; raised before any network call
    #[error("Spotify not configured: {0}")]
    Configuration(String),

    /// Token exchange failed or was rejected
    #[error("Failed to get Spotify access token: {0}")]
    UpstreamAuth(String),

    /// A playlist lookup failed or was rejected
    #[error("Failed to fetch playlist {id}: {reason}")]
    UpstreamFetch { id: String, reason: String },
}

/// Token endpoint response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Playlist object as returned by `GET /v1/playlists/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyPlaylist {
    pub id: String,
    pub name: String,
    /// Absent or null for playlists without a description
    #[serde(default)]
    pub description: Option<String>,
    /// Cover images, widest first; may be null
    #[serde(default)]
    pub images: Option<Vec<SpotifyImage>>,
    pub external_urls: ExternalUrls,
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyImage {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackPage {
    pub total: u32,
}

impl From<SpotifyPlaylist> for PlaylistSummary {
    fn from(playlist: SpotifyPlaylist) -> Self {
        let image_url = playlist
            .images
            .and_then(|images| images.into_iter().next())
            .map(|image| image.url)
            .unwrap_or_default();

        PlaylistSummary {
            id: playlist.id,
            name: playlist.name,
            description: playlist.description.unwrap_or_default(),
            image_url,
            spotify_url: playlist.external_urls.spotify,
            track_count: playlist.tracks.total,
        }
    }
}

/// Spotify API client
///
/// Holds no per-request state; one instance serves every request.
pub struct SpotifyClient {
    http_client: reqwest::Client,
    accounts_url: String,
    api_url: String,
}

impl SpotifyClient {
    /// Client against the given accounts and API base URLs
    ///
    /// No request timeout is set; calls rely on the connection defaults.
    pub fn new(accounts_url: &str, api_url: &str) -> reqwest::Result<Self> {
        let http_client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http_client,
            accounts_url: accounts_url.trim_end_matches('/').to_string(),
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Exchange client credentials for a bearer token
    ///
    /// Fails with [`PlaylistError::Configuration`] before touching the
    /// network if either credential is blank.
    pub async fn access_token(&self, credentials: &Credentials) -> Result<String, PlaylistError> {
        credentials
            .validate()
            .map_err(|e| PlaylistError::Configuration(e.to_string()))?;

        let url = format!("{}/api/token", self.accounts_url);
        tracing::debug!(url = %url, "Requesting Spotify access token");

        let response = self
            .http_client
            .post(&url)
            .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| PlaylistError::UpstreamAuth(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlaylistError::UpstreamAuth(format!("status {}", status.as_u16())));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| PlaylistError::UpstreamAuth(format!("invalid token response: {}", e)))?;

        Ok(token.access_token)
    }

    /// Fetch one playlist's details
    pub async fn playlist(&self, id: &str, access_token: &str) -> Result<SpotifyPlaylist, PlaylistError> {
        let url = format!("{}/v1/playlists/{}", self.api_url, id);
        tracing::debug!(playlist_id = %id, url = %url, "Fetching Spotify playlist");

        let fetch_error = |reason: String| PlaylistError::UpstreamFetch {
            id: id.to_string(),
            reason,
        };

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("status {}", status.as_u16())));
        }

        response
            .json()
            .await
            .map_err(|e| fetch_error(format!("invalid playlist response: {}", e)))
    }
}
