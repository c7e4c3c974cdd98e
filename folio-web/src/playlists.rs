//! Playlist retrieval pipeline
//!
//! token → concurrent playlist lookups → summaries, with any failure
//! collapsing to the fixed fallback list.

use folio_common::config::{Credentials, SpotifyConfig};
use folio_common::{fallback_playlists, PlaylistSummary};
use futures::future::try_join_all;
use tracing::{debug, error, warn};

use crate::spotify::{PlaylistError, SpotifyClient};

/// Live playlist source for the configured playlist ids
pub struct PlaylistService {
    client: SpotifyClient,
    credentials: Credentials,
    playlist_ids: Vec<String>,
}

impl PlaylistService {
    pub fn new(client: SpotifyClient, credentials: Credentials, playlist_ids: Vec<String>) -> Self {
        Self {
            client,
            credentials,
            playlist_ids,
        }
    }

    pub fn from_config(spotify: &SpotifyConfig, credentials: Credentials) -> reqwest::Result<Self> {
        let client = SpotifyClient::new(&spotify.accounts_url, &spotify.api_url)?;
        Ok(Self::new(client, credentials, spotify.playlist_ids.clone()))
    }

    pub fn playlist_ids(&self) -> &[String] {
        &self.playlist_ids
    }

    /// Credentials and at least one playlist id are present
    ///
    /// When false, every request is answered from the fallback list without
    /// touching the network.
    pub fn is_configured(&self) -> bool {
        self.credentials.is_configured() && !self.playlist_ids.is_empty()
    }

    /// Fetch every configured playlist, or fail as a whole
    ///
    /// Lookups run concurrently and are awaited together; the first failure
    /// aborts the aggregation. Output order follows `playlist_ids`.
    pub async fn fetch(&self) -> Result<Vec<PlaylistSummary>, PlaylistError> {
        if self.playlist_ids.is_empty() {
            return Err(PlaylistError::Configuration(
                "no playlist ids configured".to_string(),
            ));
        }

        let access_token = self.client.access_token(&self.credentials).await?;

        let lookups = self
            .playlist_ids
            .iter()
            .map(|id| self.client.playlist(id, &access_token));
        let playlists = try_join_all(lookups).await?;

        Ok(playlists.into_iter().map(PlaylistSummary::from).collect())
    }

    /// Live summaries, or the fallback list if anything went wrong
    pub async fn summaries_or_fallback(&self) -> Vec<PlaylistSummary> {
        match self.fetch().await {
            Ok(playlists) => {
                debug!(count = playlists.len(), "Serving live Spotify playlists");
                playlists
            }
            Err(e @ PlaylistError::Configuration(_)) => {
                warn!("{}; serving fallback playlists", e);
                fallback_playlists()
            }
            Err(e) => {
                error!("Error fetching Spotify playlists: {}; serving fallback playlists", e);
                fallback_playlists()
            }
        }
    }
}
