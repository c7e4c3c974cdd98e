//! In-process stand-in for the Spotify accounts and Web API services
//!
//! Binds to 127.0.0.1:0, serves `POST /api/token` and
//! `GET /v1/playlists/:id`, and records what it was sent.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use folio_common::config::Credentials;
use folio_web::spotify::SpotifyClient;
use folio_web::PlaylistService;
use serde_json::{json, Value};

pub const FAKE_CLIENT_ID: &str = "client-id";
pub const FAKE_CLIENT_SECRET: &str = "client-secret";
pub const FAKE_TOKEN: &str = "fake-access-token";

/// Canned behaviour for one playlist id
#[derive(Debug, Clone)]
pub struct FakePlaylist {
    pub status: StatusCode,
    pub body: Value,
    pub delay: Duration,
}

impl FakePlaylist {
    /// Well-formed playlist object with one cover image
    pub fn named(id: &str, name: &str, tracks: u32) -> Self {
        Self {
            status: StatusCode::OK,
            body: json!({
                "id": id,
                "name": name,
                "description": format!("{} description", name),
                "images": [
                    { "url": format!("https://i.scdn.co/image/{}-640", id), "height": 640, "width": 640 },
                    { "url": format!("https://i.scdn.co/image/{}-300", id), "height": 300, "width": 300 }
                ],
                "external_urls": { "spotify": format!("https://open.spotify.com/playlist/{}", id) },
                "tracks": { "href": "ignored", "total": tracks },
                "public": true
            }),
            delay: Duration::ZERO,
        }
    }

    /// Upstream rejects this lookup
    pub fn failing(status: StatusCode) -> Self {
        Self {
            status,
            body: json!({ "error": { "status": status.as_u16(), "message": "nope" } }),
            delay: Duration::ZERO,
        }
    }

    pub fn with_body(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Default)]
struct Recorded {
    token_authorization: Option<String>,
    token_content_type: Option<String>,
    token_body: Option<String>,
    playlist_authorizations: Vec<String>,
}

struct FakeState {
    token_status: StatusCode,
    token_response: Value,
    playlists: HashMap<String, FakePlaylist>,
    token_requests: AtomicUsize,
    playlist_requests: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    recorded: Mutex<Recorded>,
}

/// Running fake upstream
pub struct FakeSpotify {
    addr: SocketAddr,
    state: Arc<FakeState>,
}

impl FakeSpotify {
    /// Start a fake that issues tokens and serves the given playlists
    pub async fn start(playlists: Vec<(&str, FakePlaylist)>) -> Self {
        Self::start_with_token_status(StatusCode::OK, playlists).await
    }

    /// Start a fake whose token endpoint answers with `token_status`
    pub async fn start_with_token_status(
        token_status: StatusCode,
        playlists: Vec<(&str, FakePlaylist)>,
    ) -> Self {
        Self::launch(token_status, valid_token_response(), playlists).await
    }

    /// Start a fake whose token endpoint answers 200 with `token_response`
    pub async fn start_with_token_body(
        token_response: Value,
        playlists: Vec<(&str, FakePlaylist)>,
    ) -> Self {
        Self::launch(StatusCode::OK, token_response, playlists).await
    }

    async fn launch(
        token_status: StatusCode,
        token_response: Value,
        playlists: Vec<(&str, FakePlaylist)>,
    ) -> Self {
        let state = Arc::new(FakeState {
            token_status,
            token_response,
            playlists: playlists
                .into_iter()
                .map(|(id, playlist)| (id.to_string(), playlist))
                .collect(),
            token_requests: AtomicUsize::new(0),
            playlist_requests: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            recorded: Mutex::new(Recorded::default()),
        });

        let app = Router::new()
            .route("/api/token", post(issue_token))
            .route("/v1/playlists/:id", get(playlist_details))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Playlist service pointed at this fake with the given credentials
    pub fn service(&self, credentials: Credentials, ids: &[&str]) -> PlaylistService {
        let client = SpotifyClient::new(&self.url(), &self.url()).unwrap();
        PlaylistService::new(client, credentials, ids.iter().map(|id| id.to_string()).collect())
    }

    /// Playlist service using the fake's expected credentials
    pub fn authorized_service(&self, ids: &[&str]) -> PlaylistService {
        self.service(Credentials::new(FAKE_CLIENT_ID, FAKE_CLIENT_SECRET), ids)
    }

    pub fn token_requests(&self) -> usize {
        self.state.token_requests.load(Ordering::SeqCst)
    }

    pub fn playlist_requests(&self) -> usize {
        self.state.playlist_requests.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.state.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn token_authorization(&self) -> Option<String> {
        self.state.recorded.lock().unwrap().token_authorization.clone()
    }

    pub fn token_content_type(&self) -> Option<String> {
        self.state.recorded.lock().unwrap().token_content_type.clone()
    }

    pub fn token_body(&self) -> Option<String> {
        self.state.recorded.lock().unwrap().token_body.clone()
    }

    pub fn playlist_authorizations(&self) -> Vec<String> {
        self.state.recorded.lock().unwrap().playlist_authorizations.clone()
    }
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn issue_token(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    state.token_requests.fetch_add(1, Ordering::SeqCst);
    {
        let mut recorded = state.recorded.lock().unwrap();
        recorded.token_authorization = header_value(&headers, header::AUTHORIZATION);
        recorded.token_content_type = header_value(&headers, header::CONTENT_TYPE);
        recorded.token_body = Some(body);
    }

    if !state.token_status.is_success() {
        return (
            state.token_status,
            Json(json!({ "error": "invalid_client" })),
        )
            .into_response();
    }

    Json(state.token_response.clone()).into_response()
}

fn valid_token_response() -> Value {
    json!({
        "access_token": FAKE_TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600
    })
}

async fn playlist_details(
    State(state): State<Arc<FakeState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.playlist_requests.fetch_add(1, Ordering::SeqCst);
    let now = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    state.max_in_flight.fetch_max(now, Ordering::SeqCst);

    let authorization = header_value(&headers, header::AUTHORIZATION).unwrap_or_default();
    state
        .recorded
        .lock()
        .unwrap()
        .playlist_authorizations
        .push(authorization.clone());

    let response = match state.playlists.get(&id) {
        _ if authorization != format!("Bearer {}", FAKE_TOKEN) => {
            StatusCode::UNAUTHORIZED.into_response()
        }
        Some(playlist) => {
            tokio::time::sleep(playlist.delay).await;
            (playlist.status, Json(playlist.body.clone())).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    };

    state.in_flight.fetch_sub(1, Ordering::SeqCst);
    response
}

/// An address nothing is listening on
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
