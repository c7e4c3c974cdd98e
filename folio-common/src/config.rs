//! Bootstrap configuration loading
//!
//! Resolution priority:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Configuration is read once at startup and never reloaded.

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default bind address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5780;

/// Spotify accounts service (token endpoint lives at `/api/token`)
pub const SPOTIFY_ACCOUNTS_URL: &str = "https://accounts.spotify.com";

/// Spotify Web API (playlists live at `/v1/playlists/{id}`)
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com";

/// Playlists shown on the page when none are configured
pub const DEFAULT_PLAYLIST_IDS: [&str; 3] = [
    "37i9dQZF1DXcBWIGoYBM5M",
    "37i9dQZF1DX0XUsuxWHRQd",
    "37i9dQZF1DX4dyzvuaRJ0n",
];

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";

/// Environment variable holding the Spotify client identifier
pub const CLIENT_ID_ENV: &str = "SPOTIFY_CLIENT_ID";

/// Environment variable holding the Spotify client secret
pub const CLIENT_SECRET_ENV: &str = "SPOTIFY_CLIENT_SECRET";

/// Bootstrap configuration loaded from TOML file
///
/// Every field has a compiled default, so an empty file (or no file at all)
/// is a valid configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Address to bind the HTTP server to
    pub host: String,

    /// HTTP server port
    pub port: u16,

    /// Optional TOML file replacing the built-in page content
    pub content_path: Option<PathBuf>,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Spotify integration settings
    pub spotify: SpotifyConfig,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            content_path: None,
            logging: LoggingConfig::default(),
            spotify: SpotifyConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Spotify integration settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpotifyConfig {
    /// Base URL of the accounts (token) service
    pub accounts_url: String,

    /// Base URL of the Web API
    pub api_url: String,

    /// Playlists to fetch, in display order
    pub playlist_ids: Vec<String>,

    /// Client identifier (overridden by `SPOTIFY_CLIENT_ID`)
    pub client_id: Option<String>,

    /// Client secret (overridden by `SPOTIFY_CLIENT_SECRET`)
    pub client_secret: Option<String>,
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            accounts_url: SPOTIFY_ACCOUNTS_URL.to_string(),
            api_url: SPOTIFY_API_URL.to_string(),
            playlist_ids: DEFAULT_PLAYLIST_IDS.iter().map(|s| s.to_string()).collect(),
            client_id: None,
            client_secret: None,
        }
    }
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration, degrading to defaults when no usable file exists
    ///
    /// A missing or malformed config file never prevents startup. Nothing is
    /// logged here: the returned [`ConfigSource`] is reported by the caller
    /// once its subscriber is installed.
    pub fn load(cli_arg: Option<&Path>) -> (Self, ConfigSource) {
        let Some(path) = resolve_config_path(cli_arg) else {
            return (Self::default(), ConfigSource::Defaults);
        };

        match Self::from_file(&path) {
            Ok(config) => (config, ConfigSource::File(path)),
            Err(e) => (
                Self::default(),
                ConfigSource::Rejected {
                    path,
                    reason: e.to_string(),
                },
            ),
        }
    }
}

/// Where the active [`TomlConfig`] came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No config file was found
    Defaults,

    /// Parsed from this file
    File(PathBuf),

    /// The file could not be read or parsed; defaults are in effect
    Rejected { path: PathBuf, reason: String },
}

impl ConfigSource {
    /// Report the outcome of [`TomlConfig::load`]
    pub fn log(&self) {
        match self {
            ConfigSource::Defaults => info!("No config file found, using compiled defaults"),
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Rejected { path, reason } => {
                warn!("Ignoring config file {}: {}; using compiled defaults", path.display(), reason)
            }
        }
    }
}

/// Locate the TOML config file
///
/// Command-line path first, then `FOLIO_CONFIG`, then
/// `<config_dir>/folio/config.toml` if it exists. This is the only place
/// `FOLIO_CONFIG` is read; the binary's `--config` flag has no env fallback.
pub fn resolve_config_path(cli_arg: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    default_config_path().filter(|path| path.exists())
}

/// Platform config location (`~/.config/folio/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
}

/// Client-credentials pair for the Spotify accounts service
///
/// Either half may be empty; [`Credentials::is_configured`] decides whether
/// a token exchange is worth attempting.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Both halves present and non-blank
    pub fn is_configured(&self) -> bool {
        is_valid_key(&self.client_id) && is_valid_key(&self.client_secret)
    }

    /// Error describing which half is missing, if any
    pub fn validate(&self) -> Result<()> {
        match (is_valid_key(&self.client_id), is_valid_key(&self.client_secret)) {
            (true, true) => Ok(()),
            (false, true) => Err(Error::Config(format!("{} is not set", CLIENT_ID_ENV))),
            (true, false) => Err(Error::Config(format!("{} is not set", CLIENT_SECRET_ENV))),
            (false, false) => Err(Error::Config(format!(
                "{} and {} are not set",
                CLIENT_ID_ENV, CLIENT_SECRET_ENV
            ))),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Resolve Spotify credentials
///
/// **Priority:** ENV → TOML → empty
///
/// Each half is resolved independently. Missing credentials are not an
/// error here: the playlist endpoint serves its fallback list instead.
pub fn resolve_credentials(spotify: &SpotifyConfig) -> Credentials {
    let client_id = resolve_secret(CLIENT_ID_ENV, spotify.client_id.as_deref());
    let client_secret = resolve_secret(CLIENT_SECRET_ENV, spotify.client_secret.as_deref());
    let credentials = Credentials::new(client_id, client_secret);

    if credentials.is_configured() {
        info!("Spotify credentials loaded");
    } else if let Err(e) = credentials.validate() {
        warn!("Spotify credentials incomplete ({}); playlists will use fallback data", e);
    }

    credentials
}

fn resolve_secret(env_name: &str, toml_value: Option<&str>) -> String {
    if let Ok(value) = std::env::var(env_name) {
        if is_valid_key(&value) {
            return value;
        }
    }

    toml_value
        .filter(|value| is_valid_key(value))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Validate a credential (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}
