//! folio-web - personal portfolio site
//!
//! Serves the portfolio page and proxies Spotify playlist details.
//!
//! Configuration priority: command line → environment → TOML file →
//! compiled defaults. Spotify credentials come from `SPOTIFY_CLIENT_ID` /
//! `SPOTIFY_CLIENT_SECRET` (or the `[spotify]` TOML table); without them the
//! playlist endpoint serves its fallback list.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use folio_common::config::{resolve_credentials, TomlConfig};
use folio_common::SiteContent;
use folio_web::{build_router, AppState, PlaylistService};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for folio-web
#[derive(Parser, Debug)]
#[command(name = "folio-web")]
#[command(about = "Personal portfolio site with a Spotify playlist proxy")]
#[command(version)]
struct Args {
    /// TOML config file (falls back to FOLIO_CONFIG, then the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind to (overrides config file)
    #[arg(long, env = "FOLIO_HOST")]
    host: Option<String>,

    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "FOLIO_PORT")]
    port: Option<u16>,

    /// TOML file replacing the built-in page content (overrides config file)
    #[arg(long, env = "FOLIO_CONTENT")]
    content: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (config, config_source) = TomlConfig::load(args.config.as_deref());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config_source.log();

    info!(
        "Starting folio-web v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let content_path = args.content.or_else(|| config.content_path.clone());
    let content = SiteContent::load(content_path.as_deref());

    let credentials = resolve_credentials(&config.spotify);
    let playlists = PlaylistService::from_config(&config.spotify, credentials)
        .context("Failed to build Spotify HTTP client")?;
    info!(
        playlists = playlists.playlist_ids().len(),
        "Spotify playlists: {}",
        playlists.playlist_ids().join(", ")
    );

    let state = AppState::new(content, playlists);
    let app = build_router(state);

    let host = args.host.unwrap_or(config.host);
    let port = args.port.unwrap_or(config.port);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("folio-web listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
