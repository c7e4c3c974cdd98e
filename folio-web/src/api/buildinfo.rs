//! Which build of the portfolio is deployed

use axum::response::Json;
use serde::Serialize;

/// Identifies the running binary so a deployed page can be traced back to
/// its commit. Values are baked in by `build.rs`; `git_hash` is "unknown"
/// when built outside a git checkout.
#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub version: String,
    pub git_hash: String,
    pub build_timestamp: String,
    pub build_profile: String,
}

/// GET /api/buildinfo
pub async fn get_build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: env!("GIT_HASH").to_string(),
        build_timestamp: env!("BUILD_TIMESTAMP").to_string(),
        build_profile: env!("BUILD_PROFILE").to_string(),
    })
}
