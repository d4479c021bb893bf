//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (built frontend is present)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::server::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// healthy or degraded
    pub status: String,
    /// ok or missing
    pub assets: String,
    pub base_path: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// 200 once `index.html` is in the dist directory, 503 before.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if assets_present(&state) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let assets_ok = assets_present(&state);

    Json(HealthResponse {
        status: if assets_ok { "healthy" } else { "degraded" }.to_string(),
        assets: if assets_ok { "ok" } else { "missing" }.to_string(),
        base_path: state.config.base_path.clone(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn assets_present(state: &AppState) -> bool {
    state.index_file().is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
