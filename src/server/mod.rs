//! Static Host
//!
//! Serves the built dashboard (the `dashboard-ui` Trunk output) under the
//! base path it was built for, built with Axum.
//!
//! # Endpoints
//!
//! - `GET <base_path>...` - Files from `dist_dir`, `index.html` for directories
//! - `GET /` - Redirect to the base path (when the base path is not `/`)
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,no_run
//! use graduates_dashboard::config::ServerConfig;
//! use graduates_dashboard::server::serve;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     serve(&ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let assets = ServeDir::new(&state.config.dist_dir).append_index_html_on_directories(true);
    let base_path = state.config.base_path.trim_end_matches('/').to_string();

    let router = Router::new().nest("/health", health_routes);
    let router = if base_path.is_empty() {
        router.fallback_service(assets)
    } else {
        router
            .route("/", get(routes::root::redirect_to_base))
            .nest_service(&base_path, assets)
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the static host
pub async fn serve(config: &ServerConfig) -> ServerResult<()> {
    if !config.dist_dir.is_dir() {
        return Err(ServerError::MissingAssets(config.dist_dir.clone()));
    }

    let router = build_router(AppState::new(config.clone()));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        "Dashboard listening on http://{}{}",
        addr,
        config.base_path
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard host shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
