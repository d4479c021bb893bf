//! Application State
//!
//! Shared state accessible by all handlers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

/// Shared application state for all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Entry point of the built frontend
    pub fn index_file(&self) -> PathBuf {
        self.config.dist_dir.join("index.html")
    }
}
