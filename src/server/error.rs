//! Server Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while starting or running the static host
#[derive(Error, Debug)]
pub enum ServerError {
    /// The built frontend is not where the config says
    #[error("Dashboard assets not found in {0:?}, build dashboard-ui first")]
    MissingAssets(PathBuf),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;
