//! Configuration System
//!
//! Loads the host configuration from a TOML file and applies environment
//! variable overrides. Every field has a default, so an empty file (or no
//! file at all) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base path the dashboard is built for
pub const DEFAULT_BASE_PATH: &str = "/visual-almalaurea-laureati-informatica-2024/";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Static hosting configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Public URL prefix, always with leading and trailing `/`
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Directory holding the built frontend (`index.html`, wasm, js)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5174
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("dashboard-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_path: default_base_path(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        config.validate()?;

        Ok(config)
    }

    /// Defaults plus environment variable overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load from the default locations, falling back to defaults.
    ///
    /// Files that exist but fail to load are skipped and reported in the
    /// result.
    pub fn load_default() -> Result<ResolvedConfig, ConfigError> {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("graduates-dashboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// First of `paths` that exists and loads, else defaults
    pub fn load_first(paths: &[PathBuf]) -> Result<ResolvedConfig, ConfigError> {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return Ok(ResolvedConfig {
                        config,
                        source: Some(path.clone()),
                        skipped,
                    })
                }
                Err(e) => skipped.push((path.clone(), e)),
            }
        }

        Ok(ResolvedConfig {
            config: Self::from_env()?,
            source: None,
            skipped,
        })
    }

    /// Explicit path if given, default lookup otherwise
    pub fn resolve(path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        match path {
            Some(path) => Ok(ResolvedConfig {
                config: Self::load_with_env(path)?,
                source: Some(path.to_path_buf()),
                skipped: Vec::new(),
            }),
            None => Self::load_default(),
        }
    }

    /// Apply `DASHBOARD_*` environment variable overrides
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("DASHBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("DASHBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(base_path) = lookup("DASHBOARD_BASE_PATH") {
            self.server.base_path = base_path;
        }
        if let Some(dist_dir) = lookup("DASHBOARD_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dist_dir);
        }

        // Logging overrides
        if let Some(level) = lookup("DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("DASHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    fn validate(&mut self) -> Result<(), ConfigError> {
        self.server.base_path = normalize_base_path(&self.server.base_path)?;
        Ok(())
    }
}

/// Result of the config file lookup
///
/// Loading happens before logging is set up, so the lookup is recorded
/// here and reported with [`ResolvedConfig::log`] afterwards.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub config: Config,
    /// File the config came from, `None` for defaults
    pub source: Option<PathBuf>,
    /// Files that exist but failed to load
    pub skipped: Vec<(PathBuf, ConfigError)>,
}

impl ResolvedConfig {
    pub fn log(&self) {
        for (path, e) in &self.skipped {
            tracing::warn!("Failed to load config from {:?}: {}", path, e);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// `/foo` → `/foo/`; a path without leading `/` is rejected
pub fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidBasePath(raw.to_string()));
    }
    if trimmed.ends_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{}/", trimmed))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Base path must start with '/': {0:?}")]
    InvalidBasePath(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# Graduates Dashboard Configuration
#
# Environment variables override these settings:
# - DASHBOARD_HOST
# - DASHBOARD_PORT
# - DASHBOARD_BASE_PATH
# - DASHBOARD_DIST_DIR
# - DASHBOARD_LOG_LEVEL
# - DASHBOARD_LOG_FORMAT

[server]
# Interface to bind
host = "{host}"

# Port to listen on
port = {port}

# URL prefix the frontend was built for
base_path = "{base_path}"

# Built frontend (output of `trunk build` in dashboard-ui/)
dist_dir = "{dist_dir}"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        host = default_host(),
        port = default_port(),
        base_path = DEFAULT_BASE_PATH,
        dist_dir = default_dist_dir().display(),
    )
}
