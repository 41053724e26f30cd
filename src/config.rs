//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::ClientConfig;
use crate::controller::{ControllerOptions, ReconcileStrategy};
use crate::message::DEFAULT_MESSAGE_TIMEOUT_MS;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Activities API connection
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

/// How the view behaves
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_message_timeout")]
    pub message_timeout_ms: u64,

    #[serde(default)]
    pub reconcile: ReconcileStrategy,
}

fn default_message_timeout() -> u64 {
    DEFAULT_MESSAGE_TIMEOUT_MS
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            message_timeout_ms: default_message_timeout(),
            reconcile: ReconcileStrategy::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

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

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("activities").join("config.toml")),
            Some(PathBuf::from("/etc/activities/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Settings for the HTTP client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            request_timeout_ms: self.api.request_timeout_ms,
        }
    }

    /// Settings for the view-sync controller
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            strategy: self.view.reconcile,
            message_timeout: Duration::from_millis(self.view.message_timeout_ms),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("ACTIVITIES_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(ms) = std::env::var("ACTIVITIES_REQUEST_TIMEOUT_MS") {
            if let Ok(ms) = ms.parse() {
                self.api.request_timeout_ms = ms;
            }
        }

        if let Ok(ms) = std::env::var("ACTIVITIES_MESSAGE_TIMEOUT_MS") {
            if let Ok(ms) = ms.parse() {
                self.view.message_timeout_ms = ms;
            }
        }
        if let Ok(strategy) = std::env::var("ACTIVITIES_RECONCILE") {
            match strategy.parse() {
                Ok(s) => self.view.reconcile = s,
                Err(e) => tracing::warn!("Ignoring ACTIVITIES_RECONCILE: {}", e),
            }
        }

        if let Ok(level) = std::env::var("ACTIVITIES_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ACTIVITIES_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Activities Client Configuration
#
# Environment variables override these settings:
# - ACTIVITIES_API_URL
# - ACTIVITIES_REQUEST_TIMEOUT_MS
# - ACTIVITIES_MESSAGE_TIMEOUT_MS
# - ACTIVITIES_RECONCILE
# - ACTIVITIES_LOG_LEVEL
# - ACTIVITIES_LOG_FORMAT

[api]
# Server root; requests go to {base_url}/activities
base_url = "http://localhost:8000"

# Transport timeout in milliseconds
request_timeout_ms = 10000

[view]
# How long status messages stay visible (ms)
message_timeout_ms = 4000

# After a signup: "refresh" re-fetches every activity,
# "patch" appends the participant locally
reconcile = "refresh"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.view.message_timeout_ms, 4000);
        assert_eq!(config.view.reconcile, ReconcileStrategy::Refresh);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.request_timeout_ms, 10_000);
        assert_eq!(config.view.reconcile, ReconcileStrategy::Refresh);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[view]\nreconcile = \"patch\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.view.reconcile, ReconcileStrategy::Patch);
        assert_eq!(config.view.message_timeout_ms, 4000);
        assert_eq!(config.api.base_url, "http://localhost:8000");

        let options = config.controller_options();
        assert_eq!(options.strategy, ReconcileStrategy::Patch);
        assert_eq!(options.message_timeout, Duration::from_millis(4000));
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[view]\nreconcile = \"merge\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let missing = Config::load(Path::new("/nonexistent/activities.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }

    #[test]
    fn test_client_config() {
        let mut config = Config::default();
        config.api.base_url = "http://school.test".to_string();
        config.api.request_timeout_ms = 250;

        let client = config.client_config();
        assert_eq!(client.base_url, "http://school.test");
        assert_eq!(client.request_timeout_ms, 250);
    }
}
