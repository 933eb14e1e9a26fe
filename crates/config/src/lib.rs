//! Configuration loading, validation, and management for ShelfChat.
//!
//! Loads configuration from `~/.shelfchat/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.shelfchat/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the product catalog comes from
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// The remote assistant endpoint
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Durable key-value storage for the selection
    #[serde(default)]
    pub storage: StorageConfig,

    /// Conversation session settings
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// URL (`http://`, `https://`) or filesystem path of the `{products: [...]}` document
    #[serde(default = "default_catalog_source")]
    pub source: String,
}

fn default_catalog_source() -> String {
    "products.json".into()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_catalog_source(),
        }
    }
}

impl CatalogConfig {
    /// Whether the source should be fetched over HTTP rather than read from disk.
    pub fn is_remote(&self) -> bool {
        is_http_url(&self.source)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// The single POST endpoint serving both chat and routine requests
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8787/".into()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// "file", "memory" or "none"
    #[serde(default = "default_storage_backend")]
    pub backend: String,

    /// File backing the key-value slots (file backend only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_storage_backend() -> String {
    "file".into()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            path: None,
        }
    }
}

impl StorageConfig {
    /// The configured storage file, or `~/.shelfchat/storage.json`.
    pub fn resolved_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| AppConfig::config_dir().join("storage.json"))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Keep at most this many history entries (unbounded when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_history: Option<usize>,
}

const STORAGE_BACKENDS: &[&str] = &["file", "memory", "none"];

impl AppConfig {
    /// Load configuration from the default path (~/.shelfchat/config.toml).
    ///
    /// Environment variables override file values:
    /// - `SHELFCHAT_ENDPOINT`
    /// - `SHELFCHAT_CATALOG`
    /// - `SHELFCHAT_STORAGE`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(&Self::default_path(), |key| std::env::var(key).ok())
    }

    /// Load from `path` and apply overrides from `env`.
    pub fn load_with_env(
        path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;
        config.apply_env_overrides(env);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    ///
    /// Not validated; [`AppConfig::load_with_env`] validates after overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(config)
    }

    /// Apply environment overrides through an injectable lookup.
    pub fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = env("SHELFCHAT_ENDPOINT") {
            self.assistant.endpoint = endpoint;
        }
        if let Some(source) = env("SHELFCHAT_CATALOG") {
            self.catalog.source = source;
        }
        if let Some(path) = env("SHELFCHAT_STORAGE") {
            self.storage.path = Some(PathBuf::from(path));
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".shelfchat")
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if !is_http_url(&self.assistant.endpoint) {
            return Err(ConfigError::ValidationError(format!(
                "assistant.endpoint must be an http(s) URL, got '{}'",
                self.assistant.endpoint
            )));
        }

        if self.catalog.source.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "catalog.source must not be empty".into(),
            ));
        }

        if !STORAGE_BACKENDS.contains(&self.storage.backend.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "storage.backend must be one of {STORAGE_BACKENDS:?}, got '{}'",
                self.storage.backend
            )));
        }

        if let Some(max) = self.session.max_history {
            if max < 2 {
                return Err(ConfigError::ValidationError(
                    "session.max_history must be at least 2".into(),
                ));
            }
        }

        Ok(())
    }

    /// Generate a default config TOML string (for the `init` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

fn is_http_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
