//! Configuration management for the hanjan client.
//!
//! Configuration is read from `~/.config/hanjan/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::store::{FailurePolicy, StoreOptions};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub web: WebConfig,
    pub comments: CommentsConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Session JWT sent as a bearer token.
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api/".to_string(),
            timeout_secs: 10,
            token: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub base_url: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5173".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    pub page_size: u32,
    pub on_error: FailurePolicy,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            on_error: FailurePolicy::Preserve,
        }
    }
}

impl CommentsConfig {
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions::comments(self.page_size).with_failure_policy(self.on_error)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub page_size: u32,
    /// Most notifications kept in memory; older ones fall off the end.
    pub capacity: usize,
    pub on_error: FailurePolicy,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            capacity: 20,
            on_error: FailurePolicy::Reset,
        }
    }
}

impl NotificationsConfig {
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions::notifications(self.page_size, self.capacity)
            .with_failure_policy(self.on_error)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.comments.page_size == 0 || self.notifications.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be positive".into()));
        }
        if self.notifications.capacity == 0 {
            return Err(ConfigError::Invalid(
                "notifications.capacity must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Environment overrides applied after the file is read.
    pub fn with_env(mut self) -> Self {
        if let Ok(token) = std::env::var("HANJAN_TOKEN") {
            self.api.token = Some(token);
        }
        self
    }

    /// Get the default config file path: `~/.config/hanjan/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("hanjan").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> &'static str {
        r##"# hanjan client configuration
#
# Failure policies (on_error):
# - "reset":    a failed fetch empties the list and resets paging
# - "preserve": a failed fetch keeps what is already shown

[api]
base_url = "http://localhost:8080/api/"
timeout_secs = 10
# Session token; HANJAN_TOKEN overrides it.
# token = "eyJ..."

[web]
# Used when opening pages in the browser
base_url = "http://localhost:5173"

[comments]
page_size = 10
on_error = "preserve"

[notifications]
page_size = 20
# Locally received notifications beyond this are dropped from the end
capacity = 20
on_error = "reset"
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
