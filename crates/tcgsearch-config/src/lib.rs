//! Configuration management for tcgsearch
//!
//! This module handles loading, validation, and management of
//! tcgsearch configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::Path;

pub use error::{ConfigError, ConfigResult};

/// Environment variable that overrides `upstream.api_key`
pub const API_KEY_ENV: &str = "JUSTTCG_API_KEY";

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Upstream pricing API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// API root, without the `/v1` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key sent as `x-api-key`. Never serialized.
    #[serde(default, skip_serializing)]
    pub api_key: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Games list cache lifetime in seconds
    #[serde(default = "default_games_ttl_secs")]
    pub games_ttl_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            games_ttl_secs: default_games_ttl_secs(),
        }
    }
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("timeout_secs", &self.timeout_secs)
            .field("games_ttl_secs", &self.games_ttl_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.justtcg.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_games_ttl_secs() -> u64 {
    86_400
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream API settings
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file, apply environment overrides and validate
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let mut config = Self::read(path.as_ref())?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load the file if present, otherwise start from defaults.
    ///
    /// Environment overrides and validation still apply, so a missing file
    /// works as long as `JUSTTCG_API_KEY` is set.
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let mut config = match Self::read(path) {
            Ok(config) => config,
            Err(ConfigError::FileNotFound { .. }) => Config::default(),
            Err(e) => return Err(e),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML document without touching the environment
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::InvalidYaml {
            message: e.to_string(),
        })
    }

    fn read(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::IoError)?;
        Self::from_yaml(&content)
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.upstream.api_key = key.trim().to_string();
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.upstream.api_key.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "upstream.api_key".to_string(),
            });
        }

        let base_url = self.upstream.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "upstream.base_url".to_string(),
                reason: "Base URL must start with http:// or https://".to_string(),
            });
        }

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "upstream.timeout_secs".to_string(),
                reason: "Timeout must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ==================== Tests ====================
