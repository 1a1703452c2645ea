//! Configuration for the pollental server
//!
//! Loads an optional `pollental.toml` next to the binary and `POLLENTAL_*`
//! environment overrides. The deployment coordinates are fixed constants
//! and deliberately not configurable.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::api;
use crate::error::PollentalError;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollentalConfig {
    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Air quality API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the dashboard listens on
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the air quality API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    api::DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for PollentalConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl PollentalConfig {
    /// Load configuration from `pollental.toml` (if present) and
    /// `POLLENTAL_*` environment variables, e.g. `POLLENTAL_SERVER__PORT`.
    pub fn load() -> Result<Self, PollentalError> {
        let settings = Config::builder()
            .add_source(File::with_name("pollental").required(false))
            .add_source(Environment::with_prefix("POLLENTAL").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PollentalConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.api.base_url, api::DEFAULT_BASE_URL);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: PollentalConfig = toml_str("[server]\nport = 8080\n");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.api.base_url, api::DEFAULT_BASE_URL);
    }

    fn toml_str(raw: &str) -> PollentalConfig {
        Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}
