//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub seed: SeedConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Notification queue configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    /// Message lifetime before auto-expiry, in milliseconds
    #[serde(default = "default_notification_ttl")]
    pub ttl_ms: u64,
}

fn default_notification_ttl() -> u64 {
    4000
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            ttl_ms: default_notification_ttl(),
        }
    }
}

/// Seed data configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Populate the roster, activity feed, and profile with demo data
    #[serde(default = "default_demo_data")]
    pub demo_data: bool,
}

fn default_demo_data() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_data: default_demo_data(),
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
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
            dirs::config_dir().map(|p| p.join("cohort").join("config.toml")),
            Some(PathBuf::from("/etc/cohort/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // API overrides
        if let Ok(host) = std::env::var("COHORT_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("COHORT_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Notification overrides
        if let Ok(ttl) = std::env::var("COHORT_NOTIFICATION_TTL_MS") {
            if let Ok(t) = ttl.parse() {
                self.notifications.ttl_ms = t;
            }
        }

        // Seed overrides
        if let Ok(demo) = std::env::var("COHORT_SEED_DEMO_DATA") {
            self.seed.demo_data = demo.to_lowercase() != "false" && demo != "0";
        }

        // Logging overrides
        if let Ok(level) = std::env::var("COHORT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("COHORT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            notifications: NotificationsConfig::default(),
            seed: SeedConfig::default(),
            logging: LoggingConfig::default(),
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
    r#"# Cohort Configuration
#
# Environment variables override these settings:
# - COHORT_API_HOST
# - COHORT_API_PORT
# - COHORT_NOTIFICATION_TTL_MS
# - COHORT_SEED_DEMO_DATA
# - COHORT_LOG_LEVEL
# - COHORT_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Allowed CORS origins
cors_origins = ["http://localhost:5173", "http://127.0.0.1:5173"]

[notifications]
# Message lifetime before auto-expiry (ms)
ttl_ms = 4000

[seed]
# Populate the roster and activity feed with demo data on startup
demo_data = true

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

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.port, 8090);
        assert_eq!(config.notifications.ttl_ms, 4000);
        assert!(config.seed.demo_data);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [notifications]
            ttl_ms = 1500

            [seed]
            demo_data = false
            "#,
        )
        .unwrap();

        assert_eq!(config.notifications.ttl_ms, 1500);
        assert!(!config.seed.demo_data);
        // Untouched sections keep their defaults
        assert_eq!(config.api.host, "0.0.0.0");
    }

    #[test]
    fn test_generated_default_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.port, 8090);
        assert_eq!(config.notifications.ttl_ms, 4000);
    }

    #[test]
    fn test_addr_format() {
        let api = ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            cors_origins: vec![],
        };
        assert_eq!(api.addr(), "127.0.0.1:9000");
    }
}
