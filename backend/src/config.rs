//! Configuration management for the Climate Observation API
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CLIMATE_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Observation store configuration
    pub database: DatabaseConfig,

    /// Request handling options
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite://Resources/hawaii.sqlite`
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Open the store without write access
    pub read_only: bool,

    /// Seconds to wait for a pooled connection before giving up
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiConfig {
    /// Reject date path parameters that are not real `YYYY-MM-DD` dates
    pub strict_dates: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("CLIMATE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.url", "sqlite://Resources/hawaii.sqlite")?
            .set_default("database.max_connections", 5)?
            .set_default("database.min_connections", 1)?
            .set_default("database.read_only", true)?
            .set_default("database.acquire_timeout_secs", 30)?
            .set_default("api.strict_dates", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CLIMATE_ prefix)
            .add_source(
                Environment::with_prefix("CLIMATE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Configuration pointing at a specific store with all other defaults
    pub fn with_database_url(url: impl Into<String>) -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: url.into(),
                ..DatabaseConfig::default()
            },
            api: ApiConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://Resources/hawaii.sqlite".to_string(),
            max_connections: 5,
            min_connections: 1,
            read_only: true,
            acquire_timeout_secs: 30,
        }
    }
}
