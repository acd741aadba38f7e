//! Configuration management for the Pharma Stock Management Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with PSM__ prefix (e.g. PSM__INVENTORY__NEAR_EXPIRY_DAYS)

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{StockClassifier, DEFAULT_NEAR_EXPIRY_DAYS};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Stock classification configuration
    pub inventory: InventoryConfig,
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
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    /// Days before expiry at which a batch is flagged as near expiry
    pub near_expiry_days: u32,
}

impl InventoryConfig {
    pub fn classifier(&self) -> StockClassifier {
        StockClassifier::new(self.near_expiry_days)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("PSM__ENVIRONMENT").unwrap_or_else(|_| "development".into());
        Self::build(&environment, env_source())
    }

    fn build(environment: &str, env: Environment) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment)?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("inventory.near_expiry_days", i64::from(DEFAULT_NEAR_EXPIRY_DAYS))?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (PSM__SECTION__KEY)
            .add_source(env)
            .build()?;

        config.try_deserialize()
    }
}

/// Environment overrides such as `PSM__INVENTORY__NEAR_EXPIRY_DAYS=60`
fn env_source() -> Environment {
    Environment::with_prefix("PSM")
        .separator("__")
        .try_parsing(true)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            near_expiry_days: DEFAULT_NEAR_EXPIRY_DAYS,
        }
    }
}
