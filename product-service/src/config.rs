//! Configuration management using Figment.
//!
//! Configuration is loaded from multiple sources with the following
//! precedence (highest to lowest):
//! 1. Environment variables (prefix: PRODUCT_)
//! 2. Current working directory: ./config.toml
//! 3. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::Result;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration.
    pub service: ServiceConfig,

    /// Database configuration.
    pub database: DatabaseConfig,

    /// Middleware configuration.
    #[serde(default)]
    pub middleware: MiddlewareConfig,
}

/// Service-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name.
    pub name: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Environment (dev, staging, production).
    #[serde(default = "default_environment")]
    pub environment: String,
}

/// Database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,

    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum idle connections.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds.
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout_secs: u64,

    /// Maximum retry attempts for establishing the database connection.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay between retry attempts in seconds.
    #[serde(default = "default_retry_delay")]
    pub retry_delay_secs: u64,
}

/// Middleware configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Request body size limit in MB.
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// CORS mode: "permissive" or "very_permissive".
    #[serde(default = "default_cors_mode")]
    pub cors_mode: String,

    /// Enable compression.
    #[serde(default = "default_true")]
    pub compression: bool,

    /// Enable panic recovery middleware.
    #[serde(default = "default_true")]
    pub catch_panic: bool,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_mb: default_body_limit_mb(),
            cors_mode: default_cors_mode(),
            compression: true,
            catch_panic: true,
        }
    }
}

// Default value functions
fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    5
}

fn default_retry_delay() -> u64 {
    2
}

fn default_body_limit_mb() -> usize {
    2
}

fn default_cors_mode() -> String {
    "permissive".to_string()
}

fn default_true() -> bool {
    true
}

impl DatabaseConfig {
    /// Pool acquire timeout as a Duration.
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Reads `./config.toml` when present; `PRODUCT_`-prefixed environment
    /// variables override it (e.g. `PRODUCT_DATABASE_URL`,
    /// `PRODUCT_SERVICE_PORT`).
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load configuration from a specific file.
    ///
    /// Useful for testing or non-standard deployments.
    pub fn load_from(path: &str) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("PRODUCT_").split("_"))
            .extract()?;

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "product-service".to_string(),
                port: default_port(),
                log_level: default_log_level(),
                timeout_secs: default_timeout(),
                environment: default_environment(),
            },
            database: DatabaseConfig {
                url: "postgres://localhost:5432/products".to_string(),
                max_connections: default_max_connections(),
                min_connections: default_min_connections(),
                connection_timeout_secs: default_connection_timeout(),
                max_retries: default_max_retries(),
                retry_delay_secs: default_retry_delay(),
            },
            middleware: MiddlewareConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.port, 3000);
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.middleware.cors_mode, "permissive");
    }
}
