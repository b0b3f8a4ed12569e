//! Pricing API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so the binary runs out of the box in development.

use serde::{Deserialize, Serialize};
use std::env;

/// Pricing API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP server port
    pub http_port: u16,

    /// Path to the SQLite rule database
    pub database_path: String,

    /// How long a calculated breakdown stays cached, in seconds
    pub cache_ttl_secs: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,

            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./tally_dev.db".to_string()),

            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CACHE_TTL_SECS".to_string()))?,
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_env() {
        // The process environment may carry these from the caller's shell.
        env::remove_var("HTTP_PORT");
        env::remove_var("DATABASE_PATH");
        env::remove_var("CACHE_TTL_SECS");

        let config = ApiConfig::load().unwrap();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.database_path, "./tally_dev.db");
        assert_eq!(config.cache_ttl_secs, 60);
    }
}
