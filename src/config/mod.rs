//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `CYBERZONE` prefix
//! with `__` separating nested values.
//!
//! # Example
//!
//! ```no_run
//! use cyberzone::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod auth;
mod error;
mod seed;
mod server;

pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};
pub use seed::SeedConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Authentication configuration (session signing key and TTL)
    #[serde(default)]
    pub auth: AuthConfig,

    /// Seed data configuration
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads `.env` if present (development), then reads
    /// `CYBERZONE`-prefixed variables, e.g.
    /// `CYBERZONE__SERVER__PORT=8080` -> `server.port = 8080`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CYBERZONE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Validate all configuration sections.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_for_development() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8080);
    }
}
