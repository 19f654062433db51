//! Authentication configuration

use chrono::Duration;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Development-only signing key. Production must override it.
const DEV_SESSION_KEY: &str = "cyberzone-dev-session-key-change-me";

/// Authentication configuration (session signing and lifetime)
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// HMAC key for signing session tokens
    #[serde(default = "default_session_key")]
    pub session_key: SecretString,

    /// Session time to live in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl_secs: u64,
}

impl AuthConfig {
    /// Session TTL as a signed duration.
    pub fn session_ttl(&self) -> Duration {
        Duration::seconds(self.session_ttl_secs as i64)
    }

    /// Validate authentication configuration.
    ///
    /// Production refuses the compiled-in development key and short keys.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.session_ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        if *environment == Environment::Production {
            let key = self.session_key.expose_secret();
            if key == DEV_SESSION_KEY || key.len() < 32 {
                return Err(ValidationError::WeakSessionKey);
            }
        }
        Ok(())
    }
}

impl Clone for AuthConfig {
    fn clone(&self) -> Self {
        Self {
            session_key: SecretString::new(self.session_key.expose_secret().clone()),
            session_ttl_secs: self.session_ttl_secs,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_key: default_session_key(),
            session_ttl_secs: default_session_ttl(),
        }
    }
}

fn default_session_key() -> SecretString {
    SecretString::new(DEV_SESSION_KEY.to_string())
}

fn default_session_ttl() -> u64 {
    // 8 hours
    8 * 60 * 60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_key_is_fine_in_development() {
        let config = AuthConfig::default();
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn dev_key_is_rejected_in_production() {
        let config = AuthConfig::default();
        assert!(matches!(
            config.validate(&Environment::Production),
            Err(ValidationError::WeakSessionKey)
        ));
    }

    #[test]
    fn long_custom_key_passes_in_production() {
        let config = AuthConfig {
            session_key: SecretString::new("0123456789abcdef0123456789abcdef".to_string()),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Production).is_ok());
    }
}
