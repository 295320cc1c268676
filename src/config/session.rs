use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

use super::env_or;

/// Minimum key length accepted by `actix_web::cookie::Key::from`
pub const MIN_SECRET_LEN: usize = 64;

/// Login session settings
#[derive(Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub redis_url: String,
    pub ttl_hours: i64,
    pub cookie_secure: bool,
}

impl SessionConfig {
    pub fn from_env() -> Result<Self> {
        Ok(SessionConfig {
            secret: env::var("SESSION_SECRET")
                .map_err(|_| AppError::Configuration("SESSION_SECRET not set".to_string()))?,
            redis_url: env::var("SESSION_REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
            ttl_hours: env_or("SESSION_TTL_HOURS", "8")?,
            cookie_secure: env_or("SESSION_COOKIE_SECURE", "false")?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.secret.len() < MIN_SECRET_LEN {
            return Err(AppError::Configuration(format!(
                "SESSION_SECRET must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        if self.ttl_hours <= 0 {
            return Err(AppError::Configuration(
                "SESSION_TTL_HOURS must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

// Keep the secret out of logs.
impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("redis_url", &self.redis_url)
            .field("ttl_hours", &self.ttl_hours)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}
