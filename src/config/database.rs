use crate::core::{AppError, Result};
use serde::Deserialize;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::Executor;
use std::env;
use std::time::Duration;

use super::env_or;

/// Upper bound for `GROUP_CONCAT` results in the periodic reports (1 MiB).
/// The server default of 1024 bytes truncates a busy month's service list.
pub const GROUP_CONCAT_MAX_LEN: u64 = 1 << 20;

/// Statement run on every new pooled connection
pub fn session_setup_sql() -> String {
    format!("SET SESSION group_concat_max_len = {}", GROUP_CONCAT_MAX_LEN)
}

/// Apply the per-connection session settings the report queries rely on
pub fn with_session_settings(options: MySqlPoolOptions) -> MySqlPoolOptions {
    options.after_connect(|conn, _meta| {
        Box::pin(async move {
            conn.execute(session_setup_sql().as_str()).await?;
            Ok(())
        })
    })
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL")
                .map_err(|_| AppError::Configuration("DATABASE_URL not set".to_string()))?,
            pool_size: env_or("DATABASE_POOL_SIZE", "5")?,
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", "10")?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }
        if self.pool_size > self.max_connections {
            return Err(AppError::Configuration(format!(
                "DATABASE_POOL_SIZE ({}) cannot exceed DATABASE_MAX_CONNECTIONS ({})",
                self.pool_size, self.max_connections
            )));
        }
        Ok(())
    }

    /// Create a MySQL connection pool
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        with_session_settings(MySqlPoolOptions::new())
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600)) // 10 minutes
            .max_lifetime(Duration::from_secs(1800)) // 30 minutes
            .test_before_acquire(true)
            .connect(&self.url)
            .await
            .map_err(AppError::Database)
    }
}
