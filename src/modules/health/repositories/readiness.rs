use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;

/// Dependency check behind `GET /ready`
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    async fn ping(&self) -> Result<()>;
}

pub struct MySqlReadinessProbe {
    pool: MySqlPool,
}

impl MySqlReadinessProbe {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadinessProbe for MySqlReadinessProbe {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
