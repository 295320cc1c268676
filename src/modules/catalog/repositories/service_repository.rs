use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::catalog::models::{NewService, Service};

/// Persistence for the service catalogue
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: NewService) -> Result<Service>;

    async fn list(&self) -> Result<Vec<Service>>;
}

pub struct MySqlServiceRepository {
    pool: MySqlPool,
}

impl MySqlServiceRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for MySqlServiceRepository {
    async fn create(&self, service: NewService) -> Result<Service> {
        let result = sqlx::query("INSERT INTO services (name, price) VALUES (?, ?)")
            .bind(&service.name)
            .bind(service.price)
            .execute(&self.pool)
            .await?;

        Ok(service.into_service(result.last_insert_id()))
    }

    async fn list(&self) -> Result<Vec<Service>> {
        let services =
            sqlx::query_as::<_, Service>("SELECT id, name, price FROM services ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(services)
    }
}
