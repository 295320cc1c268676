use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::cars::models::{Car, NewCar};

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn create(&self, car: NewCar) -> Result<Car>;

    async fn list(&self) -> Result<Vec<Car>>;
}

pub struct MySqlCarRepository {
    pool: MySqlPool,
}

impl MySqlCarRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for MySqlCarRepository {
    async fn create(&self, car: NewCar) -> Result<Car> {
        let result = sqlx::query(
            "INSERT INTO cars (make, model, year, owner_name) VALUES (?, ?, ?, ?)",
        )
        .bind(&car.make)
        .bind(&car.model)
        .bind(car.year)
        .bind(&car.owner_name)
        .execute(&self.pool)
        .await?;

        Ok(car.into_car(result.last_insert_id()))
    }

    async fn list(&self) -> Result<Vec<Car>> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT id, make, model, year, owner_name FROM cars ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }
}
