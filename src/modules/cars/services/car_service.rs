use std::sync::Arc;

use crate::core::Result;
use crate::modules::cars::models::{Car, CreateCarRequest};
use crate::modules::cars::repositories::CarRepository;

/// Car intake and listing
pub struct CarService {
    car_repo: Arc<dyn CarRepository>,
}

impl CarService {
    pub fn new(car_repo: Arc<dyn CarRepository>) -> Self {
        Self { car_repo }
    }

    pub async fn create_car(&self, request: CreateCarRequest) -> Result<Car> {
        let new_car = request.validate()?;
        let car = self.car_repo.create(new_car).await?;

        tracing::info!(car_id = car.id, make = %car.make, model = %car.model, "Car registered");
        Ok(car)
    }

    pub async fn list_cars(&self) -> Result<Vec<Car>> {
        self.car_repo.list().await
    }
}
