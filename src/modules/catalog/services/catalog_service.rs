use std::sync::Arc;

use crate::core::Result;
use crate::modules::catalog::models::{CreateServiceRequest, Service};
use crate::modules::catalog::repositories::ServiceRepository;

/// Business logic over the service catalogue
pub struct CatalogService {
    service_repo: Arc<dyn ServiceRepository>,
}

impl CatalogService {
    pub fn new(service_repo: Arc<dyn ServiceRepository>) -> Self {
        Self { service_repo }
    }

    pub async fn create_service(&self, request: CreateServiceRequest) -> Result<Service> {
        let new_service = request.validate()?;
        let service = self.service_repo.create(new_service).await?;

        tracing::info!(
            service_id = service.id,
            name = %service.name,
            price = %service.price,
            "Service added to catalogue"
        );
        Ok(service)
    }

    pub async fn list_services(&self) -> Result<Vec<Service>> {
        self.service_repo.list().await
    }
}
