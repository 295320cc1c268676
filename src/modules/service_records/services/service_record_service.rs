use std::sync::Arc;

use tracing::info;

use crate::core::Result;
use crate::modules::service_records::models::{
    ServiceRecordDetails, ServiceRecordRequest, ServiceRecordResponse,
};
use crate::modules::service_records::repositories::ServiceRecordRepository;

/// Service-record lifecycle. Requests are validated before any statement runs;
/// atomicity of the record and its links is owned by the repository.
pub struct ServiceRecordService {
    record_repo: Arc<dyn ServiceRecordRepository>,
}

impl ServiceRecordService {
    pub fn new(record_repo: Arc<dyn ServiceRecordRepository>) -> Self {
        Self { record_repo }
    }

    pub async fn create_record(&self, request: ServiceRecordRequest) -> Result<ServiceRecordResponse> {
        let input = request.validate()?;
        let id = self.record_repo.create(&input).await?;

        info!(
            service_record_id = id,
            car_id = input.car_id,
            services = input.service_ids.len(),
            "Service record created"
        );
        Ok(ServiceRecordResponse::new(id, input))
    }

    /// Full replacement: the submitted service set becomes the record's only set
    pub async fn update_record(
        &self,
        id: u64,
        request: ServiceRecordRequest,
    ) -> Result<ServiceRecordResponse> {
        let input = request.validate()?;
        self.record_repo.update(id, &input).await?;

        info!(
            service_record_id = id,
            car_id = input.car_id,
            services = input.service_ids.len(),
            "Service record replaced"
        );
        Ok(ServiceRecordResponse::new(id, input))
    }

    pub async fn delete_record(&self, id: u64) -> Result<()> {
        self.record_repo.delete(id).await?;
        info!(service_record_id = id, "Service record deleted");
        Ok(())
    }

    pub async fn list_records(&self) -> Result<Vec<ServiceRecordDetails>> {
        self.record_repo.list().await
    }
}
