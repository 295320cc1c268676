use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::middleware::AuthenticatedUser;
use crate::modules::service_records::models::ServiceRecordRequest;
use crate::modules::service_records::services::ServiceRecordService;
use crate::modules::MessageResponse;

/// POST /servicerecord
pub async fn create_record(
    _user: AuthenticatedUser,
    service: web::Data<Arc<ServiceRecordService>>,
    request: web::Json<ServiceRecordRequest>,
) -> Result<HttpResponse, AppError> {
    let record = service.create_record(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(record))
}

/// PUT /servicerecord/{id}
pub async fn update_record(
    _user: AuthenticatedUser,
    service: web::Data<Arc<ServiceRecordService>>,
    path: web::Path<u64>,
    request: web::Json<ServiceRecordRequest>,
) -> Result<HttpResponse, AppError> {
    let record = service
        .update_record(path.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(record))
}

/// DELETE /servicerecord/{id}
pub async fn delete_record(
    _user: AuthenticatedUser,
    service: web::Data<Arc<ServiceRecordService>>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    service.delete_record(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Service record deleted")))
}

/// GET /servicerecord
pub async fn list_records(
    _user: AuthenticatedUser,
    service: web::Data<Arc<ServiceRecordService>>,
) -> Result<HttpResponse, AppError> {
    let records = service.list_records().await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Configure service record routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/servicerecord")
            .route("", web::post().to(create_record))
            .route("", web::get().to(list_records))
            .route("/{id}", web::put().to(update_record))
            .route("/{id}", web::delete().to(delete_record)),
    );
}
