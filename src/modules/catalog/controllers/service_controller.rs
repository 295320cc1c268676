use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::middleware::AuthenticatedUser;
use crate::modules::catalog::models::CreateServiceRequest;
use crate::modules::catalog::services::CatalogService;

/// POST /services
pub async fn create_service(
    _user: AuthenticatedUser,
    catalog: web::Data<Arc<CatalogService>>,
    request: web::Json<CreateServiceRequest>,
) -> Result<HttpResponse, AppError> {
    let service = catalog.create_service(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(service))
}

/// GET /services
pub async fn list_services(
    _user: AuthenticatedUser,
    catalog: web::Data<Arc<CatalogService>>,
) -> Result<HttpResponse, AppError> {
    let services = catalog.list_services().await?;
    Ok(HttpResponse::Ok().json(services))
}

/// Configure service catalogue routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/services")
            .route("", web::post().to(create_service))
            .route("", web::get().to(list_services)),
    );
}
