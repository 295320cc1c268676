use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::middleware::AuthenticatedUser;
use crate::modules::cars::models::CreateCarRequest;
use crate::modules::cars::services::CarService;

/// POST /car
pub async fn create_car(
    _user: AuthenticatedUser,
    service: web::Data<Arc<CarService>>,
    request: web::Json<CreateCarRequest>,
) -> Result<HttpResponse, AppError> {
    let car = service.create_car(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(car))
}

/// GET /car
pub async fn list_cars(
    _user: AuthenticatedUser,
    service: web::Data<Arc<CarService>>,
) -> Result<HttpResponse, AppError> {
    let cars = service.list_cars().await?;
    Ok(HttpResponse::Ok().json(cars))
}

/// Configure car routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/car")
            .route("", web::post().to(create_car))
            .route("", web::get().to(list_cars)),
    );
}
