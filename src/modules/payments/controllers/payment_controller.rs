use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::middleware::AuthenticatedUser;
use crate::modules::payments::models::CreatePaymentRequest;
use crate::modules::payments::services::PaymentService;

/// POST /payment
pub async fn create_payment(
    _user: AuthenticatedUser,
    service: web::Data<Arc<PaymentService>>,
    request: web::Json<CreatePaymentRequest>,
) -> Result<HttpResponse, AppError> {
    let payment = service.create_payment(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(payment))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/payment").route("", web::post().to(create_payment)));
}
