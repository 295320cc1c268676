use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::middleware::AuthenticatedUser;
use crate::modules::reports::services::ReportService;

/// GET /report/daily
pub async fn daily_report(
    _user: AuthenticatedUser,
    service: web::Data<Arc<ReportService>>,
) -> Result<HttpResponse, AppError> {
    let report = service.daily_report().await?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /report/weekly
pub async fn weekly_report(
    _user: AuthenticatedUser,
    service: web::Data<Arc<ReportService>>,
) -> Result<HttpResponse, AppError> {
    let report = service.weekly_report().await?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /report/monthly
pub async fn monthly_report(
    _user: AuthenticatedUser,
    service: web::Data<Arc<ReportService>>,
) -> Result<HttpResponse, AppError> {
    let report = service.monthly_report().await?;
    Ok(HttpResponse::Ok().json(report))
}

/// Configure report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/report")
            .route("/daily", web::get().to(daily_report))
            .route("/weekly", web::get().to(weekly_report))
            .route("/monthly", web::get().to(monthly_report)),
    );
}
