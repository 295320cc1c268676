use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::health::repositories::ReadinessProbe;

/// Plain-text body of `GET /`
pub const ROOT_BANNER: &str = "Garage Management API";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
}

/// GET /
pub async fn root() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(ROOT_BANNER)
}

/// GET /health - Liveness probe
/// Returns 200 whenever the process can answer; dependencies are not checked
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /ready - Readiness probe
/// Returns 503 while the database cannot be reached
pub async fn readiness_check(probe: web::Data<Arc<dyn ReadinessProbe>>) -> impl Responder {
    match probe.ping().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            ready: true,
            database: true,
        }),
        Err(e) => {
            tracing::error!("Database readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                ready: false,
                database: false,
            })
        }
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
