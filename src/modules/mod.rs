//! Feature modules and the wiring shared by the binary and the tests.

use std::sync::Arc;

use actix_web::web;
use serde::{Deserialize, Serialize};
use sqlx::MySqlPool;

use crate::middleware::error_handler::{json_error_handler, path_error_handler};

pub mod auth;
pub mod cars;
pub mod catalog;
pub mod health;
pub mod payments;
pub mod reports;
pub mod service_records;

use auth::{AuthService, MySqlUserRepository, UserRepository};
use cars::{CarRepository, CarService, MySqlCarRepository};
use catalog::{CatalogService, MySqlServiceRepository, ServiceRepository};
use health::{MySqlReadinessProbe, ReadinessProbe};
use payments::{MySqlPaymentRepository, PaymentRepository, PaymentService};
use reports::{MySqlReportRepository, ReportRepository, ReportService};
use service_records::{MySqlServiceRecordRepository, ServiceRecordRepository, ServiceRecordService};

/// `{"message": "..."}` body used by non-error responses that carry no data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Every persistence seam the services depend on
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub cars: Arc<dyn CarRepository>,
    pub services: Arc<dyn ServiceRepository>,
    pub service_records: Arc<dyn ServiceRecordRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub reports: Arc<dyn ReportRepository>,
    pub readiness: Arc<dyn ReadinessProbe>,
}

impl Repositories {
    pub fn mysql(pool: MySqlPool) -> Self {
        Self {
            users: Arc::new(MySqlUserRepository::new(pool.clone())),
            cars: Arc::new(MySqlCarRepository::new(pool.clone())),
            services: Arc::new(MySqlServiceRepository::new(pool.clone())),
            service_records: Arc::new(MySqlServiceRecordRepository::new(pool.clone())),
            payments: Arc::new(MySqlPaymentRepository::new(pool.clone())),
            reports: Arc::new(MySqlReportRepository::new(pool.clone())),
            readiness: Arc::new(MySqlReadinessProbe::new(pool)),
        }
    }
}

/// Application services, built once and cloned into every worker
#[derive(Clone)]
pub struct AppServices {
    pub auth: Arc<AuthService>,
    pub cars: Arc<CarService>,
    pub catalog: Arc<CatalogService>,
    pub service_records: Arc<ServiceRecordService>,
    pub payments: Arc<PaymentService>,
    pub reports: Arc<ReportService>,
    pub readiness: Arc<dyn ReadinessProbe>,
}

impl AppServices {
    pub fn new(repos: Repositories) -> Self {
        Self {
            auth: Arc::new(AuthService::new(repos.users)),
            cars: Arc::new(CarService::new(repos.cars)),
            catalog: Arc::new(CatalogService::new(repos.services)),
            service_records: Arc::new(ServiceRecordService::new(repos.service_records)),
            payments: Arc::new(PaymentService::new(repos.payments)),
            reports: Arc::new(ReportService::new(repos.reports)),
            readiness: repos.readiness,
        }
    }

    pub fn mysql(pool: MySqlPool) -> Self {
        Self::new(Repositories::mysql(pool))
    }

    /// Register shared state, extractor error handlers and every route
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.auth.clone()))
            .app_data(web::Data::new(self.cars.clone()))
            .app_data(web::Data::new(self.catalog.clone()))
            .app_data(web::Data::new(self.service_records.clone()))
            .app_data(web::Data::new(self.payments.clone()))
            .app_data(web::Data::new(self.reports.clone()))
            .app_data(web::Data::new(self.readiness.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler));

        health::controllers::configure(cfg);
        auth::controllers::configure(cfg);
        cars::controllers::configure(cfg);
        catalog::controllers::configure(cfg);
        service_records::controllers::configure(cfg);
        payments::controllers::configure(cfg);
        reports::controllers::configure(cfg);
    }
}
