//! Daily, weekly and monthly activity reports.

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CarSummary, Report, ServiceLine};
pub use repositories::{MySqlReportRepository, ReportRepository};
pub use services::{aggregate_daily, aggregate_periodic, ReportService};
