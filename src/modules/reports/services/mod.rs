pub mod report_aggregator;
mod report_service;

pub use report_aggregator::{aggregate_daily, aggregate_periodic};
pub use report_service::ReportService;
