use std::sync::Arc;

use crate::core::{Period, Result};
use crate::modules::reports::models::Report;
use crate::modules::reports::repositories::ReportRepository;
use crate::modules::reports::services::{aggregate_daily, aggregate_periodic};

/// Report generation: fetch flat rows, then reshape them in memory
pub struct ReportService {
    report_repo: Arc<dyn ReportRepository>,
}

impl ReportService {
    pub fn new(report_repo: Arc<dyn ReportRepository>) -> Self {
        Self { report_repo }
    }

    pub async fn daily_report(&self) -> Result<Report> {
        let rows = self.report_repo.daily_rows().await?;
        let row_count = rows.len();
        let report = aggregate_daily(rows);

        tracing::info!(rows = row_count, buckets = report.len(), "Daily report generated");
        Ok(report)
    }

    pub async fn weekly_report(&self) -> Result<Report> {
        self.periodic_report(Period::Week).await
    }

    pub async fn monthly_report(&self) -> Result<Report> {
        self.periodic_report(Period::Month).await
    }

    async fn periodic_report(&self, period: Period) -> Result<Report> {
        let rows = self.report_repo.period_rows(period).await?;
        let row_count = rows.len();
        let report = aggregate_periodic(period, rows);

        tracing::info!(
            ?period,
            rows = row_count,
            buckets = report.len(),
            "Periodic report generated"
        );
        Ok(report)
    }
}
