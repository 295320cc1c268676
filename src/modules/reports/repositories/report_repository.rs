use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{Period, Result};
use crate::modules::reports::models::{DailyRow, PeriodRow};

/// Flat row sources for the reports, newest bucket first
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// One row per (service record x linked service), with the record's payment if any
    async fn daily_rows(&self) -> Result<Vec<DailyRow>>;

    /// One row per (period, car, receiver)
    async fn period_rows(&self, period: Period) -> Result<Vec<PeriodRow>>;
}

pub struct MySqlReportRepository {
    pool: MySqlPool,
}

impl MySqlReportRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

const DAILY_QUERY: &str = r#"
    SELECT CAST(sr.service_date AS CHAR) AS service_date,
           c.make, c.model, c.year, c.owner_name,
           s.name AS service_name, s.price,
           p.amount, u.username AS receiver
    FROM service_records sr
    JOIN cars c ON sr.car_id = c.id
    JOIN service_record_services srs ON sr.id = srs.service_record_id
    JOIN services s ON srs.service_id = s.id
    LEFT JOIN payments p ON sr.id = p.service_record_id
    LEFT JOIN users u ON p.receiver_id = u.id
    ORDER BY sr.service_date DESC, sr.id DESC, s.id
"#;

/// SQL expressions yielding (year, number) of the period containing `r.service_date`
fn period_columns(period: Period) -> (&'static str, &'static str) {
    match period {
        // Mode 3 is ISO-8601: Monday first, week 1 holds the first Thursday
        Period::Week => (
            "YEARWEEK(r.service_date, 3) DIV 100",
            "WEEK(r.service_date, 3)",
        ),
        Period::Month => ("YEAR(r.service_date)", "MONTH(r.service_date)"),
    }
}

/// Names and prices are folded per record first so that the payment join
/// cannot multiply amounts by the number of linked services.
fn period_query(period: Period) -> String {
    let (year_expr, number_expr) = period_columns(period);

    format!(
        r#"
        SELECT CAST({year_expr} AS SIGNED) AS period_year,
               CAST({number_expr} AS SIGNED) AS period_number,
               c.make, c.model, c.year AS car_year, c.owner_name,
               CAST(GROUP_CONCAT(r.service_names ORDER BY r.id SEPARATOR ',') AS CHAR) AS service_names,
               CAST(SUM(r.total_price) AS DECIMAL(12, 2)) AS total_price,
               CAST(SUM(p.amount) AS DECIMAL(12, 2)) AS amount_paid,
               MAX(u.username) AS receiver
        FROM (
            SELECT sr.id, sr.car_id, sr.service_date,
                   GROUP_CONCAT(s.name ORDER BY s.id SEPARATOR ',') AS service_names,
                   SUM(s.price) AS total_price
            FROM service_records sr
            JOIN service_record_services srs ON sr.id = srs.service_record_id
            JOIN services s ON srs.service_id = s.id
            GROUP BY sr.id, sr.car_id, sr.service_date
        ) r
        JOIN cars c ON r.car_id = c.id
        LEFT JOIN payments p ON r.id = p.service_record_id
        LEFT JOIN users u ON p.receiver_id = u.id
        GROUP BY period_year, period_number, c.id, u.id
        ORDER BY period_year DESC, period_number DESC
        "#
    )
}

#[async_trait]
impl ReportRepository for MySqlReportRepository {
    async fn daily_rows(&self) -> Result<Vec<DailyRow>> {
        let rows = sqlx::query_as::<_, DailyRow>(DAILY_QUERY)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn period_rows(&self, period: Period) -> Result<Vec<PeriodRow>> {
        let sql = period_query(period);
        let rows = sqlx::query_as::<_, PeriodRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
