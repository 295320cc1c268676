//! Service records and their service links.
//!
//! A record and its link rows are only ever written together: create, update
//! and delete each run inside one transaction that is rolled back explicitly
//! on the first failing statement, so no partial record or partial link set
//! is ever visible to other connections.

use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder, Transaction};

use crate::core::{AppError, Result};
use crate::modules::service_records::models::{
    assemble_records, ServiceLinkRow, ServiceRecordDetails, ServiceRecordInput, ServiceRecordRow,
};

pub const NOT_FOUND_MESSAGE: &str = "Service record not found";

const LIST_RECORDS_QUERY: &str = r#"
    SELECT sr.id, sr.car_id, sr.service_date, c.make, c.model, c.year, c.owner_name
    FROM service_records sr
    JOIN cars c ON sr.car_id = c.id
    ORDER BY sr.service_date DESC, sr.id DESC
"#;

/// Links are joined through `service_records` rather than filtered by an id
/// list, so the statement carries no placeholders however many visits exist.
const LIST_LINKS_QUERY: &str = r#"
    SELECT srs.service_record_id, s.id, s.name, s.price
    FROM service_record_services srs
    JOIN service_records sr ON srs.service_record_id = sr.id
    JOIN services s ON srs.service_id = s.id
    ORDER BY srs.service_record_id, s.id
"#;

#[async_trait]
pub trait ServiceRecordRepository: Send + Sync {
    /// Insert the record and one link per service id; returns the new record id
    async fn create(&self, input: &ServiceRecordInput) -> Result<u64>;

    /// Replace car, date and the whole link set of an existing record
    async fn update(&self, id: u64, input: &ServiceRecordInput) -> Result<()>;

    /// Remove the record together with its links and payments
    async fn delete(&self, id: u64) -> Result<()>;

    /// All records with car details and services, newest service date first
    async fn list(&self) -> Result<Vec<ServiceRecordDetails>>;
}

pub struct MySqlServiceRecordRepository {
    pool: MySqlPool,
}

impl MySqlServiceRecordRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn insert_record(
        tx: &mut Transaction<'_, MySql>,
        input: &ServiceRecordInput,
    ) -> Result<u64> {
        let result =
            sqlx::query("INSERT INTO service_records (car_id, service_date) VALUES (?, ?)")
                .bind(input.car_id)
                .bind(input.service_date)
                .execute(&mut **tx)
                .await?;

        let record_id = result.last_insert_id();
        Self::insert_links(tx, record_id, &input.service_ids).await?;

        Ok(record_id)
    }

    async fn replace_record(
        tx: &mut Transaction<'_, MySql>,
        id: u64,
        input: &ServiceRecordInput,
    ) -> Result<()> {
        let locked: Option<u64> =
            sqlx::query_scalar("SELECT id FROM service_records WHERE id = ? FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut **tx)
                .await?;

        if locked.is_none() {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }

        sqlx::query("UPDATE service_records SET car_id = ?, service_date = ? WHERE id = ?")
            .bind(input.car_id)
            .bind(input.service_date)
            .bind(id)
            .execute(&mut **tx)
            .await?;

        sqlx::query("DELETE FROM service_record_services WHERE service_record_id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Self::insert_links(tx, id, &input.service_ids).await
    }

    async fn remove_record(tx: &mut Transaction<'_, MySql>, id: u64) -> Result<()> {
        sqlx::query("DELETE FROM payments WHERE service_record_id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        sqlx::query("DELETE FROM service_record_services WHERE service_record_id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        let result = sqlx::query("DELETE FROM service_records WHERE id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }

        Ok(())
    }

    /// Bulk insert of `(record_id, service_id)` pairs in a single statement
    async fn insert_links(
        tx: &mut Transaction<'_, MySql>,
        record_id: u64,
        service_ids: &[u64],
    ) -> Result<()> {
        if service_ids.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<MySql>::new(
            "INSERT INTO service_record_services (service_record_id, service_id) ",
        );
        builder.push_values(service_ids, |mut row, service_id| {
            row.push_bind(record_id).push_bind(*service_id);
        });

        builder.build().execute(&mut **tx).await?;
        Ok(())
    }
}

/// Commit on success; otherwise roll back before handing the error back
async fn finish<T>(tx: Transaction<'_, MySql>, outcome: Result<T>, operation: &str) -> Result<T> {
    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(
                    operation,
                    error = %rollback_err,
                    "Failed to roll back service record transaction"
                );
            } else {
                tracing::warn!(operation, error = %err, "Service record transaction rolled back");
            }
            Err(err)
        }
    }
}

#[async_trait]
impl ServiceRecordRepository for MySqlServiceRecordRepository {
    async fn create(&self, input: &ServiceRecordInput) -> Result<u64> {
        let mut tx = self.pool.begin().await?;
        let outcome = Self::insert_record(&mut tx, input).await;
        finish(tx, outcome, "create").await
    }

    async fn update(&self, id: u64, input: &ServiceRecordInput) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        let outcome = Self::replace_record(&mut tx, id, input).await;
        finish(tx, outcome, "update").await
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        let outcome = Self::remove_record(&mut tx, id).await;
        finish(tx, outcome, "delete").await
    }

    async fn list(&self) -> Result<Vec<ServiceRecordDetails>> {
        // Both reads share one snapshot so links always match the listed records.
        let mut tx = self.pool.begin().await?;

        let records = sqlx::query_as::<_, ServiceRecordRow>(LIST_RECORDS_QUERY)
            .fetch_all(&mut *tx)
            .await?;

        if records.is_empty() {
            tx.commit().await?;
            return Ok(Vec::new());
        }

        let links = sqlx::query_as::<_, ServiceLinkRow>(LIST_LINKS_QUERY)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(assemble_records(records, links))
    }
}
