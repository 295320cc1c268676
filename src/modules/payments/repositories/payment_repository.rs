use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::payments::models::NewPayment;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Sum of prices of every service linked to the record; zero when nothing is linked
    async fn services_total(&self, service_record_id: u64) -> Result<Decimal>;

    async fn create(&self, payment: &NewPayment, amount: Decimal) -> Result<u64>;
}

pub struct MySqlPaymentRepository {
    pool: MySqlPool,
}

impl MySqlPaymentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for MySqlPaymentRepository {
    async fn services_total(&self, service_record_id: u64) -> Result<Decimal> {
        let total: Decimal = sqlx::query_scalar(
            r#"
            SELECT CAST(COALESCE(SUM(s.price), 0) AS DECIMAL(12, 2))
            FROM service_record_services srs
            JOIN services s ON srs.service_id = s.id
            WHERE srs.service_record_id = ?
            "#,
        )
        .bind(service_record_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    async fn create(&self, payment: &NewPayment, amount: Decimal) -> Result<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO payments (service_record_id, amount, receiver_id, payment_date)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(payment.service_record_id)
        .bind(amount)
        .bind(payment.receiver_id)
        .bind(payment.payment_date)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }
}
