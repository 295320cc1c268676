use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::payments::models::{CreatePaymentRequest, Payment};
use crate::modules::payments::repositories::PaymentRepository;

pub const NO_SERVICES_MESSAGE: &str = "No services found for the given service record";

/// Records payments whose amount is derived from the record's services
pub struct PaymentService {
    payment_repo: Arc<dyn PaymentRepository>,
}

impl PaymentService {
    pub fn new(payment_repo: Arc<dyn PaymentRepository>) -> Self {
        Self { payment_repo }
    }

    /// The amount is always computed here; a zero total is treated as "no services".
    pub async fn create_payment(&self, request: CreatePaymentRequest) -> Result<Payment> {
        let new_payment = request.validate()?;

        let amount = self
            .payment_repo
            .services_total(new_payment.service_record_id)
            .await?;

        if amount.is_zero() {
            tracing::warn!(
                service_record_id = new_payment.service_record_id,
                "Payment rejected: record has no billable services"
            );
            return Err(AppError::validation(NO_SERVICES_MESSAGE));
        }

        let id = self.payment_repo.create(&new_payment, amount).await?;
        let payment = new_payment.into_payment(id, amount);

        tracing::info!(
            payment_id = payment.id,
            service_record_id = payment.service_record_id,
            amount = %payment.amount,
            "Payment recorded"
        );
        Ok(payment)
    }
}
