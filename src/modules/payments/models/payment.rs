use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::period::parse_calendar_date;
use crate::core::{AppError, Result};

/// Recorded payment. `amount` is the service total at the time of payment and
/// is not kept in sync with later edits of the record's services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u64,
    pub service_record_id: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub receiver_id: u64,
    pub payment_date: NaiveDate,
}

/// Body of `POST /payment`. There is deliberately no amount field.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePaymentRequest {
    #[serde(default)]
    pub service_record_id: Option<u64>,
    #[serde(default)]
    pub receiver_id: Option<u64>,
    #[serde(default)]
    pub payment_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPayment {
    pub service_record_id: u64,
    pub receiver_id: u64,
    pub payment_date: NaiveDate,
}

impl CreatePaymentRequest {
    pub const REQUIRED_MESSAGE: &'static str =
        "service_record_id, receiver_id, and payment_date are required";

    pub fn validate(self) -> Result<NewPayment> {
        let (Some(service_record_id), Some(receiver_id), Some(payment_date)) = (
            self.service_record_id.filter(|id| *id > 0),
            self.receiver_id.filter(|id| *id > 0),
            self.payment_date.filter(|d| !d.trim().is_empty()),
        ) else {
            return Err(AppError::validation(Self::REQUIRED_MESSAGE));
        };

        let payment_date = parse_calendar_date(&payment_date).ok_or_else(|| {
            AppError::validation(format!(
                "Invalid payment_date '{}'. Expected YYYY-MM-DD",
                payment_date
            ))
        })?;

        Ok(NewPayment {
            service_record_id,
            receiver_id,
            payment_date,
        })
    }
}

impl NewPayment {
    pub fn into_payment(self, id: u64, amount: Decimal) -> Payment {
        Payment {
            id,
            service_record_id: self.service_record_id,
            amount,
            receiver_id: self.receiver_id,
            payment_date: self.payment_date,
        }
    }
}
