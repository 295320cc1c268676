use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::period::parse_calendar_date;
use crate::core::{AppError, Result};

/// Body of `POST /servicerecord` and `PUT /servicerecord/{id}`
#[derive(Debug, Default, Deserialize)]
pub struct ServiceRecordRequest {
    #[serde(default)]
    pub car_id: Option<u64>,
    #[serde(default)]
    pub service_ids: Option<Vec<u64>>,
    #[serde(default)]
    pub service_date: Option<String>,
}

/// A visit ready to be written: car, the full set of services performed, and the day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecordInput {
    pub car_id: u64,
    /// Kept as submitted, duplicates included.
    pub service_ids: Vec<u64>,
    pub service_date: NaiveDate,
}

impl ServiceRecordRequest {
    pub const REQUIRED_MESSAGE: &'static str =
        "car_id, service_ids (non-empty array), and service_date are required";

    pub fn validate(self) -> Result<ServiceRecordInput> {
        let car_id = self.car_id.filter(|id| *id > 0);
        let service_ids = self.service_ids.filter(|ids| !ids.is_empty());
        let service_date = self
            .service_date
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        let (Some(car_id), Some(service_ids), Some(service_date)) =
            (car_id, service_ids, service_date)
        else {
            return Err(AppError::validation(Self::REQUIRED_MESSAGE));
        };

        if service_ids.contains(&0) {
            return Err(AppError::validation("service_ids must be positive ids"));
        }

        let service_date = parse_calendar_date(&service_date).ok_or_else(|| {
            AppError::validation(format!(
                "Invalid service_date '{}'. Expected YYYY-MM-DD",
                service_date
            ))
        })?;

        Ok(ServiceRecordInput {
            car_id,
            service_ids,
            service_date,
        })
    }
}

/// Echo returned after a create or update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecordResponse {
    pub id: u64,
    pub car_id: u64,
    pub service_ids: Vec<u64>,
    pub service_date: NaiveDate,
}

impl ServiceRecordResponse {
    pub fn new(id: u64, input: ServiceRecordInput) -> Self {
        Self {
            id,
            car_id: input.car_id,
            service_ids: input.service_ids,
            service_date: input.service_date,
        }
    }
}

/// `service_records` joined with its car
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ServiceRecordRow {
    pub id: u64,
    pub car_id: u64,
    pub service_date: Option<NaiveDate>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub owner_name: String,
}

/// One service linked to a record
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ServiceLinkRow {
    pub service_record_id: u64,
    pub id: u64,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarSnapshot {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub owner_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedService {
    pub id: u64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// A visit as listed by `GET /servicerecord`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRecordDetails {
    pub id: u64,
    pub car_id: u64,
    pub service_date: Option<NaiveDate>,
    pub car: CarSnapshot,
    pub services: Vec<LinkedService>,
}

/// Attach each record's services, keeping record order and per-record link order.
/// Links whose record is not in `records` are dropped.
pub fn assemble_records(
    records: Vec<ServiceRecordRow>,
    links: Vec<ServiceLinkRow>,
) -> Vec<ServiceRecordDetails> {
    let mut services_by_record: HashMap<u64, Vec<LinkedService>> = HashMap::new();
    for link in links {
        services_by_record
            .entry(link.service_record_id)
            .or_default()
            .push(LinkedService {
                id: link.id,
                name: link.name,
                price: link.price,
            });
    }

    records
        .into_iter()
        .map(|row| ServiceRecordDetails {
            services: services_by_record.remove(&row.id).unwrap_or_default(),
            id: row.id,
            car_id: row.car_id,
            service_date: row.service_date,
            car: CarSnapshot {
                make: row.make,
                model: row.model,
                year: row.year,
                owner_name: row.owner_name,
            },
        })
        .collect()
}
