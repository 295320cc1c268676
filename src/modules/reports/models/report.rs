use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Report body: bucket key to the cars serviced in that bucket, in bucket order
pub type Report = IndexMap<String, Vec<CarSummary>>;

/// One (service record x service) row of the daily query
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct DailyRow {
    /// Service date as text; NULL or unreadable values land in the unknown bucket
    pub service_date: Option<String>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub owner_name: String,
    pub service_name: String,
    pub price: Decimal,
    pub amount: Option<Decimal>,
    pub receiver: Option<String>,
}

/// One (period x car x receiver) row of the weekly/monthly query
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PeriodRow {
    pub period_year: Option<i64>,
    /// ISO week or calendar month
    pub period_number: Option<i64>,
    pub make: String,
    pub model: String,
    pub car_year: i32,
    pub owner_name: String,
    /// Comma-joined service names
    pub service_names: Option<String>,
    pub total_price: Option<Decimal>,
    pub amount_paid: Option<Decimal>,
    pub receiver: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLine {
    pub name: String,
    /// Only the daily report carries per-service prices
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
}

/// A car's activity inside one report bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarSummary {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub owner_name: String,
    pub services: Vec<ServiceLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_paid: Decimal,
    pub receiver: Option<String>,
    /// Only the weekly and monthly reports carry a total
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub total_price: Option<Decimal>,
}
