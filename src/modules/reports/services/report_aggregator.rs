//! Reshape flat report rows into `bucket -> [car summary]`.
//!
//! Rows arrive ordered newest bucket first and that order is kept. Inside a
//! bucket, cars are matched on (make, model, owner_name) only, so two cars
//! sharing those but differing in year collapse into one entry; the year
//! shown is the first one seen.

use rust_decimal::Decimal;

use crate::core::period::{day_key, Period};
use crate::modules::reports::models::{CarSummary, DailyRow, PeriodRow, Report, ServiceLine};

struct CarKey<'a> {
    make: &'a str,
    model: &'a str,
    owner_name: &'a str,
}

impl CarSummary {
    fn matches(&self, key: &CarKey<'_>) -> bool {
        self.make == key.make && self.model == key.model && self.owner_name == key.owner_name
    }
}

/// Find the car's entry in `bucket`, appending a fresh one built by `init` if absent
fn entry_for<'b>(
    bucket: &'b mut Vec<CarSummary>,
    key: CarKey<'_>,
    init: impl FnOnce() -> CarSummary,
) -> &'b mut CarSummary {
    let index = match bucket.iter().position(|entry| entry.matches(&key)) {
        Some(index) => index,
        None => {
            bucket.push(init());
            bucket.len() - 1
        }
    };
    &mut bucket[index]
}

/// Daily report: one service line per row, last payment amount seen wins
pub fn aggregate_daily<I>(rows: I) -> Report
where
    I: IntoIterator<Item = DailyRow>,
{
    let mut report = Report::new();

    for row in rows {
        let bucket = report
            .entry(day_key(row.service_date.as_deref()))
            .or_default();

        let entry = entry_for(
            bucket,
            CarKey {
                make: &row.make,
                model: &row.model,
                owner_name: &row.owner_name,
            },
            || CarSummary {
                make: row.make.clone(),
                model: row.model.clone(),
                year: row.year,
                owner_name: row.owner_name.clone(),
                services: Vec::new(),
                amount_paid: Decimal::ZERO,
                receiver: None,
                total_price: None,
            },
        );

        entry.services.push(ServiceLine {
            name: row.service_name,
            price: Some(row.price),
        });
        if let Some(amount) = row.amount {
            entry.amount_paid = amount;
        }
        if entry.receiver.is_none() {
            entry.receiver = row.receiver;
        }
    }

    report
}

/// Weekly/monthly report from pre-aggregated rows. Rows that regroup into the
/// same car entry have their services appended and their amounts summed.
pub fn aggregate_periodic<I>(period: Period, rows: I) -> Report
where
    I: IntoIterator<Item = PeriodRow>,
{
    let mut report = Report::new();

    for row in rows {
        let bucket = report
            .entry(period.key(row.period_year, row.period_number))
            .or_default();

        let entry = entry_for(
            bucket,
            CarKey {
                make: &row.make,
                model: &row.model,
                owner_name: &row.owner_name,
            },
            || CarSummary {
                make: row.make.clone(),
                model: row.model.clone(),
                year: row.car_year,
                owner_name: row.owner_name.clone(),
                services: Vec::new(),
                amount_paid: Decimal::ZERO,
                receiver: None,
                total_price: Some(Decimal::ZERO),
            },
        );

        entry
            .services
            .extend(split_service_names(row.service_names.as_deref()));
        entry.amount_paid += row.amount_paid.unwrap_or_default();
        entry.total_price =
            Some(entry.total_price.unwrap_or_default() + row.total_price.unwrap_or_default());
        if entry.receiver.is_none() {
            entry.receiver = row.receiver;
        }
    }

    report
}

fn split_service_names(names: Option<&str>) -> impl Iterator<Item = ServiceLine> + '_ {
    names
        .unwrap_or_default()
        .split(',')
        .filter(|name| !name.is_empty())
        .map(|name| ServiceLine {
            name: name.to_string(),
            price: None,
        })
}
