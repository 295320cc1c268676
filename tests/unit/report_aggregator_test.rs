//! Aggregator behaviour over realistic row sets

use garage_ledger::core::Period;
use garage_ledger::modules::reports::models::{DailyRow, PeriodRow};
use garage_ledger::reports::{aggregate_daily, aggregate_periodic};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn daily_row(
    date: &str,
    car: (&str, &str, i32, &str),
    service: (&str, Decimal),
    payment: Option<(Decimal, &str)>,
) -> DailyRow {
    DailyRow {
        service_date: Some(date.to_string()),
        make: car.0.to_string(),
        model: car.1.to_string(),
        year: car.2,
        owner_name: car.3.to_string(),
        service_name: service.0.to_string(),
        price: service.1,
        amount: payment.map(|p| p.0),
        receiver: payment.map(|p| p.1.to_string()),
    }
}

const CAMRY: (&str, &str, i32, &str) = ("Toyota", "Camry", 2020, "John Doe");
const CIVIC: (&str, &str, i32, &str) = ("Honda", "Civic", 2018, "Jane Roe");

#[test]
fn test_reference_scenario_daily_report() {
    let rows = vec![
        daily_row("2024-01-15", CAMRY, ("Oil Change", dec!(50)), Some((dec!(80), "admin"))),
        daily_row("2024-01-15", CAMRY, ("Tire Rotation", dec!(30)), Some((dec!(80), "admin"))),
    ];

    let report = aggregate_daily(rows);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "2024-01-15": [{
                "make": "Toyota",
                "model": "Camry",
                "year": 2020,
                "owner_name": "John Doe",
                "services": [
                    { "name": "Oil Change", "price": 50.0 },
                    { "name": "Tire Rotation", "price": 30.0 }
                ],
                "amount_paid": 80.0,
                "receiver": "admin"
            }]
        })
    );
}

#[test]
fn test_daily_separates_cars_and_days() {
    let rows = vec![
        daily_row("2024-01-16", CIVIC, ("Wash", dec!(10)), None),
        daily_row("2024-01-15", CAMRY, ("Oil Change", dec!(50)), None),
        daily_row("2024-01-15", CIVIC, ("Wash", dec!(10)), Some((dec!(10), "clerk"))),
    ];

    let report = aggregate_daily(rows);

    assert_eq!(report.keys().collect::<Vec<_>>(), vec!["2024-01-16", "2024-01-15"]);
    assert_eq!(report["2024-01-15"].len(), 2);
    assert_eq!(report["2024-01-15"][0].owner_name, "John Doe");
    assert_eq!(report["2024-01-15"][1].amount_paid, dec!(10));
    assert_eq!(report["2024-01-16"][0].receiver, None);
}

#[test]
fn test_daily_first_receiver_wins() {
    let rows = vec![
        daily_row("2024-01-15", CAMRY, ("Oil Change", dec!(50)), None),
        daily_row("2024-01-15", CAMRY, ("Wash", dec!(10)), Some((dec!(60), "first"))),
        daily_row("2024-01-15", CAMRY, ("Wax", dec!(20)), Some((dec!(70), "second"))),
    ];

    let report = aggregate_daily(rows);
    let entry = &report["2024-01-15"][0];
    assert_eq!(entry.receiver.as_deref(), Some("first"));
    assert_eq!(entry.amount_paid, dec!(70));
}

#[test]
fn test_daily_keeps_duplicate_service_lines() {
    let rows = vec![
        daily_row("2024-01-15", CAMRY, ("Oil Change", dec!(50)), None),
        daily_row("2024-01-15", CAMRY, ("Oil Change", dec!(50)), None),
    ];

    let report = aggregate_daily(rows);
    assert_eq!(report["2024-01-15"][0].services.len(), 2);
}

#[test]
fn test_monthly_regroups_receivers_of_same_car() {
    let row = |receiver: Option<&str>, names: &str, total: Decimal, paid: Option<Decimal>| PeriodRow {
        period_year: Some(2024),
        period_number: Some(1),
        make: "Toyota".to_string(),
        model: "Camry".to_string(),
        car_year: 2020,
        owner_name: "John Doe".to_string(),
        service_names: Some(names.to_string()),
        total_price: Some(total),
        amount_paid: paid,
        receiver: receiver.map(str::to_string),
    };

    let report = aggregate_periodic(
        Period::Month,
        vec![
            row(None, "Wash", dec!(10), None),
            row(Some("admin"), "Oil Change,Tire Rotation", dec!(80), Some(dec!(80))),
        ],
    );

    let entries = &report["2024-01"];
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].services.len(), 3);
    assert_eq!(entries[0].total_price, Some(dec!(90)));
    assert_eq!(entries[0].amount_paid, dec!(80));
    assert_eq!(entries[0].receiver.as_deref(), Some("admin"));
}

#[test]
fn test_weekly_keys_in_source_order() {
    let row = |year: i64, week: i64| PeriodRow {
        period_year: Some(year),
        period_number: Some(week),
        make: "Honda".to_string(),
        model: "Civic".to_string(),
        car_year: 2018,
        owner_name: "Jane Roe".to_string(),
        service_names: Some("Wash".to_string()),
        total_price: Some(dec!(10)),
        amount_paid: None,
        receiver: None,
    };

    let report = aggregate_periodic(Period::Week, vec![row(2025, 1), row(2024, 52), row(2024, 3)]);
    assert_eq!(
        report.keys().collect::<Vec<_>>(),
        vec!["2025-W01", "2024-W52", "2024-W03"]
    );
}

fn arb_daily_row() -> impl Strategy<Value = DailyRow> {
    (
        prop::sample::select(vec!["2024-01-15", "2024-01-16", "garbage"]),
        prop::sample::select(vec!["John Doe", "Jane Roe", "Sam Poe"]),
        0u32..10_000,
        prop::option::of(1u32..10_000),
    )
        .prop_map(|(date, owner, price_cents, amount_cents)| DailyRow {
            service_date: Some(date.to_string()),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2020,
            owner_name: owner.to_string(),
            service_name: "Service".to_string(),
            price: Decimal::new(i64::from(price_cents), 2),
            amount: amount_cents.map(|c| Decimal::new(i64::from(c), 2)),
            receiver: None,
        })
}

fn arb_period_row() -> impl Strategy<Value = PeriodRow> {
    (
        prop::option::of(1i64..=12),
        prop::sample::select(vec!["John Doe", "Jane Roe"]),
        prop::sample::select(vec!["", "Oil", "Oil,Wash", "Oil,Wash,Wax"]),
        prop::option::of(0u32..100_000),
    )
        .prop_map(|(month, owner, names, paid_cents)| PeriodRow {
            period_year: Some(2024),
            period_number: month,
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            car_year: 2018,
            owner_name: owner.to_string(),
            service_names: Some(names.to_string()),
            total_price: Some(Decimal::ONE),
            amount_paid: paid_cents.map(|c| Decimal::new(i64::from(c), 2)),
            receiver: None,
        })
}

proptest! {
    #[test]
    fn prop_daily_keeps_one_service_line_per_row(rows in prop::collection::vec(arb_daily_row(), 0..40)) {
        let expected = rows.len();
        let report = aggregate_daily(rows);
        let lines: usize = report.values().flatten().map(|car| car.services.len()).sum();
        prop_assert_eq!(lines, expected);
    }

    #[test]
    fn prop_daily_cars_unique_within_bucket(rows in prop::collection::vec(arb_daily_row(), 0..40)) {
        let report = aggregate_daily(rows);
        for cars in report.values() {
            let mut owners: Vec<_> = cars.iter().map(|c| c.owner_name.clone()).collect();
            let before = owners.len();
            owners.sort();
            owners.dedup();
            prop_assert_eq!(owners.len(), before);
        }
    }

    #[test]
    fn prop_periodic_amounts_are_conserved(rows in prop::collection::vec(arb_period_row(), 0..40)) {
        let paid: Decimal = rows.iter().filter_map(|r| r.amount_paid).sum();
        let total: Decimal = rows.iter().filter_map(|r| r.total_price).sum();

        let report = aggregate_periodic(Period::Month, rows);
        let reported_paid: Decimal = report.values().flatten().map(|c| c.amount_paid).sum();
        let reported_total: Decimal = report
            .values()
            .flatten()
            .filter_map(|c| c.total_price)
            .sum();

        prop_assert_eq!(reported_paid, paid);
        prop_assert_eq!(reported_total, total);
    }
}
