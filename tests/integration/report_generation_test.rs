//! Integration tests for report generation against MySQL
//!
//! The SQL tests go through the repository and service; the last test drives
//! the full HTTP stack over a real socket with awc.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use garage_ledger::modules::reports::{MySqlReportRepository, ReportService};
use garage_ledger::AppServices;
use helpers::*;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use sqlx::MySqlPool;

/// A car with one paid visit (50 + 30 on 2024-01-15) and one unpaid visit
/// (10 on 2024-01-16). Returns the car owner's unique name.
async fn seed_visits(pool: &MySqlPool) -> String {
    let owner = TestDataFactory::unique_username();
    let receiver = TestDataFactory::unique_username();

    let car = seed_car(pool, "Toyota", "Camry", 2020, &owner).await;
    let oil = seed_service(pool, "Oil Change", dec!(50)).await;
    let tires = seed_service(pool, "Tire Rotation", dec!(30)).await;
    let wash = seed_service(pool, "Wash", dec!(10)).await;
    let user = seed_user(pool, &receiver).await;

    let paid = insert_record(pool, car, "2024-01-15", &[oil, tires]).await;
    insert_record(pool, car, "2024-01-16", &[wash]).await;

    sqlx::query(
        "INSERT INTO payments (service_record_id, amount, receiver_id, payment_date) VALUES (?, 80, ?, '2024-01-15')",
    )
    .bind(paid)
    .bind(user)
    .execute(pool)
    .await
    .unwrap();

    owner
}

async fn insert_record(pool: &MySqlPool, car: u64, date: &str, services: &[u64]) -> u64 {
    let id = sqlx::query("INSERT INTO service_records (car_id, service_date) VALUES (?, ?)")
        .bind(car)
        .bind(date)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_id();
    for service in services {
        sqlx::query("INSERT INTO service_record_services (service_record_id, service_id) VALUES (?, ?)")
            .bind(id)
            .bind(service)
            .execute(pool)
            .await
            .unwrap();
    }
    id
}

fn report_service(pool: &MySqlPool) -> ReportService {
    ReportService::new(Arc::new(MySqlReportRepository::new(pool.clone())))
}

#[tokio::test]
#[ignore = "Requires test database"]
async fn test_daily_report_from_mysql() {
    let pool = create_test_pool().await;
    let owner = seed_visits(&pool).await;

    let report = report_service(&pool).daily_report().await.unwrap();

    let day = report["2024-01-15"]
        .iter()
        .find(|car| car.owner_name == owner)
        .expect("paid visit reported");
    assert_eq!(day.services.len(), 2);
    assert_eq!(day.amount_paid, dec!(80));

    let next = report["2024-01-16"]
        .iter()
        .find(|car| car.owner_name == owner)
        .expect("unpaid visit reported");
    assert_eq!(next.amount_paid, dec!(0));
    assert_eq!(next.receiver, None);

    let later = report.get_index_of("2024-01-16").unwrap();
    let earlier = report.get_index_of("2024-01-15").unwrap();
    assert!(later < earlier);
}

#[tokio::test]
#[ignore = "Requires test database"]
async fn test_weekly_report_does_not_multiply_payments() {
    let pool = create_test_pool().await;
    let owner = seed_visits(&pool).await;

    let report = report_service(&pool).weekly_report().await.unwrap();

    let entry = report["2024-W03"]
        .iter()
        .find(|car| car.owner_name == owner)
        .expect("week reported");
    assert_eq!(entry.amount_paid, dec!(80));
    assert_eq!(entry.total_price, Some(dec!(90)));
    assert_eq!(entry.services.len(), 3);
    assert!(entry.receiver.is_some());
}

#[tokio::test]
#[ignore = "Requires test database"]
async fn test_monthly_report_from_mysql() {
    let pool = create_test_pool().await;
    let owner = seed_visits(&pool).await;

    let report = report_service(&pool).monthly_report().await.unwrap();

    let entry = report["2024-01"]
        .iter()
        .find(|car| car.owner_name == owner)
        .expect("month reported");
    assert_eq!(entry.amount_paid, dec!(80));
    assert_eq!(entry.total_price, Some(dec!(90)));
}

#[tokio::test]
#[ignore = "Requires test database"]
async fn test_monthly_report_keeps_long_service_lists() {
    let pool = create_test_pool().await;
    let owner = TestDataFactory::unique_username();
    let car = seed_car(&pool, "Volvo", "V70", 2008, &owner).await;

    // 40 names of 40+ bytes: well past the server default of 1024 bytes
    let mut services = Vec::new();
    for i in 0..40 {
        let name = format!("Full Drivetrain Inspection Package No. {:02}", i);
        services.push(seed_service(&pool, &name, dec!(1)).await);
    }
    insert_record(&pool, car, "2019-03-04", &services[..20]).await;
    insert_record(&pool, car, "2019-03-18", &services[20..]).await;

    let report = report_service(&pool).monthly_report().await.unwrap();

    let entry = report["2019-03"]
        .iter()
        .find(|car| car.owner_name == owner)
        .expect("month reported");
    assert_eq!(entry.services.len(), 40);
    assert_eq!(
        entry.services.last().unwrap().name,
        "Full Drivetrain Inspection Package No. 39"
    );
    assert_eq!(entry.total_price, Some(dec!(40)));
}

#[actix_web::test]
#[ignore = "Requires test database"]
async fn test_reference_scenario_over_http() {
    let pool = create_test_pool().await;
    let services = AppServices::mysql(pool.clone());
    let srv = actix_test::start(move || test_app(services.clone()));

    let username = TestDataFactory::unique_username();
    let owner = TestDataFactory::unique_username();

    let mut resp = srv
        .post("/register")
        .send_json(&json!({ "username": username, "password": TEST_PASSWORD }))
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let user: Value = resp.json().await.unwrap();

    let resp = srv
        .post("/login")
        .send_json(&json!({ "username": username, "password": TEST_PASSWORD }))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let cookie = resp
        .cookies()
        .unwrap()
        .iter()
        .find(|c| c.name() == garage_ledger::middleware::SESSION_COOKIE)
        .expect("session cookie")
        .clone()
        .into_owned();

    let post = |path: &str, body: Value| {
        let request = srv.post(path).cookie(cookie.clone());
        async move {
            let mut resp = request.send_json(&body).await.unwrap();
            assert_eq!(resp.status(), 201, "POST {body} failed");
            resp.json::<Value>().await.unwrap()
        }
    };

    let car = post("/car", TestDataFactory::car("Toyota", "Camry", 2020, &owner)).await;
    let oil = post("/services", TestDataFactory::service("Oil Change", 50.0)).await;
    let tires = post("/services", TestDataFactory::service("Tire Rotation", 30.0)).await;
    let record = post(
        "/servicerecord",
        TestDataFactory::service_record(
            car["id"].as_u64().unwrap(),
            &[oil["id"].as_u64().unwrap(), tires["id"].as_u64().unwrap()],
            "2024-01-15",
        ),
    )
    .await;
    let payment = post(
        "/payment",
        TestDataFactory::payment(
            record["id"].as_u64().unwrap(),
            user["id"].as_u64().unwrap(),
            "2024-01-15",
        ),
    )
    .await;
    assert_eq!(payment["amount"], json!(80.0));

    let mut resp = srv
        .get("/report/daily")
        .cookie(cookie.clone())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let report: Value = resp.json().limit(10 * 1024 * 1024).await.unwrap();

    let entry = report["2024-01-15"]
        .as_array()
        .unwrap()
        .iter()
        .find(|car| car["owner_name"] == owner.as_str())
        .expect("reference visit reported")
        .clone();
    assert_eq!(
        entry["services"],
        json!([
            { "name": "Oil Change", "price": 50.0 },
            { "name": "Tire Rotation", "price": 30.0 }
        ])
    );
    assert_eq!(entry["amount_paid"], json!(80.0));
    assert_eq!(entry["receiver"], username.as_str());
}
