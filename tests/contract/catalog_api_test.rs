//! Contract tests for cars and the service catalogue

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::test;
use helpers::*;
use serde_json::json;

#[actix_web::test]
async fn test_create_and_list_cars() {
    let app = test::init_service(test_app(InMemoryGarage::new().services())).await;
    let (_, cookie) = sign_in(&app, "admin").await;

    let (status, car) = call_json(
        &app,
        test::TestRequest::post().uri("/car").set_json(TestDataFactory::car_payload()),
        &cookie,
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(car["id"], 1);
    assert_eq!(car["make"], "Toyota");
    assert_eq!(car["year"], 2020);

    call_json(
        &app,
        test::TestRequest::post()
            .uri("/car")
            .set_json(TestDataFactory::car("Honda", "Civic", 2018, "Jane Roe")),
        &cookie,
    )
    .await;

    let (status, cars) = call_json(&app, test::TestRequest::get().uri("/car"), &cookie).await;
    assert_eq!(status, 200);
    let owners: Vec<_> = cars
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["owner_name"].as_str().unwrap())
        .collect();
    assert_eq!(owners, vec!["John Doe", "Jane Roe"]);
}

#[actix_web::test]
async fn test_create_car_requires_all_fields() {
    let app = test::init_service(test_app(InMemoryGarage::new().services())).await;
    let (_, cookie) = sign_in(&app, "admin").await;

    for payload in [
        json!({ "make": "Toyota", "model": "Camry", "year": 2020 }),
        json!({ "make": "", "model": "Camry", "year": 2020, "owner_name": "John Doe" }),
        json!({ "make": "Toyota", "model": "Camry", "year": 0, "owner_name": "John Doe" }),
    ] {
        let (status, body) = call_json(
            &app,
            test::TestRequest::post().uri("/car").set_json(payload),
            &cookie,
        )
        .await;
        assert_eq!(status, 400);
        assert_eq!(body["message"], "All fields are required");
    }
}

#[actix_web::test]
async fn test_malformed_body_is_validation_error() {
    let app = test::init_service(test_app(InMemoryGarage::new().services())).await;
    let (_, cookie) = sign_in(&app, "admin").await;

    let (status, body) = call_json(
        &app,
        test::TestRequest::post()
            .uri("/car")
            .set_json(json!({ "make": "Toyota", "model": "Camry", "year": "new", "owner_name": "John" })),
        &cookie,
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));
}

#[actix_web::test]
async fn test_create_and_list_services() {
    let app = test::init_service(test_app(InMemoryGarage::new().services())).await;
    let (_, cookie) = sign_in(&app, "admin").await;

    let (status, service) = call_json(
        &app,
        test::TestRequest::post()
            .uri("/services")
            .set_json(TestDataFactory::service("Oil Change", 50.0)),
        &cookie,
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(service["name"], "Oil Change");
    assert_eq!(service["price"], json!(50.0));

    let (status, _) = call_json(
        &app,
        test::TestRequest::post()
            .uri("/services")
            .set_json(json!({ "name": "Tire Rotation", "price": "30.50" })),
        &cookie,
    )
    .await;
    assert_eq!(status, 201);

    let (_, services) = call_json(&app, test::TestRequest::get().uri("/services"), &cookie).await;
    assert_eq!(services.as_array().unwrap().len(), 2);
    assert_eq!(services[1]["price"], json!(30.5));
}

#[actix_web::test]
async fn test_create_service_rejects_missing_or_negative_price() {
    let app = test::init_service(test_app(InMemoryGarage::new().services())).await;
    let (_, cookie) = sign_in(&app, "admin").await;

    let (status, body) = call_json(
        &app,
        test::TestRequest::post()
            .uri("/services")
            .set_json(json!({ "name": "Oil Change" })),
        &cookie,
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Name and price are required");

    let (status, _) = call_json(
        &app,
        test::TestRequest::post()
            .uri("/services")
            .set_json(TestDataFactory::service("Oil Change", -5.0)),
        &cookie,
    )
    .await;
    assert_eq!(status, 400);
}

#[actix_web::test]
async fn test_create_service_rejects_sub_cent_price() {
    let app = test::init_service(test_app(InMemoryGarage::new().services())).await;
    let (_, cookie) = sign_in(&app, "admin").await;

    let (status, body) = call_json(
        &app,
        test::TestRequest::post()
            .uri("/services")
            .set_json(json!({ "name": "Alignment", "price": "10.005" })),
        &cookie,
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Price must have at most two decimal places");

    let (status, services) = call_json(&app, test::TestRequest::get().uri("/services"), &cookie).await;
    assert_eq!(status, 200);
    assert!(services.as_array().unwrap().is_empty());
}
