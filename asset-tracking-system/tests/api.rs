mod common;

use actix_web::{http::StatusCode, test, App};
use asset_tracking_system::server::configure_app;
use serde_json::{json, Value};

macro_rules! app {
    ($sp:expr) => {{
        let sp = $sp.clone();
        test::init_service(App::new().configure(move |cfg| configure_app(cfg, sp))).await
    }};
}

#[actix_web::test]
async fn login_failures_are_indistinguishable() {
    let sp = common::provider().await;
    let app = app!(sp);

    let wrong_password = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": "admin", "password": "nope" }))
        .to_request();
    let resp = test::call_service(&app, wrong_password).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let first: Value = test::read_body_json(resp).await;

    let unknown_user = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": "ghost", "password": "nope" }))
        .to_request();
    let resp = test::call_service(&app, unknown_user).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let second: Value = test::read_body_json(resp).await;

    assert_eq!(first, second);
    assert_eq!(first, json!({ "error": "Invalid credentials" }));
}

#[actix_web::test]
async fn login_returns_the_user_without_password() {
    let sp = common::provider().await;
    let app = app!(sp);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": "admin", "password": "admin123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["username"], "admin");
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["user"].get("password_hash").is_none());

    let missing = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": "admin" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, missing).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn unknown_fields_are_rejected() {
    let sp = common::provider().await;
    let app = app!(sp);

    let req = test::TestRequest::post()
        .uri("/api/workstations")
        .set_json(json!({ "inventory_number": "WS-01", "owner": "bob" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("owner"));
}

#[actix_web::test]
async fn workstation_lifecycle_status_codes() {
    let sp = common::provider().await;
    let app = app!(sp);

    let req = test::TestRequest::post()
        .uri("/api/workstations")
        .set_json(json!({ "inventory_number": "WS-01", "department_id": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["department_name"], "IT");
    assert_eq!(created["status"], "operational");
    let id = created["id"].as_i64().unwrap();

    let duplicate = test::TestRequest::post()
        .uri("/api/workstations")
        .set_json(json!({ "inventory_number": "WS-01" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, duplicate).await.status(),
        StatusCode::BAD_REQUEST
    );

    let ticket = test::TestRequest::post()
        .uri("/api/tickets")
        .set_json(json!({ "user_id": 1, "workstation_id": id, "description": "no boot" }))
        .to_request();
    let resp = test::call_service(&app, ticket).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let ticket: Value = test::read_body_json(resp).await;

    let blocked = test::TestRequest::delete()
        .uri(&format!("/api/workstations/{id}"))
        .to_request();
    let resp = test::call_service(&app, blocked).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["references"][0]["relation"], "tickets.workstation_id");

    let remove_ticket = test::TestRequest::delete()
        .uri(&format!("/api/tickets/{}", ticket["id"]))
        .to_request();
    assert_eq!(
        test::call_service(&app, remove_ticket).await.status(),
        StatusCode::NO_CONTENT
    );
    let remove = test::TestRequest::delete()
        .uri(&format!("/api/workstations/{id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, remove).await.status(),
        StatusCode::NO_CONTENT
    );

    let gone = test::TestRequest::get()
        .uri(&format!("/api/workstations/{id}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, gone).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn missing_required_fields_name_them() {
    let sp = common::provider().await;
    let app = app!(sp);

    let req = test::TestRequest::post()
        .uri("/api/tickets")
        .set_json(json!({ "title": "only a title" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["fields"], json!(["description", "user_id"]));
}

#[actix_web::test]
async fn admin_cannot_be_deleted_over_http() {
    let sp = common::provider().await;
    let app = app!(sp);

    let req = test::TestRequest::delete().uri("/api/users/1").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
    let req = test::TestRequest::delete().uri("/api/users/999").to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn read_only_aggregates() {
    let sp = common::provider().await;
    let app = app!(sp);

    for inventory_number in ["WS-01", "WS-02"] {
        let req = test::TestRequest::post()
            .uri("/api/workstations")
            .set_json(json!({ "inventory_number": inventory_number, "status": "repair" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get().uri("/api/workstationstatuses").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!([{ "status": "repair", "count": 2 }]));

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total_workstations"], 2);
    assert_eq!(body["open_tickets"], 0);

    let req = test::TestRequest::get().uri("/api/users").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert!(body[0].get("password_hash").is_none());
}
