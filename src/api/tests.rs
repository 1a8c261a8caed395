//! Handler tests against the real routes and an in-memory store.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};
use sqlx::SqlitePool;

use crate::api::health;
use crate::db::{reject_inserts_into, test_pool};
use crate::routes::api_routes;

async fn app(
    pool: SqlitePool,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(pool))
            .service(web::scope("/api").configure(api_routes))
            .default_service(web::to(health::not_found)),
    )
    .await
}

async fn send(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    req: test::TestRequest,
) -> (StatusCode, Value) {
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

fn jane() -> Value {
    json!({
        "employee_id": "EMP001",
        "full_name": "Jane Doe",
        "email": "jane@x.com",
        "department": "Engineering"
    })
}

fn post(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_json(body)
}

fn get(uri: &str) -> test::TestRequest {
    test::TestRequest::get().uri(uri)
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = app(test_pool().await).await;

    let (status, body) = send(&app, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn unknown_route_is_json_404() {
    let app = app(test_pool().await).await;

    let (status, body) = send(&app, get("/api/nothing-here")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Cannot GET /api/nothing-here");
}

#[actix_web::test]
async fn create_employee_normalizes_and_returns_201() {
    let app = app(test_pool().await).await;

    let (status, body) = send(
        &app,
        post(
            "/api/employees",
            json!({
                "employee_id": " EMP001 ",
                "full_name": " Jane Doe",
                "email": " Jane@X.com ",
                "department": "Engineering "
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["employee_id"], "EMP001");
    assert_eq!(body["full_name"], "Jane Doe");
    assert_eq!(body["email"], "jane@x.com");
    assert_eq!(body["department"], "Engineering");
    assert!(body["id"].as_i64().is_some());
    assert!(body["created_at"].is_string());
}

#[actix_web::test]
async fn duplicate_employee_id_and_email_are_409() {
    let app = app(test_pool().await).await;
    send(&app, post("/api/employees", jane())).await;

    let mut same_id = jane();
    same_id["email"] = json!("other@x.com");
    let (status, body) = send(&app, post("/api/employees", same_id)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "An employee with this Employee ID already exists");

    let mut same_email = jane();
    same_email["employee_id"] = json!("EMP002");
    same_email["email"] = json!("JANE@x.com");
    let (status, body) = send(&app, post("/api/employees", same_email)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "An employee with this email already exists");
}

#[actix_web::test]
async fn invalid_employee_payloads_are_422() {
    let app = app(test_pool().await).await;

    let mut bad_email = jane();
    bad_email["email"] = json!("not-an-email");
    let (status, body) = send(&app, post("/api/employees", bad_email)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["messages"], json!(["Invalid email format"]));

    let (status, body) = send(
        &app,
        post("/api/employees", json!({ "employee_id": "EMP001" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");
}

#[actix_web::test]
async fn delete_employee_statuses() {
    let app = app(test_pool().await).await;
    let (_, created) = send(&app, post("/api/employees", jane())).await;
    let id = created["id"].as_i64().unwrap();

    let delete = |id: String| test::TestRequest::delete().uri(&format!("/api/employees/{id}"));

    let (status, body) = send(&app, delete(id.to_string())).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, delete(id.to_string())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found");

    let (status, _) = send(&app, delete("abc".to_string())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn marking_for_unknown_employee_is_404() {
    let app = app(test_pool().await).await;

    let (status, body) = send(
        &app,
        post(
            "/api/attendance",
            json!({ "employee_id": "NOPE", "date": "2024-01-01", "status": "Present" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Employee not found");
}

#[actix_web::test]
async fn invalid_attendance_payloads_are_422() {
    let app = app(test_pool().await).await;
    send(&app, post("/api/employees", jane())).await;

    let (status, body) = send(
        &app,
        post(
            "/api/attendance",
            json!({ "employee_id": "EMP001", "date": "01/06/2024", "status": "present" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["messages"],
        json!([
            "Date must be in YYYY-MM-DD format",
            "Status must be either Present or Absent"
        ])
    );

    let (status, _) = send(&app, get("/api/attendance?date=2024-02-30")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn jane_doe_scenario_over_http() {
    let app = app(test_pool().await).await;
    let (status, _) = send(&app, post("/api/employees", jane())).await;
    assert_eq!(status, StatusCode::CREATED);

    for status in ["Present", "Absent"] {
        let (code, body) = send(
            &app,
            post(
                "/api/attendance",
                json!({ "employee_id": "EMP001", "date": "2024-06-01", "status": status }),
            ),
        )
        .await;
        assert_eq!(code, StatusCode::CREATED);
        assert_eq!(body["status"], status);
        assert_eq!(body["full_name"], "Jane Doe");
    }

    let (status, records) = send(&app, get("/api/attendance?employee_id=EMP001")).await;
    assert_eq!(status, StatusCode::OK);
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["date"], "2024-06-01");
    assert_eq!(records[0]["status"], "Absent");
    assert_eq!(records[0]["full_name"], "Jane Doe");

    let (_, by_employee) = send(&app, get("/api/attendance/employee/EMP001?date=2024-06-01")).await;
    assert_eq!(by_employee.as_array().unwrap().len(), 1);

    let (status, stats) = send(&app, get("/api/attendance/stats/EMP001")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({ "total_days": 1, "present_days": 0, "absent_days": 1 })
    );
}

#[actix_web::test]
async fn deleting_employee_clears_attendance_and_stats() {
    let app = app(test_pool().await).await;
    let (_, created) = send(&app, post("/api/employees", jane())).await;
    for date in ["2024-06-01", "2024-06-02"] {
        send(
            &app,
            post(
                "/api/attendance",
                json!({ "employee_id": "EMP001", "date": date, "status": "Present" }),
            ),
        )
        .await;
    }

    let uri = format!("/api/employees/{}", created["id"]);
    let (status, _) = send(&app, test::TestRequest::delete().uri(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, records) = send(&app, get("/api/attendance")).await;
    assert_eq!(records, json!([]));

    let (_, stats) = send(&app, get("/api/attendance/stats/EMP001")).await;
    assert_eq!(
        stats,
        json!({ "total_days": 0, "present_days": 0, "absent_days": 0 })
    );
}

#[actix_web::test]
async fn employees_are_listed_newest_first() {
    let app = app(test_pool().await).await;
    for n in 1..=3 {
        send(
            &app,
            post(
                "/api/employees",
                json!({
                    "employee_id": format!("EMP00{n}"),
                    "full_name": format!("Person {n}"),
                    "email": format!("p{n}@x.com"),
                    "department": "Ops"
                }),
            ),
        )
        .await;
    }

    let (status, body) = send(&app, get("/api/employees")).await;

    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["employee_id"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["EMP003", "EMP002", "EMP001"]);
}

#[actix_web::test]
async fn empty_filters_are_ignored() {
    let app = app(test_pool().await).await;
    send(&app, post("/api/employees", jane())).await;
    send(
        &app,
        post(
            "/api/attendance",
            json!({ "employee_id": "EMP001", "date": "2024-06-01", "status": "Present" }),
        ),
    )
    .await;

    for uri in [
        "/api/attendance?employee_id=",
        "/api/attendance?date=",
        "/api/attendance?employee_id=&date=",
        "/api/attendance/employee/EMP001?date=",
    ] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body.as_array().unwrap().len(), 1, "{uri}");
    }
}

#[actix_web::test]
async fn storage_failures_are_500_with_their_message() {
    let pool = test_pool().await;
    reject_inserts_into(&pool, "employees").await;
    let app = app(pool).await;

    let (status, body) = send(&app, post("/api/employees", jane())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "Internal Server Error", "message": "Failed to add employee" })
    );
}

#[actix_web::test]
async fn failed_attendance_write_is_500() {
    let pool = test_pool().await;
    let app = app(pool.clone()).await;
    send(&app, post("/api/employees", jane())).await;
    reject_inserts_into(&pool, "attendance").await;

    let (status, body) = send(
        &app,
        post(
            "/api/attendance",
            json!({ "employee_id": "EMP001", "date": "2024-06-01", "status": "Present" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to mark attendance");
}
