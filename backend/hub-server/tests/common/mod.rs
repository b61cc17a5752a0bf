#![allow(dead_code)]

//! Test infrastructure for hub-server API tests

use hub_config::Config;
use hub_db::Database;
use hub_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const MEMBER_ID: &str = "00000000-0000-0000-0000-000000000001";
pub const ADMIN_ID: &str = "00000000-0000-0000-0000-0000000000ad";

/// Create AppState over a fresh in-memory database
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(Config::default()).await
}

pub async fn create_test_app_state_with(config: Config) -> AppState {
    let pool = Database::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(pool, &config)
}

pub async fn create_test_app() -> Router {
    build_router(create_test_app_state().await)
}

/// Who a test request is sent as
#[derive(Debug, Clone, Copy)]
pub enum As {
    Member,
    Admin,
    Guest,
    Nobody,
}

/// Send a request and decode the JSON response body (Null when empty or not JSON).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    who: As,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    builder = match who {
        As::Member => builder.header("X-User-Id", MEMBER_ID),
        As::Admin => builder
            .header("X-User-Id", ADMIN_ID)
            .header("X-User-Role", "ADMIN"),
        As::Guest => builder
            .header("X-User-Id", MEMBER_ID)
            .header("X-User-Role", "guest"),
        As::Nobody => builder,
    };

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Create a project through the API and return its JSON
pub async fn create_project(app: &Router, name: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/projects",
        As::Member,
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create project: {json}");
    json["project"].clone()
}

/// Create a task in the project's default column and return its JSON
pub async fn create_task(app: &Router, project_id: &str, title: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/tasks",
        As::Member,
        Some(serde_json::json!({ "project_id": project_id, "title": title })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create task: {json}");
    json["task"].clone()
}

pub fn id_of(json: &Value) -> String {
    json["id"].as_str().unwrap().to_string()
}

pub fn uuid_of(json: &Value) -> Uuid {
    Uuid::parse_str(json["id"].as_str().unwrap()).unwrap()
}
