#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use tasker_api::config::ServerConfig;
use tasker_api::router::build_app_router;
use tasker_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// over the given pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

async fn send(app: Router, method: Method, uri: &str, body: Body, json: bool) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if json {
        builder = builder.header("content-type", "application/json");
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty(), false).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty(), false).await
}

pub async fn patch(app: Router, uri: &str) -> Response {
    send(app, Method::PATCH, uri, Body::empty(), false).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(body.to_string()), true).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Body::from(body.to_string()), true).await
}

/// POST an arbitrary (possibly malformed, empty or oversized) body.
pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> Response {
    send(app, Method::POST, uri, body.into(), true).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a project through the API and return its id.
pub async fn create_project(pool: &SqlitePool, title: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/projects",
        serde_json::json!({"title": title, "status": "not started"}),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a list under `project_id` and return its id.
pub async fn create_list(pool: &SqlitePool, project_id: i64, title: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/projects/{project_id}/lists"),
        serde_json::json!({"title": title}),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a task under `project_id`/`list_id` and return its id.
pub async fn create_task(pool: &SqlitePool, project_id: i64, list_id: i64, title: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/projects/{project_id}/lists/{list_id}/tasks"),
        serde_json::json!({"title": title}),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
