//! HTTP-level integration tests for `/projects/{project_id}/lists`.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_lists_of_empty_project(pool: SqlitePool) {
    let project_id = common::create_project(&pool, "P").await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{project_id}/lists"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Lists retrieved successfully", "data": []})
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_lists_of_missing_project(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/api/v1/projects/999/lists").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "record not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_list_returns_201(pool: SqlitePool) {
    let project_id = common::create_project(&pool, "P").await;

    let response = post_json(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{project_id}/lists"),
        json!({"title": "Backlog"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "List created successfully");
    assert_eq!(json["data"]["title"], "Backlog");
    assert_eq!(json["data"]["project_id"], project_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_list_under_missing_project(pool: SqlitePool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/projects/999/lists",
        json!({"title": "Orphan"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "record not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_list_round_trips_fields(pool: SqlitePool) {
    let project_id = common::create_project(&pool, "P").await;
    let created = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/projects/{project_id}/lists"),
            json!({"title": "Doing"}),
        )
        .await,
    )
    .await;
    let list_id = created["data"]["id"].as_i64().unwrap();

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{project_id}/lists/{list_id}"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "List retrieved successfully");
    assert_eq!(json["data"], created["data"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_through_wrong_project_is_not_found(pool: SqlitePool) {
    let owner = common::create_project(&pool, "Owner").await;
    let other = common::create_project(&pool, "Other").await;
    let list_id = common::create_list(&pool, owner, "Mine").await;
    let uri = format!("/api/v1/projects/{other}/lists/{list_id}");

    let got = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(got.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(got).await["error"], "record not found");

    let put = put_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({"title": "Hijacked"}),
    )
    .await;
    assert_eq!(put.status(), StatusCode::BAD_REQUEST);

    let del = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(del.status(), StatusCode::BAD_REQUEST);

    let untouched = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/projects/{owner}/lists/{list_id}"),
        )
        .await,
    )
    .await;
    assert_eq!(untouched["data"]["title"], "Mine");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_list(pool: SqlitePool) {
    let project_id = common::create_project(&pool, "P").await;
    let list_id = common::create_list(&pool, project_id, "Old").await;

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{project_id}/lists/{list_id}"),
        json!({"title": "New"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "List updated successfully");
    assert_eq!(json["data"]["title"], "New");
    assert_eq!(json["data"]["project_id"], project_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_list_cascades_to_tasks(pool: SqlitePool) {
    let project_id = common::create_project(&pool, "P").await;
    let list_id = common::create_list(&pool, project_id, "L").await;
    let task_id = common::create_task(&pool, project_id, list_id, "T").await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{project_id}/lists/{list_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "List deleted successfully", "data": []})
    );

    let task = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{project_id}/lists/{list_id}/tasks/{task_id}"),
    )
    .await;
    assert_eq!(task.status(), StatusCode::BAD_REQUEST);

    let lists = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/projects/{project_id}/lists"),
        )
        .await,
    )
    .await;
    assert_eq!(lists["data"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_project_hides_its_lists(pool: SqlitePool) {
    let project_id = common::create_project(&pool, "P").await;
    let list_id = common::create_list(&pool, project_id, "L").await;

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{project_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let got = get(
        common::build_test_app(pool),
        &format!("/api/v1/projects/{project_id}/lists/{list_id}"),
    )
    .await;
    assert_eq!(got.status(), StatusCode::BAD_REQUEST);
}
