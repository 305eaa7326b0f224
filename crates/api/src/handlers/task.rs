//! Handlers for the `/tasks` resource.
//!
//! Tasks are nested under lists:
//! `/projects/{project_id}/lists/{list_id}/tasks[/{task_id}]`

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tasker_core::types::DbId;
use tasker_db::models::task::{CreateTask, Task, UpdateTask};
use tasker_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{PathIds, ValidatedJson};
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/lists/{list_id}/tasks
pub async fn list_by_list(
    State(state): State<AppState>,
    PathIds((project_id, list_id)): PathIds<(DbId, DbId)>,
) -> AppResult<Json<Envelope<Task>>> {
    let tasks = TaskRepo::list_by_list(&state.pool, project_id, list_id)
        .await?
        .ok_or(AppError::not_found("List", list_id))?;
    Ok(Json(Envelope::collection("Tasks retrieved successfully", tasks)))
}

/// POST /api/v1/projects/{project_id}/lists/{list_id}/tasks
pub async fn create(
    State(state): State<AppState>,
    PathIds((project_id, list_id)): PathIds<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Envelope<Task>>)> {
    let task = TaskRepo::create(&state.pool, project_id, list_id, &input)
        .await?
        .ok_or(AppError::not_found("List", list_id))?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::entity("Task created successfully", task)),
    ))
}

/// GET /api/v1/projects/{project_id}/lists/{list_id}/tasks/{task_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathIds((project_id, list_id, task_id)): PathIds<(DbId, DbId, DbId)>,
) -> AppResult<Json<Envelope<Task>>> {
    let task = TaskRepo::find_in_list(&state.pool, project_id, list_id, task_id)
        .await?
        .ok_or(AppError::not_found("Task", task_id))?;
    Ok(Json(Envelope::entity("Task retrieved successfully", task)))
}

/// PUT /api/v1/projects/{project_id}/lists/{list_id}/tasks/{task_id}
pub async fn update(
    State(state): State<AppState>,
    PathIds((project_id, list_id, task_id)): PathIds<(DbId, DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> AppResult<Json<Envelope<Task>>> {
    let task = TaskRepo::update(&state.pool, project_id, list_id, task_id, &input)
        .await?
        .ok_or(AppError::not_found("Task", task_id))?;
    Ok(Json(Envelope::entity("Task updated successfully", task)))
}

/// PATCH /api/v1/projects/{project_id}/lists/{list_id}/tasks/{task_id}/done
pub async fn mark_done(
    State(state): State<AppState>,
    PathIds(ids): PathIds<(DbId, DbId, DbId)>,
) -> AppResult<Json<Envelope<Task>>> {
    let task = set_done(&state, ids, true).await?;
    Ok(Json(Envelope::entity("Task marked as done successfully", task)))
}

/// PATCH /api/v1/projects/{project_id}/lists/{list_id}/tasks/{task_id}/undone
pub async fn mark_undone(
    State(state): State<AppState>,
    PathIds(ids): PathIds<(DbId, DbId, DbId)>,
) -> AppResult<Json<Envelope<Task>>> {
    let task = set_done(&state, ids, false).await?;
    Ok(Json(Envelope::entity(
        "Task marked as undone successfully",
        task,
    )))
}

/// DELETE /api/v1/projects/{project_id}/lists/{list_id}/tasks/{task_id}
pub async fn delete(
    State(state): State<AppState>,
    PathIds((project_id, list_id, task_id)): PathIds<(DbId, DbId, DbId)>,
) -> AppResult<Json<Envelope<Task>>> {
    if TaskRepo::soft_delete(&state.pool, project_id, list_id, task_id).await? {
        Ok(Json(Envelope::absent("Task deleted successfully")))
    } else {
        Err(AppError::not_found("Task", task_id))
    }
}

async fn set_done(
    state: &AppState,
    (project_id, list_id, task_id): (DbId, DbId, DbId),
    done: bool,
) -> AppResult<Task> {
    TaskRepo::set_done(&state.pool, project_id, list_id, task_id, done)
        .await?
        .ok_or(AppError::not_found("Task", task_id))
}
