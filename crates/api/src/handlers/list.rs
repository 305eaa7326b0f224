//! Handlers for the `/lists` resource.
//!
//! Lists are nested under projects:
//! `/projects/{project_id}/lists[/{list_id}]`
//!
//! A list reached through a project that does not own it is reported exactly
//! like a list that does not exist.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tasker_core::types::DbId;
use tasker_db::models::list::{CreateList, List, UpdateList};
use tasker_db::repositories::ListRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{PathIds, ValidatedJson};
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/v1/projects/{project_id}/lists
pub async fn list_by_project(
    State(state): State<AppState>,
    PathIds(project_id): PathIds<DbId>,
) -> AppResult<Json<Envelope<List>>> {
    let lists = ListRepo::list_by_project(&state.pool, project_id)
        .await?
        .ok_or(AppError::not_found("Project", project_id))?;
    Ok(Json(Envelope::collection("Lists retrieved successfully", lists)))
}

/// POST /api/v1/projects/{project_id}/lists
pub async fn create(
    State(state): State<AppState>,
    PathIds(project_id): PathIds<DbId>,
    ValidatedJson(input): ValidatedJson<CreateList>,
) -> AppResult<(StatusCode, Json<Envelope<List>>)> {
    let list = ListRepo::create(&state.pool, project_id, &input)
        .await?
        .ok_or(AppError::not_found("Project", project_id))?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::entity("List created successfully", list)),
    ))
}

/// GET /api/v1/projects/{project_id}/lists/{list_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathIds((project_id, list_id)): PathIds<(DbId, DbId)>,
) -> AppResult<Json<Envelope<List>>> {
    let list = ListRepo::find_in_project(&state.pool, project_id, list_id)
        .await?
        .ok_or(AppError::not_found("List", list_id))?;
    Ok(Json(Envelope::entity("List retrieved successfully", list)))
}

/// PUT /api/v1/projects/{project_id}/lists/{list_id}
pub async fn update(
    State(state): State<AppState>,
    PathIds((project_id, list_id)): PathIds<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<UpdateList>,
) -> AppResult<Json<Envelope<List>>> {
    let list = ListRepo::update(&state.pool, project_id, list_id, &input)
        .await?
        .ok_or(AppError::not_found("List", list_id))?;
    Ok(Json(Envelope::entity("List updated successfully", list)))
}

/// DELETE /api/v1/projects/{project_id}/lists/{list_id}
///
/// Cascades to the list's tasks.
pub async fn delete(
    State(state): State<AppState>,
    PathIds((project_id, list_id)): PathIds<(DbId, DbId)>,
) -> AppResult<Json<Envelope<List>>> {
    if ListRepo::soft_delete(&state.pool, project_id, list_id).await? {
        Ok(Json(Envelope::absent("List deleted successfully")))
    } else {
        Err(AppError::not_found("List", list_id))
    }
}
