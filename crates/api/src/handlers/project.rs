//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tasker_core::types::DbId;
use tasker_db::models::project::{CreateProject, Project, UpdateProject};
use tasker_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{PathIds, ValidatedJson};
use crate::response::Envelope;
use crate::state::AppState;

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Envelope<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(Envelope::collection(
        "Projects retrieved successfully",
        projects,
    )))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Envelope<Project>>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::entity("Project created successfully", project)),
    ))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathIds(id): PathIds<DbId>,
) -> AppResult<Json<Envelope<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(Envelope::entity("Project retrieved successfully", project)))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    PathIds(id): PathIds<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> AppResult<Json<Envelope<Project>>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(Envelope::entity("Project updated successfully", project)))
}

/// DELETE /api/v1/projects/{id}
///
/// Cascades to the project's lists and their tasks.
pub async fn delete(
    State(state): State<AppState>,
    PathIds(id): PathIds<DbId>,
) -> AppResult<Json<Envelope<Project>>> {
    if ProjectRepo::soft_delete(&state.pool, id).await? {
        Ok(Json(Envelope::absent("Project deleted successfully")))
    } else {
        Err(AppError::not_found("Project", id))
    }
}
