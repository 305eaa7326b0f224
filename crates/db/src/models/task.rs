//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasker_core::types::DbId;
use tasker_core::validation::RequiredFields;
use validator::Validate;

use crate::models::audit::Audit;

/// A task row from the `tasks` table. Always owned by one list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: Audit,
    pub title: String,
    pub done: bool,
    pub list_id: DbId,
}

/// DTO for creating a task. New tasks always start with `done = false`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTask {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub title: String,
}

impl RequiredFields for CreateTask {
    const REQUIRED: &'static [&'static str] = &["title"];
}

/// DTO for a full task update. An omitted `done` resets it to `false`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTask {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl RequiredFields for UpdateTask {
    const REQUIRED: &'static [&'static str] = &["title"];
}
