//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasker_core::validation::RequiredFields;
use validator::Validate;

use crate::models::audit::Audit;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: Audit,
    pub title: String,
    pub status: String,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateProject {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub status: String,
}

impl RequiredFields for CreateProject {
    const REQUIRED: &'static [&'static str] = &["title", "status"];
}

/// DTO for updating a project. Both fields are replaced.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub status: String,
}

impl RequiredFields for UpdateProject {
    const REQUIRED: &'static [&'static str] = &["title", "status"];
}
