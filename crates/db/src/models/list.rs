//! List entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasker_core::types::DbId;
use tasker_core::validation::RequiredFields;
use validator::Validate;

use crate::models::audit::Audit;

/// A list row from the `lists` table. Always owned by one project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct List {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audit: Audit,
    pub title: String,
    pub project_id: DbId,
}

/// DTO for creating a list. The owning project comes from the URL path.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateList {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub title: String,
}

impl RequiredFields for CreateList {
    const REQUIRED: &'static [&'static str] = &["title"];
}

/// DTO for updating a list.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateList {
    #[serde(default)]
    #[validate(length(min = 1, code = "required"))]
    pub title: String,
}

impl RequiredFields for UpdateList {
    const REQUIRED: &'static [&'static str] = &["title"];
}
