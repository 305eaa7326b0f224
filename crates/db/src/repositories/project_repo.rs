//! Repository for the `projects` table.

use chrono::Utc;
use sqlx::SqlitePool;
use tasker_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, status, created_at, updated_at, deleted_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, status, created_at, updated_at)
             VALUES ($1, $2, $3, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.status)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a live (not soft-deleted) project with this ID exists.
    pub async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM projects WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(count > 0)
    }

    /// List all projects in creation order. Excludes soft-deleted rows.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects WHERE deleted_at IS NULL ORDER BY id ASC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Replace a project's title and status.
    ///
    /// Returns `None` if no live row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = $2,
                status = $3,
                updated_at = $4
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.status)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a project together with its lists and their tasks.
    ///
    /// All three updates run in one transaction. Returns `true` if the
    /// project was marked deleted.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let now = Utc::now();
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE projects SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(id)
        .execute(&mut *tx)
        .await?;
        if result.rows_affected() == 0 {
            return Ok(false);
        }

        let tasks = sqlx::query(
            "UPDATE tasks SET deleted_at = $1
             WHERE deleted_at IS NULL
               AND list_id IN (
                   SELECT id FROM lists WHERE project_id = $2 AND deleted_at IS NULL
               )",
        )
        .bind(now)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let lists = sqlx::query(
            "UPDATE lists SET deleted_at = $1 WHERE project_id = $2 AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        tracing::info!(project_id = id, lists, tasks, "Project soft-deleted");
        Ok(true)
    }
}
