//! Repository for the `lists` table.
//!
//! Every query is scoped by `project_id`, and a list whose project has been
//! soft-deleted is treated as absent.

use chrono::Utc;
use sqlx::SqlitePool;
use tasker_core::types::DbId;

use crate::models::list::{CreateList, List, UpdateList};
use crate::repositories::ProjectRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, project_id, created_at, updated_at, deleted_at";

/// [`COLUMNS`] qualified with the `l` alias, for joined queries.
const QUALIFIED_COLUMNS: &str =
    "l.id, l.title, l.project_id, l.created_at, l.updated_at, l.deleted_at";

/// Provides project-scoped CRUD operations for lists.
pub struct ListRepo;

impl ListRepo {
    /// Insert a new list under `project_id`.
    ///
    /// Returns `None` (and inserts nothing) if the project does not exist or
    /// has been soft-deleted.
    pub async fn create(
        pool: &SqlitePool,
        project_id: DbId,
        input: &CreateList,
    ) -> Result<Option<List>, sqlx::Error> {
        let query = format!(
            "INSERT INTO lists (title, project_id, created_at, updated_at)
             SELECT $1, p.id, $3, $3 FROM projects p
             WHERE p.id = $2 AND p.deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, List>(&query)
            .bind(&input.title)
            .bind(project_id)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Find a list by ID, only if it belongs to `project_id`.
    pub async fn find_in_project(
        pool: &SqlitePool,
        project_id: DbId,
        list_id: DbId,
    ) -> Result<Option<List>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM lists l
             JOIN projects p ON p.id = l.project_id
             WHERE l.id = $1 AND l.project_id = $2
               AND l.deleted_at IS NULL AND p.deleted_at IS NULL"
        );
        sqlx::query_as::<_, List>(&query)
            .bind(list_id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether `list_id` resolves under `project_id`.
    pub async fn exists_in_project(
        pool: &SqlitePool,
        project_id: DbId,
        list_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM lists l
             JOIN projects p ON p.id = l.project_id
             WHERE l.id = $1 AND l.project_id = $2
               AND l.deleted_at IS NULL AND p.deleted_at IS NULL",
        )
        .bind(list_id)
        .bind(project_id)
        .fetch_one(pool)
        .await?;
        Ok(count > 0)
    }

    /// List all lists of a project in creation order.
    ///
    /// Returns `None` if the project itself does not resolve.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Option<Vec<List>>, sqlx::Error> {
        if !ProjectRepo::exists(pool, project_id).await? {
            return Ok(None);
        }

        let query = format!(
            "SELECT {COLUMNS} FROM lists
             WHERE project_id = $1 AND deleted_at IS NULL
             ORDER BY id ASC"
        );
        let lists = sqlx::query_as::<_, List>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await?;
        Ok(Some(lists))
    }

    /// Replace a list's title.
    ///
    /// Returns `None` if the list does not resolve under `project_id`.
    pub async fn update(
        pool: &SqlitePool,
        project_id: DbId,
        list_id: DbId,
        input: &UpdateList,
    ) -> Result<Option<List>, sqlx::Error> {
        let query = format!(
            "UPDATE lists SET
                title = $3,
                updated_at = $4
             WHERE id = $1 AND project_id = $2 AND deleted_at IS NULL
               AND EXISTS (
                   SELECT 1 FROM projects p
                   WHERE p.id = lists.project_id AND p.deleted_at IS NULL
               )
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, List>(&query)
            .bind(list_id)
            .bind(project_id)
            .bind(&input.title)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a list together with its tasks, in one transaction.
    ///
    /// Returns `true` if the list resolved under `project_id` and was marked
    /// deleted.
    pub async fn soft_delete(
        pool: &SqlitePool,
        project_id: DbId,
        list_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let now = Utc::now();
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "UPDATE lists SET deleted_at = $1
             WHERE id = $2 AND project_id = $3 AND deleted_at IS NULL
               AND EXISTS (
                   SELECT 1 FROM projects p
                   WHERE p.id = lists.project_id AND p.deleted_at IS NULL
               )",
        )
        .bind(now)
        .bind(list_id)
        .bind(project_id)
        .execute(&mut *tx)
        .await?;
        if result.rows_affected() == 0 {
            return Ok(false);
        }

        let tasks = sqlx::query(
            "UPDATE tasks SET deleted_at = $1 WHERE list_id = $2 AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(list_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        tracing::info!(project_id, list_id, tasks, "List soft-deleted");
        Ok(true)
    }
}
