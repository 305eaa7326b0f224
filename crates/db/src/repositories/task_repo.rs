//! Repository for the `tasks` table.
//!
//! Every operation takes the full `project_id -> list_id -> task_id` chain
//! and only acts when each link matches exactly and no ancestor has been
//! soft-deleted.

use chrono::Utc;
use sqlx::SqlitePool;
use tasker_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::repositories::ListRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, done, list_id, created_at, updated_at, deleted_at";

/// [`COLUMNS`] qualified with the `t` alias, for joined queries.
const QUALIFIED_COLUMNS: &str =
    "t.id, t.title, t.done, t.list_id, t.created_at, t.updated_at, t.deleted_at";

/// Predicate on `tasks` requiring its list to be live and owned by the
/// project. Queries using it bind `project_id` as `$1`.
const CHAIN_PREDICATE: &str = "EXISTS (
        SELECT 1 FROM lists l
        JOIN projects p ON p.id = l.project_id
        WHERE l.id = tasks.list_id AND l.project_id = $1
          AND l.deleted_at IS NULL AND p.deleted_at IS NULL
    )";

/// Provides chain-scoped CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task under `list_id`, which must belong to `project_id`.
    ///
    /// New tasks start with `done = false`. Returns `None` (and inserts
    /// nothing) if the chain does not resolve.
    pub async fn create(
        pool: &SqlitePool,
        project_id: DbId,
        list_id: DbId,
        input: &CreateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (title, done, list_id, created_at, updated_at)
             SELECT $1, FALSE, l.id, $4, $4 FROM lists l
             JOIN projects p ON p.id = l.project_id
             WHERE l.id = $2 AND l.project_id = $3
               AND l.deleted_at IS NULL AND p.deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(list_id)
            .bind(project_id)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Find a task through its full ancestor chain.
    pub async fn find_in_list(
        pool: &SqlitePool,
        project_id: DbId,
        list_id: DbId,
        task_id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM tasks t
             JOIN lists l ON l.id = t.list_id
             JOIN projects p ON p.id = l.project_id
             WHERE t.id = $1 AND t.list_id = $2 AND l.project_id = $3
               AND t.deleted_at IS NULL AND l.deleted_at IS NULL AND p.deleted_at IS NULL"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(task_id)
            .bind(list_id)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// List the tasks of a list in creation order.
    ///
    /// Returns `None` if the list does not resolve under `project_id`.
    pub async fn list_by_list(
        pool: &SqlitePool,
        project_id: DbId,
        list_id: DbId,
    ) -> Result<Option<Vec<Task>>, sqlx::Error> {
        if !ListRepo::exists_in_project(pool, project_id, list_id).await? {
            return Ok(None);
        }

        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE list_id = $1 AND deleted_at IS NULL
             ORDER BY id ASC"
        );
        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(list_id)
            .fetch_all(pool)
            .await?;
        Ok(Some(tasks))
    }

    /// Replace a task's title and done flag.
    ///
    /// Returns `None` if the chain does not resolve.
    pub async fn update(
        pool: &SqlitePool,
        project_id: DbId,
        list_id: DbId,
        task_id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = $4,
                done = $5,
                updated_at = $6
             WHERE id = $3 AND list_id = $2 AND deleted_at IS NULL
               AND {CHAIN_PREDICATE}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(list_id)
            .bind(task_id)
            .bind(&input.title)
            .bind(input.done)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Set only the done flag, leaving title and ownership untouched.
    ///
    /// Returns `None` if the chain does not resolve.
    pub async fn set_done(
        pool: &SqlitePool,
        project_id: DbId,
        list_id: DbId,
        task_id: DbId,
        done: bool,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                done = $4,
                updated_at = $5
             WHERE id = $3 AND list_id = $2 AND deleted_at IS NULL
               AND {CHAIN_PREDICATE}
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(list_id)
            .bind(task_id)
            .bind(done)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a task. Returns `true` if the chain resolved and the task
    /// was marked deleted.
    pub async fn soft_delete(
        pool: &SqlitePool,
        project_id: DbId,
        list_id: DbId,
        task_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET deleted_at = $4
             WHERE id = $3 AND list_id = $2 AND deleted_at IS NULL
               AND {CHAIN_PREDICATE}"
        );
        let result = sqlx::query(&query)
            .bind(project_id)
            .bind(list_id)
            .bind(task_id)
            .bind(Utc::now())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
