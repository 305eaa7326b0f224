pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                                   list, create
/// /projects/{project_id}                                      get, update, delete
/// /projects/{project_id}/lists                                list, create
/// /projects/{project_id}/lists/{list_id}                      get, update, delete
/// /projects/{project_id}/lists/{list_id}/tasks                list, create
/// /projects/{project_id}/lists/{list_id}/tasks/{task_id}      get, update, delete
/// /projects/{project_id}/lists/{list_id}/tasks/{task_id}/done     mark done (PATCH)
/// /projects/{project_id}/lists/{list_id}/tasks/{task_id}/undone   mark undone (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
