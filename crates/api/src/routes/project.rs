//! Route definitions for the `/projects` resource.
//!
//! Also nests lists under `/projects/{project_id}/lists` and tasks under
//! `/projects/{project_id}/lists/{list_id}/tasks`.
//!
//! Each level reuses the same parameter name so the router sees a single
//! capture per segment. Handlers read the ids positionally.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{list, project, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                                   -> list
/// POST   /                                                   -> create
/// GET    /{project_id}                                       -> get_by_id
/// PUT    /{project_id}                                       -> update
/// DELETE /{project_id}                                       -> delete
///
/// GET    /{project_id}/lists                                 -> list_by_project
/// POST   /{project_id}/lists                                 -> create
/// GET    /{project_id}/lists/{list_id}                       -> get_by_id
/// PUT    /{project_id}/lists/{list_id}                       -> update
/// DELETE /{project_id}/lists/{list_id}                       -> delete
///
/// GET    /{project_id}/lists/{list_id}/tasks                 -> list_by_list
/// POST   /{project_id}/lists/{list_id}/tasks                 -> create
/// GET    /{project_id}/lists/{list_id}/tasks/{task_id}       -> get_by_id
/// PUT    /{project_id}/lists/{list_id}/tasks/{task_id}       -> update
/// DELETE /{project_id}/lists/{list_id}/tasks/{task_id}       -> delete
/// PATCH  /{project_id}/lists/{list_id}/tasks/{task_id}/done  -> mark_done
/// PATCH  /{project_id}/lists/{list_id}/tasks/{task_id}/undone -> mark_undone
/// ```
pub fn router() -> Router<AppState> {
    let task_routes = Router::new()
        .route("/", get(task::list_by_list).post(task::create))
        .route(
            "/{task_id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
        .route("/{task_id}/done", patch(task::mark_done))
        .route("/{task_id}/undone", patch(task::mark_undone));

    let list_routes = Router::new()
        .route("/", get(list::list_by_project).post(list::create))
        .route(
            "/{list_id}",
            get(list::get_by_id).put(list::update).delete(list::delete),
        )
        .nest("/{list_id}/tasks", task_routes);

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{project_id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .nest("/{project_id}/lists", list_routes)
}
