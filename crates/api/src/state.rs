/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cloning is cheap: the pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, constructed once at startup.
    pub pool: tasker_db::DbPool,
}
