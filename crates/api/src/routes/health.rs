//! Liveness probe, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Health {
    Ok,
    /// The process is up but the database did not answer.
    Degraded,
}

#[derive(Debug, Serialize)]
struct HealthReport {
    status: Health,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health
///
/// Always 200; a failing database shows up as `"status": "degraded"`.
async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = match tasker_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            false
        }
    };

    Json(HealthReport {
        status: if db_healthy { Health::Ok } else { Health::Degraded },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
