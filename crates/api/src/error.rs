use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tasker_core::error::CoreError;

/// Client-facing text for any lookup that fails to resolve.
pub const NOT_FOUND_MESSAGE: &str = "record not found";

/// Client-facing text paired with every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred. \
     Please try again later or contact support if the problem persists.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent `{"error": ...}` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tasker_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An axum extractor rejection, keeping the status axum chose for it
    /// (e.g. 413 for an oversized body).
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for an unresolved entity or ancestor chain.
    pub fn not_found(entity: &'static str, id: tasker_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Lookup did not resolve");
                    (StatusCode::BAD_REQUEST, NOT_FOUND_MESSAGE.to_string())
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            // --- Database errors ---
            AppError::Database(sqlx::Error::RowNotFound) => {
                (StatusCode::BAD_REQUEST, NOT_FOUND_MESSAGE.to_string())
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                return internal_error_response();
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Rejected { status, message } if status.is_server_error() => {
                tracing::error!(%status, error = %message, "Request rejected by extractor");
                return internal_error_response();
            }
            AppError::Rejected { status, message } => (*status, message.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                return internal_error_response();
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

/// The masked 500 body. Internal detail is logged, never returned.
fn internal_error_response() -> Response {
    let body = json!({
        "error": "Internal Server Error",
        "message": INTERNAL_ERROR_MESSAGE,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}
