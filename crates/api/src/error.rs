//! Error rendering for API responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use tally_shared::AppError;

/// Renders a repository error as a JSON error envelope.
///
/// Repository errors convert into [`AppError`] at the operation boundary;
/// the envelope carries the error code so callers can distinguish kinds.
/// Server-side failures are logged and reported with a generic message.
pub(crate) fn error_response(err: impl Into<AppError>) -> Response {
    let err = err.into();
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let message = if status.is_server_error() {
        error!(error = %err, "Request failed");
        "An error occurred".to_string()
    } else {
        err.to_string()
    };

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": message
        })),
    )
        .into_response()
}
