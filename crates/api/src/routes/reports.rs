//! Summary report routes.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use chrono::Utc;

use crate::{AppState, error::error_response};
use tally_db::repositories::ReportRepository;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports/summary", get(summary))
}

/// GET `/reports/summary` - Six-month income/expense summary.
async fn summary(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ReportRepository::new((*state.db).clone());
    let today = Utc::now().date_naive();

    match repo.build_summary(today).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => error_response(e),
    }
}
