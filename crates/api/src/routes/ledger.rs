//! Cash/bank ledger routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{AppState, error::error_response};
use tally_core::ledger::{CreateEntryInput, EntryDirection, PaymentMethod};
use tally_db::repositories::LedgerEntryRepository;

/// Creates the ledger routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/ledger", get(list_entries).post(create_entry))
}

/// Request body for creating a ledger entry.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    /// Business date (YYYY-MM-DD).
    pub date: NaiveDate,
    /// "income" or "expense".
    pub direction: EntryDirection,
    /// Free-text category.
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Positive amount.
    pub amount: Decimal,
    /// Settlement method, required for income entries.
    pub payment_method: Option<PaymentMethod>,
    /// Optional linked party.
    pub party_id: Option<Uuid>,
}

/// GET `/ledger` - List ledger entries.
async fn list_entries(State(state): State<AppState>) -> impl IntoResponse {
    let repo = LedgerEntryRepository::new((*state.db).clone());

    match repo.list_entries().await {
        Ok(entries) => (StatusCode::OK, Json(json!({ "entries": entries }))).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST `/ledger` - Create a ledger entry, updating the linked party's
/// balance when one is referenced.
async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<CreateEntryRequest>,
) -> impl IntoResponse {
    let repo = LedgerEntryRepository::new((*state.db).clone());

    let input = CreateEntryInput {
        date: payload.date,
        direction: payload.direction,
        category: payload.category,
        description: payload.description,
        amount: payload.amount,
        payment_method: payload.payment_method,
        party_id: payload.party_id,
    };

    match repo.create_entry(input).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(e) => error_response(e),
    }
}
