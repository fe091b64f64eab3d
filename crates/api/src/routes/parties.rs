//! Party management routes: customers and suppliers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{AppState, error::error_response};
use tally_core::statement::StatementLine;
use tally_db::entities::sea_orm_active_enums::PartyKind;
use tally_db::repositories::{
    CreatePartyInput, PartyRepository, StatementRepository,
};
use tally_shared::types::PartyId;

/// Creates the party routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/parties", get(list_parties).post(create_party))
        .route("/parties/{party_id}", get(get_party))
        .route("/parties/{party_id}/statement", get(get_statement))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a party.
#[derive(Debug, Deserialize)]
pub struct CreatePartyRequest {
    /// Display name.
    pub name: String,
    /// "customer" or "supplier".
    pub kind: PartyKind,
    /// Tax identification number.
    pub tax_number: String,
    /// Contact phone.
    pub phone: String,
    /// Optional contact email.
    pub email: Option<String>,
    /// Optional postal address.
    pub address: Option<String>,
}

/// Query parameters for the statement endpoint.
#[derive(Debug, Deserialize)]
pub struct StatementQuery {
    /// Restrict lines to business dates on or after this day.
    pub from: Option<NaiveDate>,
    /// Restrict lines to business dates on or before this day.
    pub to: Option<NaiveDate>,
}

/// Party header in a statement response.
#[derive(Debug, Serialize)]
pub struct PartyHeader {
    /// Display code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Customer or supplier.
    pub kind: PartyKind,
    /// Tax identification number.
    pub tax_number: String,
    /// Contact phone.
    pub phone: String,
    /// Stored running balance.
    pub balance: Decimal,
}

/// Response for the statement endpoint.
#[derive(Debug, Serialize)]
pub struct StatementResponse {
    /// The party the statement belongs to.
    pub party: PartyHeader,
    /// Statement lines in creation order with running balances.
    pub transactions: Vec<StatementLine>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/parties` - List all parties.
async fn list_parties(State(state): State<AppState>) -> impl IntoResponse {
    let repo = PartyRepository::new((*state.db).clone());

    match repo.list_parties().await {
        Ok(parties) => (StatusCode::OK, Json(json!({ "parties": parties }))).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST `/parties` - Create a new party.
async fn create_party(
    State(state): State<AppState>,
    Json(payload): Json<CreatePartyRequest>,
) -> impl IntoResponse {
    if payload.name.trim().is_empty() {
        return error_response(tally_shared::AppError::Validation(
            "Party name must not be empty".to_string(),
        ));
    }

    let repo = PartyRepository::new((*state.db).clone());
    let input = CreatePartyInput {
        name: payload.name,
        kind: payload.kind,
        tax_number: payload.tax_number,
        phone: payload.phone,
        email: payload.email,
        address: payload.address,
    };

    match repo.create_party(input).await {
        Ok(party) => (StatusCode::CREATED, Json(party)).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET `/parties/{party_id}` - Get a party by ID.
async fn get_party(
    State(state): State<AppState>,
    Path(party_id): Path<PartyId>,
) -> impl IntoResponse {
    let repo = PartyRepository::new((*state.db).clone());

    match repo.find_by_id(party_id.into_inner()).await {
        Ok(party) => (StatusCode::OK, Json(party)).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET `/parties/{party_id}/statement` - Party statement with running balances.
async fn get_statement(
    State(state): State<AppState>,
    Path(party_id): Path<PartyId>,
    Query(query): Query<StatementQuery>,
) -> impl IntoResponse {
    let repo = StatementRepository::new((*state.db).clone());

    match repo
        .build_statement(party_id.into_inner(), query.from, query.to)
        .await
    {
        Ok(statement) => {
            let response = StatementResponse {
                party: PartyHeader {
                    code: statement.party.code,
                    name: statement.party.name,
                    kind: statement.party.kind,
                    tax_number: statement.party.tax_number,
                    phone: statement.party.phone,
                    balance: statement.party.balance,
                },
                transactions: statement.lines,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}
