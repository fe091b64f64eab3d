//! Invoice management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{AppState, error::error_response};
use tally_core::invoice::{CreateInvoiceInput, InvoiceDirection, LineItemInput};
use tally_db::repositories::InvoiceRepository;
use tally_shared::types::InvoiceId;

/// Creates the invoice routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route("/invoices/{invoice_id}", get(get_invoice))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for a single invoice line item.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    /// Product ID.
    pub product_id: Uuid,
    /// Quantity (positive).
    pub quantity: Decimal,
    /// Unit price (positive).
    pub unit_price: Decimal,
    /// VAT rate in percent.
    pub vat_rate: Decimal,
    /// Discount in percent (0..=100).
    #[serde(default)]
    pub discount: Decimal,
}

/// Request body for creating an invoice.
#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    /// "sale" or "purchase".
    pub direction: InvoiceDirection,
    /// Globally unique invoice number.
    pub number: String,
    /// Business date (YYYY-MM-DD).
    pub date: NaiveDate,
    /// The invoiced party.
    pub party_id: Uuid,
    /// Line items.
    pub items: Vec<CreateItemRequest>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/invoices` - List invoices.
async fn list_invoices(State(state): State<AppState>) -> impl IntoResponse {
    let repo = InvoiceRepository::new((*state.db).clone());

    match repo.list_invoices().await {
        Ok(invoices) => (StatusCode::OK, Json(json!({ "invoices": invoices }))).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST `/invoices` - Create an invoice with its balance and stock effects.
async fn create_invoice(
    State(state): State<AppState>,
    Json(payload): Json<CreateInvoiceRequest>,
) -> impl IntoResponse {
    let repo = InvoiceRepository::new((*state.db).clone());

    let input = CreateInvoiceInput {
        direction: payload.direction,
        number: payload.number,
        date: payload.date,
        party_id: payload.party_id,
        items: payload
            .items
            .into_iter()
            .map(|item| LineItemInput {
                product_id: item.product_id,
                quantity: item.quantity,
                unit_price: item.unit_price,
                vat_rate: item.vat_rate,
                discount: item.discount,
            })
            .collect(),
    };

    match repo.create_invoice(input).await {
        Ok(created) => {
            info!(
                invoice = %created.invoice.number,
                total = %created.invoice.total,
                "Invoice created"
            );
            (
                StatusCode::CREATED,
                Json(json!({
                    "invoice": created.invoice,
                    "items": created.items
                })),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

/// GET `/invoices/{invoice_id}` - Get an invoice with its items.
async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<InvoiceId>,
) -> impl IntoResponse {
    let repo = InvoiceRepository::new((*state.db).clone());

    match repo.find_by_id(invoice_id.into_inner()).await {
        Ok(found) => (
            StatusCode::OK,
            Json(json!({
                "invoice": found.invoice,
                "items": found.items
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
