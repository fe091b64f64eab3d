//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod invoices;
pub mod ledger;
pub mod parties;
pub mod products;
pub mod reports;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(parties::routes())
        .merge(products::routes())
        .merge(invoices::routes())
        .merge(ledger::routes())
        .merge(reports::routes())
}
