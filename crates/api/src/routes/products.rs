//! Product management routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, error::error_response};
use tally_db::repositories::{CreateProductInput, ProductRepository};
use tally_shared::types::ProductId;
use tally_shared::AppError;

/// Creates the product routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/{product_id}", get(get_product))
}

/// Request body for creating a product.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    /// Display name.
    pub name: String,
    /// Unit of measure ("pcs", "kg", ...).
    pub unit: String,
    /// VAT rate in percent.
    pub vat_rate: Decimal,
    /// Optional category (defaults to "General").
    pub category: Option<String>,
}

/// GET `/products` - List all products.
async fn list_products(State(state): State<AppState>) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    match repo.list_products().await {
        Ok(products) => (StatusCode::OK, Json(json!({ "products": products }))).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST `/products` - Create a new product.
async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> impl IntoResponse {
    if payload.name.trim().is_empty() || payload.unit.trim().is_empty() {
        return error_response(AppError::Validation(
            "Product name and unit must not be empty".to_string(),
        ));
    }
    if payload.vat_rate < Decimal::ZERO {
        return error_response(AppError::Validation(
            "VAT rate must not be negative".to_string(),
        ));
    }

    let repo = ProductRepository::new((*state.db).clone());
    let input = CreateProductInput {
        name: payload.name,
        unit: payload.unit,
        vat_rate: payload.vat_rate,
        category: payload.category,
    };

    match repo.create_product(input).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET `/products/{product_id}` - Get a product by ID.
async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> impl IntoResponse {
    let repo = ProductRepository::new((*state.db).clone());

    match repo.find_by_id(product_id.into_inner()).await {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => error_response(e),
    }
}
