//! Product repository for inventory database operations.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::products;

/// Error types for product operations.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// Product not found.
    #[error("Product not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ProductError> for tally_shared::AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => Self::NotFound(format!("product {id}")),
            ProductError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a product.
#[derive(Debug, Clone)]
pub struct CreateProductInput {
    /// Display name.
    pub name: String,
    /// Unit of measure ("pcs", "kg", ...).
    pub unit: String,
    /// VAT rate in percent.
    pub vat_rate: Decimal,
    /// Product category.
    pub category: Option<String>,
}

/// Product repository for CRUD operations and stock adjustments.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: DatabaseConnection,
}

impl ProductRepository {
    /// Creates a new product repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new product with a generated display code.
    ///
    /// New products start with zero price and stock; the price is set by
    /// the first purchase invoice.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create_product(
        &self,
        input: CreateProductInput,
    ) -> Result<products::Model, ProductError> {
        let count = products::Entity::find().count(&self.db).await?;
        let code = format!("PRD{:04}", count + 1);
        let now = Utc::now().into();

        let product = products::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(code),
            name: Set(input.name),
            unit: Set(input.unit),
            category: Set(input.category.unwrap_or_else(|| "General".to_string())),
            price: Set(Decimal::ZERO),
            vat_rate: Set(input.vat_rate),
            quantity: Set(Decimal::ZERO),
            min_quantity: Set(Decimal::ZERO),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(product.insert(&self.db).await?)
    }

    /// Lists all products, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_products(&self) -> Result<Vec<products::Model>, ProductError> {
        let products = products::Entity::find()
            .order_by_desc(products::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(products)
    }

    /// Gets a product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the query fails.
    pub async fn find_by_id(&self, product_id: Uuid) -> Result<products::Model, ProductError> {
        products::Entity::find_by_id(product_id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::NotFound(product_id))
    }
}

/// Adjusts a product's stock by a signed quantity delta as an atomic SQL
/// increment, optionally recording a new latest cost.
///
/// Runs on the caller's transaction; invoice creation uses it so stock
/// moves commit or roll back with the invoice rows. Returns the number of
/// affected rows; zero means the product does not exist.
pub(crate) async fn adjust_stock<C: ConnectionTrait>(
    conn: &C,
    product_id: Uuid,
    quantity_delta: Decimal,
    new_price: Option<Decimal>,
) -> Result<u64, DbErr> {
    let mut update = products::Entity::update_many()
        .col_expr(
            products::Column::Quantity,
            Expr::col(products::Column::Quantity).add(quantity_delta),
        )
        .filter(products::Column::Id.eq(product_id));

    if let Some(price) = new_price {
        update = update.col_expr(products::Column::Price, Expr::value(price));
    }

    let result = update.exec(conn).await?;
    Ok(result.rows_affected)
}
