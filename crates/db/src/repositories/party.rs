//! Party repository for customer/supplier database operations.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{parties, sea_orm_active_enums::PartyKind};

/// Error types for party operations.
#[derive(Debug, thiserror::Error)]
pub enum PartyError {
    /// Party not found.
    #[error("Party not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<PartyError> for tally_shared::AppError {
    fn from(err: PartyError) -> Self {
        match err {
            PartyError::NotFound(id) => Self::NotFound(format!("party {id}")),
            PartyError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a party.
#[derive(Debug, Clone)]
pub struct CreatePartyInput {
    /// Display name.
    pub name: String,
    /// Customer or supplier.
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

/// Party repository for CRUD operations and balance updates.
#[derive(Debug, Clone)]
pub struct PartyRepository {
    db: DatabaseConnection,
}

impl PartyRepository {
    /// Creates a new party repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new party with a generated display code and zero balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create_party(&self, input: CreatePartyInput) -> Result<parties::Model, PartyError> {
        let count = parties::Entity::find().count(&self.db).await?;
        let code = format!("CUS{:04}", count + 1);
        let now = Utc::now().into();

        let party = parties::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(code),
            name: Set(input.name),
            kind: Set(input.kind),
            tax_number: Set(input.tax_number),
            phone: Set(input.phone),
            email: Set(input.email),
            address: Set(input.address),
            balance: Set(Decimal::ZERO),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(party.insert(&self.db).await?)
    }

    /// Lists all parties, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_parties(&self) -> Result<Vec<parties::Model>, PartyError> {
        let parties = parties::Entity::find()
            .order_by_desc(parties::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(parties)
    }

    /// Gets a party by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the party is not found or the query fails.
    pub async fn find_by_id(&self, party_id: Uuid) -> Result<parties::Model, PartyError> {
        parties::Entity::find_by_id(party_id)
            .one(&self.db)
            .await?
            .ok_or(PartyError::NotFound(party_id))
    }
}

/// Applies a signed delta to a party's stored balance as a single atomic
/// SQL increment (`balance = balance + delta`).
///
/// Runs on the caller's transaction so the balance change commits or
/// rolls back together with the event row that caused it. Returns the
/// number of affected rows; zero means the party does not exist.
pub(crate) async fn apply_balance_delta<C: ConnectionTrait>(
    conn: &C,
    party_id: Uuid,
    delta: Decimal,
) -> Result<u64, DbErr> {
    let result = parties::Entity::update_many()
        .col_expr(
            parties::Column::Balance,
            Expr::col(parties::Column::Balance).add(delta),
        )
        .filter(parties::Column::Id.eq(party_id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}
