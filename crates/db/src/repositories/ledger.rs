//! Ledger entry repository for cash/bank movements.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use tally_core::ledger::{validate_entry, CreateEntryInput, LedgerError};

use crate::entities::ledger_entries;
use crate::repositories::party;

/// Error types for ledger entry operations.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    /// Entry input failed validation.
    #[error(transparent)]
    Invalid(#[from] LedgerError),

    /// Linked party not found.
    #[error("Party not found: {0}")]
    PartyNotFound(Uuid),

    /// The atomic commit failed; nothing was persisted.
    #[error("Transaction failed: {0}")]
    Transaction(DbErr),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<EntryError> for tally_shared::AppError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::Invalid(e) => Self::Validation(e.to_string()),
            EntryError::PartyNotFound(id) => Self::NotFound(format!("party {id}")),
            EntryError::Transaction(e) => Self::TransactionFailure(e.to_string()),
            EntryError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Ledger entry repository for creation and queries.
#[derive(Debug, Clone)]
pub struct LedgerEntryRepository {
    db: DatabaseConnection,
}

impl LedgerEntryRepository {
    /// Creates a new ledger entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a ledger entry, atomically updating the linked party's
    /// balance when one is referenced.
    ///
    /// Entries without a party persist as standalone records and touch no
    /// balance. For linked entries, the entry insert and the balance
    /// increment share one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the linked party does not
    /// exist, or the database operation fails. Any error rolls the whole
    /// transaction back.
    pub async fn create_entry(
        &self,
        input: CreateEntryInput,
    ) -> Result<ledger_entries::Model, EntryError> {
        validate_entry(&input)?;

        let txn = self.db.begin().await?;

        let entry = ledger_entries::ActiveModel {
            id: Set(Uuid::new_v4()),
            date: Set(input.date),
            direction: Set(input.direction.into()),
            category: Set(input.category.clone()),
            description: Set(input.description.clone()),
            amount: Set(input.amount),
            payment_method: Set(input.payment_method.map(Into::into)),
            party_id: Set(input.party_id),
            created_at: Set(Utc::now().into()),
        };
        let entry = entry.insert(&txn).await?;

        if let Some(party_id) = input.party_id {
            let delta = input
                .direction
                .event_kind()
                .signed_contribution(input.amount);
            let affected = party::apply_balance_delta(&txn, party_id, delta).await?;
            if affected == 0 {
                return Err(EntryError::PartyNotFound(party_id));
            }
        }

        txn.commit().await.map_err(EntryError::Transaction)?;

        tracing::debug!(
            entry = %entry.id,
            party = ?entry.party_id,
            "Ledger entry committed"
        );

        Ok(entry)
    }

    /// Lists ledger entries, newest business date first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_entries(&self) -> Result<Vec<ledger_entries::Model>, EntryError> {
        let entries = ledger_entries::Entity::find()
            .order_by_desc(ledger_entries::Column::Date)
            .order_by_desc(ledger_entries::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(entries)
    }
}
