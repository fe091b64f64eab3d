//! Statement repository: reconstructs a party's account statement.
//!
//! Reads both event streams in creation order and hands them to the pure
//! statement builder in tally-core. The builder derives its signs from
//! the same contribution table the write paths use, so the final running
//! balance reconciles with the stored party balance.

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use tally_core::statement::{EventSource, StatementBuilder, StatementEvent, StatementLine};

use crate::entities::{
    invoices, ledger_entries, parties,
    sea_orm_active_enums::{EntryDirection, InvoiceDirection},
};

/// Error types for statement operations.
#[derive(Debug, thiserror::Error)]
pub enum StatementError {
    /// Party not found.
    #[error("Party not found: {0}")]
    PartyNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<StatementError> for tally_shared::AppError {
    fn from(err: StatementError) -> Self {
        match err {
            StatementError::PartyNotFound(id) => Self::NotFound(format!("party {id}")),
            StatementError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// A party's statement: header row plus running-balance lines.
#[derive(Debug, Clone)]
pub struct PartyStatement {
    /// The party, including its stored balance.
    pub party: parties::Model,
    /// Statement lines in creation order with running balances.
    pub lines: Vec<StatementLine>,
}

/// Statement repository (read-only).
#[derive(Debug, Clone)]
pub struct StatementRepository {
    db: DatabaseConnection,
}

impl StatementRepository {
    /// Creates a new statement repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the statement for one party.
    ///
    /// Fetches the party's invoices and ledger entries, each ordered by
    /// creation timestamp, merges them, and annotates running balances.
    /// An optional business-date range restricts the returned lines; the
    /// balance accumulation always covers the whole history.
    ///
    /// # Errors
    ///
    /// Returns an error if the party does not exist or a query fails.
    pub async fn build_statement(
        &self,
        party_id: Uuid,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<PartyStatement, StatementError> {
        let party = parties::Entity::find_by_id(party_id)
            .one(&self.db)
            .await?
            .ok_or(StatementError::PartyNotFound(party_id))?;

        let invoice_rows = invoices::Entity::find()
            .filter(invoices::Column::PartyId.eq(party_id))
            .order_by_asc(invoices::Column::CreatedAt)
            .order_by_asc(invoices::Column::Id)
            .all(&self.db)
            .await?;

        let entry_rows = ledger_entries::Entity::find()
            .filter(ledger_entries::Column::PartyId.eq(party_id))
            .order_by_asc(ledger_entries::Column::CreatedAt)
            .order_by_asc(ledger_entries::Column::Id)
            .all(&self.db)
            .await?;

        let invoice_events = invoice_rows.into_iter().map(invoice_event).collect();
        let entry_events = entry_rows.into_iter().map(entry_event).collect();

        let lines = StatementBuilder::build(invoice_events, entry_events);
        let lines = StatementBuilder::filter_range(lines, from, to);

        Ok(PartyStatement { party, lines })
    }
}

fn invoice_event(row: invoices::Model) -> StatementEvent {
    let (kind, description) = match row.direction {
        InvoiceDirection::Sale => (
            tally_core::balance::EventKind::SaleInvoice,
            format!("Sales invoice {}", row.number),
        ),
        InvoiceDirection::Purchase => (
            tally_core::balance::EventKind::PurchaseInvoice,
            format!("Purchase invoice {}", row.number),
        ),
    };

    StatementEvent {
        id: row.id,
        date: row.date,
        created_at: row.created_at,
        kind,
        amount: row.total,
        description,
        source: EventSource::Invoice { number: row.number },
    }
}

fn entry_event(row: ledger_entries::Model) -> StatementEvent {
    let kind = match row.direction {
        EntryDirection::Income => tally_core::balance::EventKind::Income,
        EntryDirection::Expense => tally_core::balance::EventKind::Expense,
    };

    StatementEvent {
        id: row.id,
        date: row.date,
        created_at: row.created_at,
        kind,
        amount: row.amount,
        description: row.description,
        source: EventSource::Ledger {
            payment_method: row.payment_method.map(Into::into),
        },
    }
}
