//! Statement domain types.

use chrono::{DateTime, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::balance::{EventKind, TxnKind};
use crate::ledger::PaymentMethod;

/// Which table a statement line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// An invoice row.
    Invoice,
    /// A ledger entry row.
    Ledger,
}

/// Source-specific details of a statement event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    /// Event backed by an invoice.
    Invoice {
        /// The invoice's human-readable number.
        number: String,
    },
    /// Event backed by a ledger entry.
    Ledger {
        /// Settlement method, when recorded.
        payment_method: Option<PaymentMethod>,
    },
}

impl EventSource {
    /// The document kind of this source.
    #[must_use]
    pub const fn document_kind(&self) -> DocumentKind {
        match self {
            Self::Invoice { .. } => DocumentKind::Invoice,
            Self::Ledger { .. } => DocumentKind::Ledger,
        }
    }
}

/// One financial event concerning a party, normalized for merging.
///
/// The persistence layer maps invoice and ledger rows into this shape;
/// `created_at` is the merge key (creation order), `date` is the
/// user-facing business date and plays no role in ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementEvent {
    /// Source row ID.
    pub id: Uuid,
    /// Business date.
    pub date: NaiveDate,
    /// Creation timestamp — the ordering key.
    pub created_at: DateTime<FixedOffset>,
    /// The event's balance semantics.
    pub kind: EventKind,
    /// Positive monetary magnitude.
    pub amount: Decimal,
    /// Human-readable description.
    pub description: String,
    /// Source-specific details.
    pub source: EventSource,
}

/// A statement line: one event annotated with the running balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Source row ID.
    pub id: Uuid,
    /// Business date.
    pub date: NaiveDate,
    /// Human-readable description.
    pub description: String,
    /// Debit or credit.
    pub kind: TxnKind,
    /// Positive monetary magnitude.
    pub amount: Decimal,
    /// Which table the line came from.
    pub document: DocumentKind,
    /// Invoice number, for invoice-backed lines.
    pub document_no: Option<String>,
    /// Settlement method, for ledger-backed lines that recorded one.
    pub payment_method: Option<PaymentMethod>,
    /// Running balance after this event.
    pub balance: Decimal,
}
