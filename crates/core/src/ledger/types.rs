//! Ledger entry domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::balance::EventKind;

/// Entry direction: money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryDirection {
    /// Money received.
    Income,
    /// Money paid out.
    Expense,
}

impl EntryDirection {
    /// Maps the direction to its balance event kind.
    #[must_use]
    pub const fn event_kind(self) -> EventKind {
        match self {
            Self::Income => EventKind::Income,
            Self::Expense => EventKind::Expense,
        }
    }
}

impl std::fmt::Display for EntryDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// How an income entry was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash payment.
    Cash,
    /// Bank transfer.
    BankTransfer,
    /// Credit card payment.
    CreditCard,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::BankTransfer => write!(f, "bank_transfer"),
            Self::CreditCard => write!(f, "credit_card"),
        }
    }
}

/// Input for creating a ledger entry.
#[derive(Debug, Clone)]
pub struct CreateEntryInput {
    /// Business date of the movement.
    pub date: NaiveDate,
    /// Income or expense.
    pub direction: EntryDirection,
    /// Free-text category ("Rent", "Utilities", ...).
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Positive monetary amount; the direction carries the sign.
    pub amount: Decimal,
    /// Settlement method, required for income entries.
    pub payment_method: Option<PaymentMethod>,
    /// Optional party this movement concerns. Entries without a party
    /// persist as standalone records and touch no balance.
    pub party_id: Option<Uuid>,
}
