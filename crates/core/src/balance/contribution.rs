//! Event kinds and their signed contribution to a party balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four kinds of balance-affecting financial events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A sales invoice issued to a customer.
    SaleInvoice,
    /// A purchase invoice received from a supplier.
    PurchaseInvoice,
    /// An income ledger entry (money received).
    Income,
    /// An expense ledger entry (money paid out).
    Expense,
}

/// Normalized transaction polarity for statement rendering.
///
/// Credits increase the party balance, debits decrease it. A positive
/// balance means the party owes the business money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnKind {
    /// Balance-decreasing event.
    Debit,
    /// Balance-increasing event.
    Credit,
}

impl EventKind {
    /// Maps an event kind to its debit/credit polarity.
    ///
    /// Sale invoices and expenses decrease the balance; purchase invoices
    /// and income entries increase it. The same mapping is used by the
    /// balance mutation on write and the statement builder on read, so
    /// the two can never drift apart.
    #[must_use]
    pub const fn txn_kind(self) -> TxnKind {
        match self {
            Self::SaleInvoice | Self::Expense => TxnKind::Debit,
            Self::PurchaseInvoice | Self::Income => TxnKind::Credit,
        }
    }

    /// Returns the signed amount this event adds to the party balance.
    ///
    /// `magnitude` is the event's stored (positive) monetary amount.
    #[must_use]
    pub fn signed_contribution(self, magnitude: Decimal) -> Decimal {
        match self.txn_kind() {
            TxnKind::Debit => -magnitude,
            TxnKind::Credit => magnitude,
        }
    }
}

impl TxnKind {
    /// Applies a magnitude of this polarity to an accumulator.
    #[must_use]
    pub fn apply(self, balance: Decimal, magnitude: Decimal) -> Decimal {
        match self {
            Self::Debit => balance - magnitude,
            Self::Credit => balance + magnitude,
        }
    }
}

impl std::fmt::Display for TxnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debit => write!(f, "debit"),
            Self::Credit => write!(f, "credit"),
        }
    }
}
