//! `SeaORM` active enums mapping Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Party kind: customer or supplier.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "party_kind")]
#[serde(rename_all = "lowercase")]
pub enum PartyKind {
    /// A customer the business sells to.
    #[sea_orm(string_value = "customer")]
    Customer,
    /// A supplier the business buys from.
    #[sea_orm(string_value = "supplier")]
    Supplier,
}

/// Invoice direction: sale or purchase.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "invoice_direction")]
#[serde(rename_all = "lowercase")]
pub enum InvoiceDirection {
    /// Sales invoice issued to a customer.
    #[sea_orm(string_value = "sale")]
    Sale,
    /// Purchase invoice received from a supplier.
    #[sea_orm(string_value = "purchase")]
    Purchase,
}

/// Ledger entry direction: income or expense.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "entry_direction")]
#[serde(rename_all = "lowercase")]
pub enum EntryDirection {
    /// Money received.
    #[sea_orm(string_value = "income")]
    Income,
    /// Money paid out.
    #[sea_orm(string_value = "expense")]
    Expense,
}

/// Settlement method for ledger entries.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_method")]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash payment.
    #[sea_orm(string_value = "cash")]
    Cash,
    /// Bank transfer.
    #[sea_orm(string_value = "bank_transfer")]
    BankTransfer,
    /// Credit card payment.
    #[sea_orm(string_value = "credit_card")]
    CreditCard,
}

impl From<tally_core::invoice::InvoiceDirection> for InvoiceDirection {
    fn from(direction: tally_core::invoice::InvoiceDirection) -> Self {
        match direction {
            tally_core::invoice::InvoiceDirection::Sale => Self::Sale,
            tally_core::invoice::InvoiceDirection::Purchase => Self::Purchase,
        }
    }
}

impl From<InvoiceDirection> for tally_core::invoice::InvoiceDirection {
    fn from(direction: InvoiceDirection) -> Self {
        match direction {
            InvoiceDirection::Sale => Self::Sale,
            InvoiceDirection::Purchase => Self::Purchase,
        }
    }
}

impl From<tally_core::ledger::EntryDirection> for EntryDirection {
    fn from(direction: tally_core::ledger::EntryDirection) -> Self {
        match direction {
            tally_core::ledger::EntryDirection::Income => Self::Income,
            tally_core::ledger::EntryDirection::Expense => Self::Expense,
        }
    }
}

impl From<EntryDirection> for tally_core::ledger::EntryDirection {
    fn from(direction: EntryDirection) -> Self {
        match direction {
            EntryDirection::Income => Self::Income,
            EntryDirection::Expense => Self::Expense,
        }
    }
}

impl From<tally_core::ledger::PaymentMethod> for PaymentMethod {
    fn from(method: tally_core::ledger::PaymentMethod) -> Self {
        match method {
            tally_core::ledger::PaymentMethod::Cash => Self::Cash,
            tally_core::ledger::PaymentMethod::BankTransfer => Self::BankTransfer,
            tally_core::ledger::PaymentMethod::CreditCard => Self::CreditCard,
        }
    }
}

impl From<PaymentMethod> for tally_core::ledger::PaymentMethod {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Cash => Self::Cash,
            PaymentMethod::BankTransfer => Self::BankTransfer,
            PaymentMethod::CreditCard => Self::CreditCard,
        }
    }
}
