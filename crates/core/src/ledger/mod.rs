//! Cash/bank ledger entry types and validation.
//!
//! Ledger entries record money moving in or out of the business. They may
//! optionally reference a party, in which case their amount also flows
//! into that party's running balance.

pub mod error;
pub mod types;
pub mod validation;

pub use error::LedgerError;
pub use types::{CreateEntryInput, EntryDirection, PaymentMethod};
pub use validation::validate_entry;
