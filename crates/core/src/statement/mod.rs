//! Party statement reconstruction.
//!
//! A statement is the chronologically ordered list of every financial
//! event concerning one party — invoices where it is the counterparty and
//! ledger entries linked to it — each annotated with the running balance
//! after that event. The two source streams are merged by creation order
//! with a single explicit algorithm, and the running balance reproduces
//! the stored party balance exactly (both derive their signs from
//! [`crate::balance`]).

pub mod builder;
pub mod merge;
pub mod types;

#[cfg(test)]
mod builder_props;

pub use builder::StatementBuilder;
pub use merge::merge_by_creation;
pub use types::{DocumentKind, EventSource, StatementEvent, StatementLine};
