//! Signed balance contributions.
//!
//! Every financial event (invoice or ledger entry) changes the balance of
//! the party it references by a signed amount. This module is the single
//! source of truth for that sign convention: the repositories use it to
//! compute the atomic balance increment on write, and the statement
//! builder uses it to reproduce the same balance on read.

pub mod contribution;

#[cfg(test)]
mod contribution_props;

pub use contribution::{EventKind, TxnKind};
