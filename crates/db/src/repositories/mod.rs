//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. Every mutating operation runs inside a single database
//! transaction; party balance changes are issued as atomic SQL
//! increments so concurrent writers cannot lose updates.

pub mod invoice;
pub mod ledger;
pub mod party;
pub mod product;
pub mod report;
pub mod statement;

pub use invoice::{InvoiceError, InvoiceRepository, InvoiceWithItems};
pub use ledger::{EntryError, LedgerEntryRepository};
pub use party::{CreatePartyInput, PartyError, PartyRepository};
pub use product::{CreateProductInput, ProductError, ProductRepository};
pub use report::{ReportError, ReportRepository, SummaryReport};
pub use statement::{PartyStatement, StatementError, StatementRepository};
