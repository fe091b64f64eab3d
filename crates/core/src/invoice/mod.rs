//! Invoice totals computation and validation.
//!
//! Invoices are immutable once created: the service validates the input,
//! resolves each line item's net/VAT/total amounts, and produces the
//! invoice totals that the persistence layer stores alongside the rows.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::InvoiceError;
pub use service::InvoiceService;
pub use types::{
    CreateInvoiceInput, InvoiceDirection, InvoiceTotals, LineItemInput, ResolvedLineItem,
};
