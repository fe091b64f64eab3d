//! Invoice domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::balance::EventKind;

/// Invoice direction: a sale to a customer or a purchase from a supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceDirection {
    /// Sales invoice issued to a customer.
    Sale,
    /// Purchase invoice received from a supplier.
    Purchase,
}

impl InvoiceDirection {
    /// Maps the direction to its balance event kind.
    #[must_use]
    pub const fn event_kind(self) -> EventKind {
        match self {
            Self::Sale => EventKind::SaleInvoice,
            Self::Purchase => EventKind::PurchaseInvoice,
        }
    }
}

impl std::fmt::Display for InvoiceDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sale => write!(f, "sale"),
            Self::Purchase => write!(f, "purchase"),
        }
    }
}

/// Input for a single invoice line item.
#[derive(Debug, Clone)]
pub struct LineItemInput {
    /// The product being invoiced.
    pub product_id: Uuid,
    /// Quantity (must be positive).
    pub quantity: Decimal,
    /// Unit price (must be positive).
    pub unit_price: Decimal,
    /// VAT rate in percent (>= 0).
    pub vat_rate: Decimal,
    /// Discount in percent, applied before VAT (0..=100).
    pub discount: Decimal,
}

/// A line item with its computed amounts.
#[derive(Debug, Clone)]
pub struct ResolvedLineItem {
    /// The product being invoiced.
    pub product_id: Uuid,
    /// Quantity.
    pub quantity: Decimal,
    /// Unit price.
    pub unit_price: Decimal,
    /// VAT rate in percent.
    pub vat_rate: Decimal,
    /// Discount in percent.
    pub discount: Decimal,
    /// Net amount after discount, before VAT.
    pub line_net: Decimal,
    /// VAT amount on the net.
    pub line_vat: Decimal,
    /// Net plus VAT.
    pub line_total: Decimal,
}

/// Monetary totals of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of line nets (pre-tax).
    pub subtotal: Decimal,
    /// Sum of line VAT amounts.
    pub vat_total: Decimal,
    /// Subtotal plus VAT total.
    pub total: Decimal,
}

/// Input for creating a new invoice.
#[derive(Debug, Clone)]
pub struct CreateInvoiceInput {
    /// Sale or purchase.
    pub direction: InvoiceDirection,
    /// Globally unique human-readable invoice number.
    pub number: String,
    /// Business date of the invoice.
    pub date: NaiveDate,
    /// The invoiced party.
    pub party_id: Uuid,
    /// Line items (at least one).
    pub items: Vec<LineItemInput>,
}
