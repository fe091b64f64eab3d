//! Invoice validation and totals computation.

use rust_decimal::Decimal;
use uuid::Uuid;

use tally_shared::types::round_currency;

use super::error::InvoiceError;
use super::types::{CreateInvoiceInput, InvoiceTotals, LineItemInput, ResolvedLineItem};

/// Invoice service for validation and totals computation.
///
/// This service contains pure business logic with no database dependencies.
/// Product existence is checked through a caller-supplied lookup so the
/// same code runs against the database or against test fixtures.
pub struct InvoiceService;

impl InvoiceService {
    /// Validates an invoice input and computes per-line and invoice totals.
    ///
    /// Each line's amounts follow the commercial formula:
    /// net = quantity x unit price x (1 - discount%), VAT = net x vat%,
    /// total = net + VAT, each rounded to currency precision. The invoice
    /// subtotal/VAT total/total are the sums of the rounded line amounts.
    ///
    /// # Errors
    ///
    /// Returns `InvoiceError` if the number is empty, the item list is
    /// empty, any line has a non-positive quantity or unit price, a
    /// discount outside 0..=100, a negative VAT rate, or references a
    /// product the validator does not know.
    pub fn validate_and_total<P>(
        input: &CreateInvoiceInput,
        product_validator: P,
    ) -> Result<(Vec<ResolvedLineItem>, InvoiceTotals), InvoiceError>
    where
        P: Fn(Uuid) -> Result<(), InvoiceError>,
    {
        if input.number.trim().is_empty() {
            return Err(InvoiceError::EmptyNumber);
        }
        if input.items.is_empty() {
            return Err(InvoiceError::EmptyItems);
        }

        let mut resolved = Vec::with_capacity(input.items.len());
        for item in &input.items {
            resolved.push(Self::resolve_item(item, &product_validator)?);
        }

        let totals = Self::totals(&resolved);
        Ok((resolved, totals))
    }

    /// Validates and resolves a single line item.
    fn resolve_item<P>(
        item: &LineItemInput,
        product_validator: &P,
    ) -> Result<ResolvedLineItem, InvoiceError>
    where
        P: Fn(Uuid) -> Result<(), InvoiceError>,
    {
        if item.quantity <= Decimal::ZERO {
            return Err(InvoiceError::InvalidQuantity);
        }
        if item.unit_price <= Decimal::ZERO {
            return Err(InvoiceError::InvalidUnitPrice);
        }
        if item.discount < Decimal::ZERO || item.discount > Decimal::ONE_HUNDRED {
            return Err(InvoiceError::InvalidDiscount);
        }
        if item.vat_rate < Decimal::ZERO {
            return Err(InvoiceError::InvalidVatRate);
        }

        product_validator(item.product_id)?;

        let gross = item.quantity * item.unit_price;
        let discount_amount = gross * (item.discount / Decimal::ONE_HUNDRED);
        let line_net = round_currency(gross - discount_amount);
        let line_vat = round_currency(line_net * (item.vat_rate / Decimal::ONE_HUNDRED));
        let line_total = line_net + line_vat;

        Ok(ResolvedLineItem {
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
            vat_rate: item.vat_rate,
            discount: item.discount,
            line_net,
            line_vat,
            line_total,
        })
    }

    /// Sums resolved line amounts into invoice totals.
    #[must_use]
    pub fn totals(items: &[ResolvedLineItem]) -> InvoiceTotals {
        let subtotal: Decimal = items.iter().map(|i| i.line_net).sum();
        let vat_total: Decimal = items.iter().map(|i| i.line_vat).sum();

        InvoiceTotals {
            subtotal,
            vat_total,
            total: subtotal + vat_total,
        }
    }
}
