//! Invoice repository for invoice creation and queries.
//!
//! Invoice creation is the busiest write path in the system: one database
//! transaction inserts the invoice and its items, moves the party balance,
//! and adjusts product stock. Either all of it commits or none of it does.

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use tally_core::invoice::{
    CreateInvoiceInput, InvoiceDirection, InvoiceError as InvoiceValidationError, InvoiceService,
};

use crate::entities::{invoice_items, invoices, parties};
use crate::repositories::{party, product};

/// Error types for invoice operations.
#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    /// Invoice number is already in use.
    #[error("Invoice number already exists: {0}")]
    DuplicateNumber(String),

    /// Invoice not found.
    #[error("Invoice not found: {0}")]
    NotFound(Uuid),

    /// Party not found.
    #[error("Party not found: {0}")]
    PartyNotFound(Uuid),

    /// Referenced product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    /// Invoice input failed validation.
    #[error(transparent)]
    Invalid(#[from] InvoiceValidationError),

    /// The atomic commit failed; nothing was persisted.
    #[error("Transaction failed: {0}")]
    Transaction(DbErr),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<InvoiceError> for tally_shared::AppError {
    fn from(err: InvoiceError) -> Self {
        match err {
            InvoiceError::DuplicateNumber(number) => {
                Self::Conflict(format!("invoice number {number} already exists"))
            }
            InvoiceError::NotFound(id) => Self::NotFound(format!("invoice {id}")),
            InvoiceError::PartyNotFound(id) => Self::NotFound(format!("party {id}")),
            InvoiceError::ProductNotFound(id) => Self::NotFound(format!("product {id}")),
            InvoiceError::Invalid(e) => Self::Validation(e.to_string()),
            InvoiceError::Transaction(e) => Self::TransactionFailure(e.to_string()),
            InvoiceError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// An invoice with its line items.
#[derive(Debug, Clone)]
pub struct InvoiceWithItems {
    /// Invoice header.
    pub invoice: invoices::Model,
    /// Line items.
    pub items: Vec<invoice_items::Model>,
}

/// Invoice repository for creation and queries.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    db: DatabaseConnection,
}

impl InvoiceRepository {
    /// Creates a new invoice repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an invoice atomically with its balance and stock effects.
    ///
    /// Steps, all inside one transaction:
    /// 1. reject duplicate invoice numbers (also guarded by the unique index)
    /// 2. resolve the party
    /// 3. validate line items and compute totals (pure core logic)
    /// 4. insert the invoice header and items
    /// 5. apply the signed contribution to the party balance
    /// 6. adjust product stock (purchase: restock + latest cost; sale: draw down)
    ///
    /// # Errors
    ///
    /// Returns an error if the number collides, the party or a product is
    /// missing, validation fails, or the database operation fails. Any
    /// error rolls the whole transaction back.
    pub async fn create_invoice(
        &self,
        input: CreateInvoiceInput,
    ) -> Result<InvoiceWithItems, InvoiceError> {
        let existing = invoices::Entity::find()
            .filter(invoices::Column::Number.eq(input.number.as_str()))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(InvoiceError::DuplicateNumber(input.number));
        }

        let txn = self.db.begin().await?;

        parties::Entity::find_by_id(input.party_id)
            .one(&txn)
            .await?
            .ok_or(InvoiceError::PartyNotFound(input.party_id))?;

        // Prefetch referenced products so the pure validator can check
        // existence without touching the database.
        let product_ids: Vec<Uuid> = input.items.iter().map(|i| i.product_id).collect();
        let known: HashSet<Uuid> = crate::entities::products::Entity::find()
            .filter(crate::entities::products::Column::Id.is_in(product_ids))
            .all(&txn)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        let (resolved, totals) = InvoiceService::validate_and_total(&input, |id| {
            if known.contains(&id) {
                Ok(())
            } else {
                Err(InvoiceValidationError::ProductNotFound(id))
            }
        })
        .map_err(|e| match e {
            InvoiceValidationError::ProductNotFound(id) => InvoiceError::ProductNotFound(id),
            other => InvoiceError::Invalid(other),
        })?;

        let now = Utc::now().into();
        let invoice_id = Uuid::new_v4();

        let invoice = invoices::ActiveModel {
            id: Set(invoice_id),
            number: Set(input.number.clone()),
            direction: Set(input.direction.into()),
            date: Set(input.date),
            party_id: Set(input.party_id),
            subtotal: Set(totals.subtotal),
            vat_total: Set(totals.vat_total),
            total: Set(totals.total),
            created_at: Set(now),
        };
        let invoice = invoice.insert(&txn).await?;

        let mut items = Vec::with_capacity(resolved.len());
        for line in &resolved {
            let item = invoice_items::ActiveModel {
                id: Set(Uuid::new_v4()),
                invoice_id: Set(invoice_id),
                product_id: Set(line.product_id),
                quantity: Set(line.quantity),
                unit_price: Set(line.unit_price),
                vat_rate: Set(line.vat_rate),
                discount: Set(line.discount),
                line_total: Set(line.line_total),
            };
            items.push(item.insert(&txn).await?);
        }

        let delta = input.direction.event_kind().signed_contribution(totals.total);
        let affected = party::apply_balance_delta(&txn, input.party_id, delta).await?;
        if affected == 0 {
            return Err(InvoiceError::PartyNotFound(input.party_id));
        }

        for line in &resolved {
            let (quantity_delta, new_price) = match input.direction {
                InvoiceDirection::Purchase => (line.quantity, Some(line.unit_price)),
                InvoiceDirection::Sale => (-line.quantity, None),
            };
            let affected =
                product::adjust_stock(&txn, line.product_id, quantity_delta, new_price).await?;
            if affected == 0 {
                return Err(InvoiceError::ProductNotFound(line.product_id));
            }
        }

        txn.commit().await.map_err(InvoiceError::Transaction)?;

        tracing::debug!(
            invoice = %invoice.number,
            party = %invoice.party_id,
            delta = %delta,
            "Invoice committed with balance and stock effects"
        );

        Ok(InvoiceWithItems { invoice, items })
    }

    /// Lists invoices, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_invoices(&self) -> Result<Vec<invoices::Model>, InvoiceError> {
        let invoices = invoices::Entity::find()
            .order_by_desc(invoices::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(invoices)
    }

    /// Gets an invoice by ID with its line items.
    ///
    /// # Errors
    ///
    /// Returns an error if the invoice is not found or the query fails.
    pub async fn find_by_id(&self, invoice_id: Uuid) -> Result<InvoiceWithItems, InvoiceError> {
        let invoice = invoices::Entity::find_by_id(invoice_id)
            .one(&self.db)
            .await?
            .ok_or(InvoiceError::NotFound(invoice_id))?;

        let items = invoice_items::Entity::find()
            .filter(invoice_items::Column::InvoiceId.eq(invoice_id))
            .all(&self.db)
            .await?;

        Ok(InvoiceWithItems { invoice, items })
    }
}
