//! `SeaORM` entity definitions.

pub mod invoice_items;
pub mod invoices;
pub mod ledger_entries;
pub mod parties;
pub mod products;
pub mod sea_orm_active_enums;
