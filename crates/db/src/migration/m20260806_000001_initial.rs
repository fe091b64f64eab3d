//! Initial database migration.
//!
//! Creates the enums, tables, indexes, and triggers for parties, products,
//! invoices, invoice items, and ledger entries.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: PARTIES & PRODUCTS
        // ============================================================
        db.execute_unprepared(PARTIES_SQL).await?;
        db.execute_unprepared(PRODUCTS_SQL).await?;

        // ============================================================
        // PART 3: INVOICES & LEDGER
        // ============================================================
        db.execute_unprepared(INVOICES_SQL).await?;
        db.execute_unprepared(INVOICE_ITEMS_SQL).await?;
        db.execute_unprepared(LEDGER_ENTRIES_SQL).await?;

        // ============================================================
        // PART 4: TRIGGERS & FUNCTIONS
        // ============================================================
        db.execute_unprepared(TRIGGERS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Party kinds
CREATE TYPE party_kind AS ENUM (
    'customer',
    'supplier'
);

-- Invoice directions
CREATE TYPE invoice_direction AS ENUM (
    'sale',
    'purchase'
);

-- Ledger entry directions
CREATE TYPE entry_direction AS ENUM (
    'income',
    'expense'
);

-- Settlement methods
CREATE TYPE payment_method AS ENUM (
    'cash',
    'bank_transfer',
    'credit_card'
);
";

const PARTIES_SQL: &str = r"
CREATE TABLE parties (
    id UUID PRIMARY KEY,
    code VARCHAR(16) NOT NULL UNIQUE,
    name VARCHAR(255) NOT NULL,
    kind party_kind NOT NULL,
    tax_number VARCHAR(32) NOT NULL,
    phone VARCHAR(32) NOT NULL,
    email VARCHAR(255),
    address TEXT,
    balance NUMERIC(14, 2) NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_parties_kind ON parties (kind);
";

const PRODUCTS_SQL: &str = r"
CREATE TABLE products (
    id UUID PRIMARY KEY,
    code VARCHAR(16) NOT NULL UNIQUE,
    name VARCHAR(255) NOT NULL,
    unit VARCHAR(32) NOT NULL,
    category VARCHAR(64) NOT NULL,
    price NUMERIC(14, 2) NOT NULL DEFAULT 0,
    vat_rate NUMERIC(5, 2) NOT NULL DEFAULT 0,
    quantity NUMERIC(14, 3) NOT NULL DEFAULT 0,
    min_quantity NUMERIC(14, 3) NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const INVOICES_SQL: &str = r"
CREATE TABLE invoices (
    id UUID PRIMARY KEY,
    number VARCHAR(64) NOT NULL UNIQUE,
    direction invoice_direction NOT NULL,
    date DATE NOT NULL,
    party_id UUID NOT NULL REFERENCES parties (id),
    subtotal NUMERIC(14, 2) NOT NULL,
    vat_total NUMERIC(14, 2) NOT NULL,
    total NUMERIC(14, 2) NOT NULL CHECK (total >= 0),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Statement queries walk a party's invoices in creation order.
CREATE INDEX idx_invoices_party_created ON invoices (party_id, created_at);
CREATE INDEX idx_invoices_date ON invoices (date);
";

const INVOICE_ITEMS_SQL: &str = r"
CREATE TABLE invoice_items (
    id UUID PRIMARY KEY,
    invoice_id UUID NOT NULL REFERENCES invoices (id) ON DELETE CASCADE,
    product_id UUID NOT NULL REFERENCES products (id),
    quantity NUMERIC(14, 3) NOT NULL CHECK (quantity > 0),
    unit_price NUMERIC(14, 2) NOT NULL CHECK (unit_price > 0),
    vat_rate NUMERIC(5, 2) NOT NULL CHECK (vat_rate >= 0),
    discount NUMERIC(5, 2) NOT NULL CHECK (discount >= 0 AND discount <= 100),
    line_total NUMERIC(14, 2) NOT NULL
);

CREATE INDEX idx_invoice_items_invoice ON invoice_items (invoice_id);
";

const LEDGER_ENTRIES_SQL: &str = r"
CREATE TABLE ledger_entries (
    id UUID PRIMARY KEY,
    date DATE NOT NULL,
    direction entry_direction NOT NULL,
    category VARCHAR(64) NOT NULL,
    description TEXT NOT NULL,
    amount NUMERIC(14, 2) NOT NULL CHECK (amount > 0),
    payment_method payment_method,
    party_id UUID REFERENCES parties (id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Statement queries walk a party's entries in creation order.
CREATE INDEX idx_ledger_entries_party_created ON ledger_entries (party_id, created_at);
CREATE INDEX idx_ledger_entries_date ON ledger_entries (date);
";

const TRIGGERS_SQL: &str = r"
CREATE OR REPLACE FUNCTION set_updated_at()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = now();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_parties_updated_at
    BEFORE UPDATE ON parties
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();

CREATE TRIGGER trg_products_updated_at
    BEFORE UPDATE ON products
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS invoice_items CASCADE;
DROP TABLE IF EXISTS invoices CASCADE;
DROP TABLE IF EXISTS ledger_entries CASCADE;
DROP TABLE IF EXISTS products CASCADE;
DROP TABLE IF EXISTS parties CASCADE;
DROP FUNCTION IF EXISTS set_updated_at CASCADE;
DROP TYPE IF EXISTS payment_method;
DROP TYPE IF EXISTS entry_direction;
DROP TYPE IF EXISTS invoice_direction;
DROP TYPE IF EXISTS party_kind;
";
