//! Integration tests for the invoice repository.
//!
//! These tests need a live PostgreSQL instance; they are skipped when
//! `DATABASE_URL` is not set.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use tally_core::invoice::{CreateInvoiceInput, InvoiceDirection, LineItemInput};
use tally_db::entities::sea_orm_active_enums::PartyKind;
use tally_db::migration::{Migrator, MigratorTrait};
use tally_db::repositories::{
    CreatePartyInput, CreateProductInput, InvoiceError, InvoiceRepository, PartyRepository,
    ProductRepository,
};

async fn connect() -> Option<sea_orm::DatabaseConnection> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let db = tally_db::connect(&url).await.expect("connect to database");
    Migrator::up(&db, None).await.expect("run migrations");
    Some(db)
}

async fn seed_party(db: &sea_orm::DatabaseConnection) -> Uuid {
    let repo = PartyRepository::new(db.clone());
    let party = repo
        .create_party(CreatePartyInput {
            name: format!("Test Party {}", Uuid::new_v4()),
            kind: PartyKind::Customer,
            tax_number: "1234567890".to_string(),
            phone: "+90 555 000 0000".to_string(),
            email: None,
            address: None,
        })
        .await
        .expect("create party");
    party.id
}

async fn seed_product(db: &sea_orm::DatabaseConnection) -> Uuid {
    let repo = ProductRepository::new(db.clone());
    let product = repo
        .create_product(CreateProductInput {
            name: format!("Test Product {}", Uuid::new_v4()),
            unit: "pcs".to_string(),
            vat_rate: dec!(20),
            category: None,
        })
        .await
        .expect("create product");
    product.id
}

fn invoice_input(
    direction: InvoiceDirection,
    party_id: Uuid,
    product_id: Uuid,
    quantity: Decimal,
    unit_price: Decimal,
) -> CreateInvoiceInput {
    CreateInvoiceInput {
        direction,
        number: format!("INV-{}", Uuid::new_v4()),
        date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        party_id,
        items: vec![LineItemInput {
            product_id,
            quantity,
            unit_price,
            vat_rate: dec!(0),
            discount: dec!(0),
        }],
    }
}

#[tokio::test]
async fn test_purchase_invoice_increments_balance_and_stock() {
    let Some(db) = connect().await else { return };

    let party_id = seed_party(&db).await;
    let product_id = seed_product(&db).await;

    let repo = InvoiceRepository::new(db.clone());
    let created = repo
        .create_invoice(invoice_input(
            InvoiceDirection::Purchase,
            party_id,
            product_id,
            dec!(4),
            dec!(25),
        ))
        .await
        .expect("create purchase invoice");

    assert_eq!(created.invoice.total, dec!(100.00));
    assert_eq!(created.items.len(), 1);

    // Purchase: we owe the supplier more.
    let party = PartyRepository::new(db.clone())
        .find_by_id(party_id)
        .await
        .unwrap();
    assert_eq!(party.balance, dec!(100.00));

    // Stock restocked and latest cost recorded.
    let product = ProductRepository::new(db.clone())
        .find_by_id(product_id)
        .await
        .unwrap();
    assert_eq!(product.quantity, dec!(4));
    assert_eq!(product.price, dec!(25));
}

#[tokio::test]
async fn test_sale_invoice_decrements_balance_and_stock() {
    let Some(db) = connect().await else { return };

    let party_id = seed_party(&db).await;
    let product_id = seed_product(&db).await;

    let repo = InvoiceRepository::new(db.clone());
    repo.create_invoice(invoice_input(
        InvoiceDirection::Sale,
        party_id,
        product_id,
        dec!(2),
        dec!(500),
    ))
    .await
    .expect("create sale invoice");

    let party = PartyRepository::new(db.clone())
        .find_by_id(party_id)
        .await
        .unwrap();
    assert_eq!(party.balance, dec!(-1000.00));

    let product = ProductRepository::new(db.clone())
        .find_by_id(product_id)
        .await
        .unwrap();
    assert_eq!(product.quantity, dec!(-2));
}

#[tokio::test]
async fn test_duplicate_invoice_number_is_a_conflict() {
    let Some(db) = connect().await else { return };

    let party_id = seed_party(&db).await;
    let product_id = seed_product(&db).await;

    let repo = InvoiceRepository::new(db.clone());
    let mut input = invoice_input(
        InvoiceDirection::Sale,
        party_id,
        product_id,
        dec!(1),
        dec!(10),
    );
    repo.create_invoice(input.clone()).await.expect("first insert");

    // Second insert with the same number must fail and leave the balance
    // at the value the first insert produced.
    input.date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let err = repo.create_invoice(input).await.unwrap_err();
    assert!(matches!(err, InvoiceError::DuplicateNumber(_)));

    let party = PartyRepository::new(db.clone())
        .find_by_id(party_id)
        .await
        .unwrap();
    assert_eq!(party.balance, dec!(-10.00));
}

#[tokio::test]
async fn test_missing_product_rolls_back_everything() {
    let Some(db) = connect().await else { return };

    let party_id = seed_party(&db).await;

    let repo = InvoiceRepository::new(db.clone());
    let input = invoice_input(
        InvoiceDirection::Sale,
        party_id,
        Uuid::new_v4(), // does not exist
        dec!(1),
        dec!(10),
    );
    let number = input.number.clone();

    let err = repo.create_invoice(input).await.unwrap_err();
    assert!(matches!(err, InvoiceError::ProductNotFound(_)));

    // No partial state: balance untouched, no invoice row visible.
    let party = PartyRepository::new(db.clone())
        .find_by_id(party_id)
        .await
        .unwrap();
    assert_eq!(party.balance, Decimal::ZERO);

    let invoices = repo.list_invoices().await.unwrap();
    assert!(invoices.iter().all(|i| i.number != number));
}

#[tokio::test]
async fn test_missing_party_is_rejected() {
    let Some(db) = connect().await else { return };

    let product_id = seed_product(&db).await;
    let repo = InvoiceRepository::new(db.clone());

    let err = repo
        .create_invoice(invoice_input(
            InvoiceDirection::Sale,
            Uuid::new_v4(),
            product_id,
            dec!(1),
            dec!(10),
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, InvoiceError::PartyNotFound(_)));
}
