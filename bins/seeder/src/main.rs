//! Database seeder for Tally development and testing.
//!
//! Seeds demo parties and products for local development.
//!
//! Usage: cargo run --bin seeder

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use tally_db::entities::{parties, products, sea_orm_active_enums::PartyKind};

/// Demo customer ID (consistent for all seeds)
const DEMO_CUSTOMER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Demo supplier ID (consistent for all seeds)
const DEMO_SUPPLIER_ID: &str = "00000000-0000-0000-0000-000000000002";
/// Demo product ID (consistent for all seeds)
const DEMO_PRODUCT_ID: &str = "00000000-0000-0000-0000-000000000003";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = tally_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding demo customer...");
    seed_party(
        &db,
        DEMO_CUSTOMER_ID,
        "CUS0001",
        "Acme Retail Ltd",
        PartyKind::Customer,
    )
    .await;

    println!("Seeding demo supplier...");
    seed_party(
        &db,
        DEMO_SUPPLIER_ID,
        "CUS0002",
        "Wholesale Goods Co",
        PartyKind::Supplier,
    )
    .await;

    println!("Seeding demo product...");
    seed_product(&db).await;

    println!("Seeding complete!");
}

fn parse_id(id: &str) -> Uuid {
    Uuid::parse_str(id).expect("valid seed UUID")
}

async fn seed_party(
    db: &DatabaseConnection,
    id: &str,
    code: &str,
    name: &str,
    kind: PartyKind,
) {
    let id = parse_id(id);
    let existing = parties::Entity::find_by_id(id)
        .one(db)
        .await
        .expect("query parties");
    if existing.is_some() {
        println!("  already present, skipping");
        return;
    }

    let now = Utc::now().into();
    let party = parties::ActiveModel {
        id: Set(id),
        code: Set(code.to_string()),
        name: Set(name.to_string()),
        kind: Set(kind),
        tax_number: Set("1234567890".to_string()),
        phone: Set("+90 212 000 0000".to_string()),
        email: Set(None),
        address: Set(None),
        balance: Set(Decimal::ZERO),
        created_at: Set(now),
        updated_at: Set(now),
    };
    party.insert(db).await.expect("insert party");
}

async fn seed_product(db: &DatabaseConnection) {
    let id = parse_id(DEMO_PRODUCT_ID);
    let existing = products::Entity::find_by_id(id)
        .one(db)
        .await
        .expect("query products");
    if existing.is_some() {
        println!("  already present, skipping");
        return;
    }

    let now = Utc::now().into();
    let product = products::ActiveModel {
        id: Set(id),
        code: Set("PRD0001".to_string()),
        name: Set("Standard Widget".to_string()),
        unit: Set("pcs".to_string()),
        category: Set("General".to_string()),
        price: Set(Decimal::ZERO),
        vat_rate: Set(Decimal::from(20)),
        quantity: Set(Decimal::ZERO),
        min_quantity: Set(Decimal::ZERO),
        created_at: Set(now),
        updated_at: Set(now),
    };
    product.insert(db).await.expect("insert product");
}
