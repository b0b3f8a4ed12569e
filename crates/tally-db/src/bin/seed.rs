//! # Rule Seeder
//!
//! Populates the rule store with the reference pricing rules for
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p tally-db --bin seed
//!
//! # Specify database path
//! cargo run -p tally-db --bin seed -- --db ./data/tally.db
//! ```
//!
//! ## Seeded Rules
//! - 5% discount for orders over 200
//! - 10% discount for the Laptop + Headphones combo
//! - Deliveries from the Jos warehouse: 5.00 base + 1.00/km

use std::env;

use tally_core::types::{DeliveryRule, DiscountRule};
use tally_db::repository::generate_rule_id;
use tally_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./tally_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Tally Rule Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./tally_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Tally Rule Seeder");
    println!("====================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing rules
    let existing = db.discount_rules().count().await? + db.delivery_rules().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} rules", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // 5% discount for orders over 200.
    db.discount_rules()
        .insert(&DiscountRule::order_total(generate_rule_id(), 200.0, 0.05))
        .await?;

    // 10% discount for a specific product combo.
    db.discount_rules()
        .insert(&DiscountRule::product_combo(
            generate_rule_id(),
            0.10,
            vec!["Laptop".to_string(), "Headphones".to_string()],
        ))
        .await?;

    // Single delivery rule: Jos warehouse.
    db.delivery_rules()
        .insert(&DeliveryRule {
            id: generate_rule_id(),
            base_fee: 5.00,
            cost_per_km: 1.00,
            warehouse_lat: 9.9285,
            warehouse_lng: -8.8921,
            description: Some("Jos warehouse".to_string()),
        })
        .await?;

    // Verify what the engine will see
    let snapshot = db.snapshot().await?;
    println!();
    println!("✓ Seeded {} discount rules", snapshot.discounts.len());
    println!(
        "✓ Seeded delivery rule: {}",
        snapshot
            .delivery
            .as_ref()
            .and_then(|r| r.description.as_deref())
            .unwrap_or("(unnamed)")
    );

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
