//! # Seed Data Generator
//!
//! Populates a database with demo items and a default admin account for
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p stockroom-db --bin seed
//!
//! # Specify a database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//! ```

use std::env;

use tracing_subscriber::EnvFilter;

use stockroom_core::Money;
use stockroom_db::{Database, DbConfig};

/// Demo catalog: (name, quantity, price in cents).
const DEMO_ITEMS: &[(&str, i64, i64)] = &[
    ("Ballpoint Pen", 120, 149),
    ("Notebook A5", 64, 399),
    ("Stapler", 18, 899),
    ("Printer Paper 500pk", 42, 1299),
    ("Desk Lamp", 7, 2499),
    ("Whiteboard Marker", 95, 199),
    ("Envelope Box", 12, 749),
    ("USB-C Cable", 33, 1099),
];

/// Demo sales recorded against the catalog above: (item, quantity).
const DEMO_SALES: &[(&str, i64)] = &[
    ("Ballpoint Pen", 6),
    ("Notebook A5", 2),
    ("Whiteboard Marker", 10),
];

const DEFAULT_ADMIN: (&str, &str) = ("admin", "admin");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./stockroom_dev.db");

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
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./stockroom_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("Connected, schema ready");

    // Don't stack demo data on top of a live catalog.
    let existing = db.items().count().await?;
    if existing > 0 {
        println!("Database already has {} items; skipping seed.", existing);
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    for &(name, quantity, price_cents) in DEMO_ITEMS {
        db.items()
            .insert(name, quantity, Money::from_cents(price_cents))
            .await?;
    }
    println!("Seeded {} items", DEMO_ITEMS.len());

    for &(name, quantity) in DEMO_SALES {
        db.sales().record_sale(name, quantity).await?;
    }
    println!("Recorded {} demo sales", DEMO_SALES.len());

    if db.users().count().await? == 0 {
        let (username, password) = DEFAULT_ADMIN;
        db.users().add_user(username, password, true).await?;
        println!(
            "Created default admin '{}' with password '{}' - change it before real use",
            username, password
        );
    }

    let report = db.reports().totals().await?;
    println!();
    println!(
        "Seed complete: {} units on hand, {} total value",
        report.total_quantity, report.total_value
    );

    Ok(())
}
