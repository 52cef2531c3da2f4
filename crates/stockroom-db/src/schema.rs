//! # Database Schema
//!
//! Embedded DDL for the Stockroom store, applied on connect.
//!
//! There is no migration framework here: the schema is three tables that
//! ship with the binary, every statement is `IF NOT EXISTS`, and applying
//! it is idempotent. Timestamps are stored as TEXT in the format sqlx
//! writes for `chrono::DateTime<Utc>`, which sorts lexicographically in
//! date order - the sales range scan and `DATE()` grouping rely on that.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};

/// Catalog of inventory items. `name` is the unique business key.
const CREATE_INVENTORY: &str = r#"
CREATE TABLE IF NOT EXISTS inventory (
    id           TEXT PRIMARY KEY,
    name         TEXT NOT NULL UNIQUE,
    quantity     INTEGER NOT NULL,
    price_cents  INTEGER NOT NULL,
    last_updated TEXT NOT NULL
)
"#;

/// Login accounts. `username` is the unique business key.
const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id            TEXT PRIMARY KEY,
    username      TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    is_admin      INTEGER NOT NULL DEFAULT 0,
    created_at    TEXT NOT NULL
)
"#;

/// Append-only sale history. `item_name` references the catalog by name
/// on purpose without a foreign key: history must survive item removal.
const CREATE_SALES: &str = r#"
CREATE TABLE IF NOT EXISTS sales (
    id        TEXT PRIMARY KEY,
    item_name TEXT NOT NULL,
    quantity  INTEGER NOT NULL,
    sale_date TEXT NOT NULL
)
"#;

/// Serves both the per-item history scan and the forecast's date-range
/// aggregation.
const CREATE_SALES_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_sales_item_date ON sales (item_name, sale_date)
"#;

/// Applies the embedded schema. Safe to run on every connect.
pub async fn init(pool: &SqlitePool) -> DbResult<()> {
    info!("Applying database schema");

    for statement in [CREATE_INVENTORY, CREATE_USERS, CREATE_SALES, CREATE_SALES_INDEX] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DbError::SchemaFailed(e.to_string()))?;
    }

    info!("Schema ready");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_schema_apply_is_idempotent() {
        // Database::new already applied it once.
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        init(db.pool()).await.unwrap();
        init(db.pool()).await.unwrap();

        assert!(db.health_check().await);
    }

    #[tokio::test]
    async fn test_schema_creates_expected_tables() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|(n,)| n.as_str()).collect();
        assert!(names.contains(&"inventory"));
        assert!(names.contains(&"users"));
        assert!(names.contains(&"sales"));
    }
}
