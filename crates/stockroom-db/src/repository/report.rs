//! # Report Repository
//!
//! Read-only aggregations over the stock ledger. Reports are returned as
//! structured values; rendering them as text is the presentation layer's
//! job.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use stockroom_core::{InventoryItem, InventoryReport, Money};

/// Repository for reporting queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Catalog-wide totals: unit count and total stock value.
    ///
    /// An empty catalog yields an all-zero report, not an error. The
    /// value sum is exact integer arithmetic in cents.
    pub async fn totals(&self) -> DbResult<InventoryReport> {
        let (total_quantity, total_value_cents): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COALESCE(SUM(quantity), 0),
                COALESCE(SUM(quantity * price_cents), 0)
            FROM inventory
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        debug!(total_quantity, total_value_cents, "Generated inventory report");

        Ok(InventoryReport {
            total_quantity,
            total_value: Money::from_cents(total_value_cents),
        })
    }

    /// Items at or below the restock threshold, lowest stock first.
    ///
    /// An empty result is a valid outcome (nothing needs restocking).
    /// The documented default threshold is
    /// `stockroom_core::DEFAULT_LOW_STOCK_THRESHOLD`.
    pub async fn low_stock(&self, threshold: i64) -> DbResult<Vec<InventoryItem>> {
        let items = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT id, name, quantity, price_cents, last_updated
            FROM inventory
            WHERE quantity <= ?1
            ORDER BY quantity, name
            "#,
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        debug!(threshold, flagged = items.len(), "Low-stock scan");

        Ok(items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
