//! # Sale Repository
//!
//! Sale recording and the sales forecast.
//!
//! ## Recording a Sale
//! ```text
//! record_sale("Widget", 4)
//!      │
//!      ▼
//! BEGIN ─► UPDATE inventory: quantity - 4, refresh last_updated
//!      │        │
//!      │        ├── 0 rows matched ─► ROLLBACK ─► SaleOutcome::ItemNotFound
//!      │        ▼
//!      └─► INSERT sale event ─► COMMIT ─► SaleOutcome::Recorded
//! ```
//!
//! The decrement and the event insert are one transaction: a reader can
//! never observe a sale event without its decrement, or the reverse.
//! The decrement has NO floor - selling more than is on hand drives the
//! quantity negative. That is inherited policy (the ledger's quantity
//! docs flag it), not an invariant of this module.

use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::DbResult;
use stockroom_core::forecast::{predict_next_day, DailySales, Prediction};
use stockroom_core::validation::{validate_forecast_window, validate_sale_quantity};
use stockroom_core::{SaleEvent, SaleOutcome};

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Records a sale: decrements the item's stock and appends the sale
    /// event atomically.
    ///
    /// ## Returns
    /// * `Ok(SaleOutcome::Recorded)` - decrement applied, event appended
    /// * `Ok(SaleOutcome::ItemNotFound)` - no such item; nothing changed
    /// * `Err(DbError::Invalid)` - non-positive quantity
    pub async fn record_sale(&self, item_name: &str, quantity: i64) -> DbResult<SaleOutcome> {
        validate_sale_quantity(quantity)?;

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let decremented = sqlx::query(
            r#"
            UPDATE inventory SET
                quantity = quantity - ?2,
                last_updated = ?3
            WHERE name = ?1
            "#,
        )
        .bind(item_name)
        .bind(quantity)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        if decremented.rows_affected() == 0 {
            tx.rollback().await?;
            debug!(item = %item_name, "Sale rejected: item not found");
            return Ok(SaleOutcome::ItemNotFound);
        }

        let event = SaleEvent {
            id: generate_sale_id(),
            item_name: item_name.to_string(),
            quantity,
            sale_date: now,
        };

        sqlx::query(
            r#"
            INSERT INTO sales (id, item_name, quantity, sale_date)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&event.id)
        .bind(&event.item_name)
        .bind(event.quantity)
        .bind(event.sale_date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(item = %event.item_name, quantity = %event.quantity, "Sale recorded");
        Ok(SaleOutcome::Recorded(event))
    }

    /// Full sale history, oldest first. Feeds the export collaborator.
    pub async fn list(&self) -> DbResult<Vec<SaleEvent>> {
        let events = sqlx::query_as::<_, SaleEvent>(
            r#"
            SELECT id, item_name, quantity, sale_date
            FROM sales
            ORDER BY sale_date
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Sale history for one item, oldest first.
    pub async fn history_for_item(&self, item_name: &str) -> DbResult<Vec<SaleEvent>> {
        let events = sqlx::query_as::<_, SaleEvent>(
            r#"
            SELECT id, item_name, quantity, sale_date
            FROM sales
            WHERE item_name = ?1
            ORDER BY sale_date
            "#,
        )
        .bind(item_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Per-day sale totals for one item within a date range, ascending.
    ///
    /// Grouping happens in SQL on the calendar day of `sale_date`; days
    /// with no sales simply produce no row.
    pub async fn daily_totals(
        &self,
        item_name: &str,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> DbResult<Vec<DailySales>> {
        let rows = sqlx::query_as::<_, (chrono::NaiveDate, i64)>(
            r#"
            SELECT DATE(sale_date) AS day, SUM(quantity) AS total_quantity
            FROM sales
            WHERE item_name = ?1 AND sale_date BETWEEN ?2 AND ?3
            GROUP BY DATE(sale_date)
            ORDER BY day
            "#,
        )
        .bind(item_name)
        .bind(since)
        .bind(until)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(day, quantity)| DailySales { day, quantity })
            .collect())
    }

    /// Forecasts tomorrow's sales for an item from a trailing window of
    /// daily totals.
    ///
    /// Aggregates the last `days` days of history and fits a linear
    /// trend (see `stockroom_core::forecast`). Fewer than two distinct
    /// sale days yields [`Prediction::InsufficientData`], a normal
    /// outcome.
    ///
    /// ## Returns
    /// * `Ok(Prediction)` - forecast or the insufficient-data sentinel
    /// * `Err(DbError::Invalid)` - zero-day window
    pub async fn sales_prediction(&self, item_name: &str, days: u32) -> DbResult<Prediction> {
        validate_forecast_window(days)?;

        let until = Utc::now();
        let since = until - Duration::days(days as i64);

        let daily = self.daily_totals(item_name, since, until).await?;
        debug!(item = %item_name, days = %days, points = daily.len(), "Fitting sales trend");

        Ok(predict_next_day(&daily))
    }
}

/// Helper to generate a new sale event ID.
pub fn generate_sale_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
