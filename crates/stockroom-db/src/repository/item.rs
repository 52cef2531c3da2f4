//! # Item Repository
//!
//! Database operations for the stock ledger: the catalog of inventory
//! items, keyed by unique name.
//!
//! ## Outcome vs Error
//! Mutations against a missing item ([`ItemRepository::update`],
//! [`ItemRepository::remove`]) report a NotFound *outcome* and leave the
//! store untouched; only conflicts, invalid input, and store failures are
//! errors. Callers routinely hit the NotFound path (stale form state) and
//! continue normally.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use stockroom_core::validation::{validate_item_name, validate_price};
use stockroom_core::{InventoryItem, ItemUpdate, Money, RemoveOutcome, UpdateOutcome};

/// Repository for inventory item database operations.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Inserts a new catalog item with `last_updated = now`.
    ///
    /// ## Returns
    /// * `Ok(InventoryItem)` - the inserted row
    /// * `Err(DbError::UniqueViolation)` - an item with this name exists;
    ///   the existing row is untouched
    /// * `Err(DbError::Invalid)` - empty name or negative price
    pub async fn insert(&self, name: &str, quantity: i64, price: Money) -> DbResult<InventoryItem> {
        let name = validate_item_name(name)?;
        validate_price(price)?;

        let item = InventoryItem {
            id: generate_item_id(),
            name,
            quantity,
            price_cents: price.cents(),
            last_updated: Utc::now(),
        };

        debug!(name = %item.name, quantity = %item.quantity, "Inserting item");

        sqlx::query(
            r#"
            INSERT INTO inventory (id, name, quantity, price_cents, last_updated)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(item.quantity)
        .bind(item.price_cents)
        .bind(item.last_updated)
        .execute(&self.pool)
        .await?;

        Ok(item)
    }

    /// Gets an item by its name.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<InventoryItem>> {
        let item = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT id, name, quantity, price_cents, last_updated
            FROM inventory
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Lists the whole catalog.
    ///
    /// Ordered by name for stable display; the contract promises no
    /// particular order. This also feeds the export collaborator.
    pub async fn list(&self) -> DbResult<Vec<InventoryItem>> {
        let items = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT id, name, quantity, price_cents, last_updated
            FROM inventory
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Applies a partial update to an item.
    ///
    /// `None` fields keep their current value. Any applied change
    /// refreshes `last_updated`; an empty update touches nothing,
    /// including `last_updated`.
    ///
    /// ## Returns
    /// * `Ok(UpdateOutcome::Updated)` - a row was changed
    /// * `Ok(UpdateOutcome::NoChanges)` - no fields were supplied
    /// * `Ok(UpdateOutcome::NotFound)` - no item with that name
    pub async fn update(&self, name: &str, changes: ItemUpdate) -> DbResult<UpdateOutcome> {
        if changes.is_empty() {
            debug!(name = %name, "Item update with no changes");
            return Ok(UpdateOutcome::NoChanges);
        }

        if let Some(price) = changes.price {
            validate_price(price)?;
        }

        debug!(name = %name, ?changes, "Updating item");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE inventory SET
                quantity = COALESCE(?2, quantity),
                price_cents = COALESCE(?3, price_cents),
                last_updated = ?4
            WHERE name = ?1
            "#,
        )
        .bind(name)
        .bind(changes.quantity)
        .bind(changes.price.map(|p| p.cents()))
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(UpdateOutcome::NotFound);
        }

        Ok(UpdateOutcome::Updated)
    }

    /// Removes an item from the catalog.
    ///
    /// Removing a name that doesn't exist is a soft no-op reported as
    /// [`RemoveOutcome::NotFound`]. Sale history for the name is kept.
    pub async fn remove(&self, name: &str) -> DbResult<RemoveOutcome> {
        debug!(name = %name, "Removing item");

        let result = sqlx::query("DELETE FROM inventory WHERE name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(RemoveOutcome::NotFound);
        }

        Ok(RemoveOutcome::Removed)
    }

    /// Counts catalog items (for diagnostics and seed guards).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new item ID.
pub fn generate_item_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn memory_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_then_read_back() {
        let db = memory_db().await;

        db.items()
            .insert("Widget", 25, Money::from_cents(999))
            .await
            .unwrap();

        let item = db.items().get_by_name("Widget").await.unwrap().unwrap();
        assert_eq!(item.name, "Widget");
        assert_eq!(item.quantity, 25);
        assert_eq!(item.price_cents, 999);
        // last_updated was stamped at insert time.
        assert!((Utc::now() - item.last_updated).num_seconds() < 60);
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts_and_keeps_first() {
        let db = memory_db().await;

        db.items()
            .insert("Widget", 25, Money::from_cents(999))
            .await
            .unwrap();

        let err = db
            .items()
            .insert("Widget", 99, Money::from_cents(1))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));

        let item = db.items().get_by_name("Widget").await.unwrap().unwrap();
        assert_eq!(item.quantity, 25);
        assert_eq!(item.price_cents, 999);
        assert_eq!(db.items().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_bad_input() {
        let db = memory_db().await;

        let err = db
            .items()
            .insert("  ", 1, Money::from_cents(100))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Invalid(_)));

        let err = db
            .items()
            .insert("Widget", 1, Money::from_cents(-1))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Invalid(_)));

        assert_eq!(db.items().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_trims_name() {
        let db = memory_db().await;

        db.items()
            .insert("  Widget  ", 1, Money::from_cents(100))
            .await
            .unwrap();

        assert!(db.items().get_by_name("Widget").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_remove_missing_item_is_soft_noop() {
        let db = memory_db().await;

        db.items()
            .insert("Widget", 25, Money::from_cents(999))
            .await
            .unwrap();

        let outcome = db.items().remove("Gadget").await.unwrap();
        assert_eq!(outcome, RemoveOutcome::NotFound);
        assert_eq!(db.items().count().await.unwrap(), 1);

        let outcome = db.items().remove("Widget").await.unwrap();
        assert_eq!(outcome, RemoveOutcome::Removed);
        assert_eq!(db.items().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_field() {
        let db = memory_db().await;

        db.items()
            .insert("Widget", 25, Money::from_cents(999))
            .await
            .unwrap();

        let outcome = db
            .items()
            .update("Widget", ItemUpdate::quantity(40))
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Updated);

        let item = db.items().get_by_name("Widget").await.unwrap().unwrap();
        assert_eq!(item.quantity, 40);
        assert_eq!(item.price_cents, 999);

        let outcome = db
            .items()
            .update("Widget", ItemUpdate::price(Money::from_cents(1299)))
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Updated);

        let item = db.items().get_by_name("Widget").await.unwrap().unwrap();
        assert_eq!(item.quantity, 40);
        assert_eq!(item.price_cents, 1299);
    }

    #[tokio::test]
    async fn test_update_refreshes_last_updated() {
        let db = memory_db().await;

        db.items()
            .insert("Widget", 25, Money::from_cents(999))
            .await
            .unwrap();
        let before = db.items().get_by_name("Widget").await.unwrap().unwrap();

        db.items()
            .update("Widget", ItemUpdate::quantity(26))
            .await
            .unwrap();
        let after = db.items().get_by_name("Widget").await.unwrap().unwrap();

        assert!(after.last_updated >= before.last_updated);
    }

    #[tokio::test]
    async fn test_empty_update_touches_nothing() {
        let db = memory_db().await;

        db.items()
            .insert("Widget", 25, Money::from_cents(999))
            .await
            .unwrap();
        let before = db.items().get_by_name("Widget").await.unwrap().unwrap();

        let outcome = db
            .items()
            .update("Widget", ItemUpdate::default())
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::NoChanges);

        let after = db.items().get_by_name("Widget").await.unwrap().unwrap();
        assert_eq!(after, before);
    }

    #[tokio::test]
    async fn test_update_missing_item_reports_not_found() {
        let db = memory_db().await;

        let outcome = db
            .items()
            .update("Ghost", ItemUpdate::quantity(1))
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_list_returns_whole_catalog() {
        let db = memory_db().await;

        db.items()
            .insert("Widget", 25, Money::from_cents(999))
            .await
            .unwrap();
        db.items()
            .insert("Anvil", 3, Money::from_cents(4999))
            .await
            .unwrap();

        let items = db.items().list().await.unwrap();
        assert_eq!(items.len(), 2);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert!(names.contains(&"Widget"));
        assert!(names.contains(&"Anvil"));
    }
}
