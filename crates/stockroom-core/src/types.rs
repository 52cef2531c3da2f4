//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐
//! │  InventoryItem  │   │    SaleEvent    │   │   UserAccount   │
//! │  ─────────────  │   │  ─────────────  │   │  ─────────────  │
//! │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │
//! │  name (unique)  │   │  item_name      │   │  username       │
//! │  quantity       │   │  quantity       │   │  password_hash  │
//! │  price_cents    │   │  sale_date      │   │  is_admin       │
//! │  last_updated   │   └─────────────────┘   └─────────────────┘
//! └─────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every persisted entity has:
//! - `id`: UUID v4 - immutable, used as the database primary key
//! - Business key (`name`, `username`) - human-readable, what the public
//!   operations look things up by

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Inventory Item
// =============================================================================

/// A catalog item tracked by the stock ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InventoryItem {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Item name - the unique business key.
    pub name: String,

    /// Units on hand. Expected to stay at or above zero, but the ledger
    /// itself applies no floor: a sale decrement can drive it negative.
    pub quantity: i64,

    /// Unit price in cents.
    pub price_cents: i64,

    /// Refreshed on every successful mutation of this row.
    pub last_updated: DateTime<Utc>,
}

impl InventoryItem {
    /// Returns the unit price as a Money value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the total value of units on hand (quantity x unit price).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }

    /// Checks whether this item sits at or below the restock threshold.
    #[inline]
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.quantity <= threshold
    }
}

// =============================================================================
// Sale Event
// =============================================================================

/// An immutable record of a quantity sold. Append-only: sale events are
/// never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleEvent {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Name of the item sold. References the catalog by business key;
    /// not enforced as a SQL foreign key, so history survives item
    /// removal.
    pub item_name: String,

    /// Units sold (positive).
    pub quantity: i64,

    /// When the sale was recorded.
    pub sale_date: DateTime<Utc>,
}

// =============================================================================
// User Account
// =============================================================================

/// A stored login account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct UserAccount {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Login name - the unique business key.
    pub username: String,

    /// Lowercase hex SHA-256 digest of the password. Single round,
    /// unsalted; this is the stored-format contract inherited from the
    /// data this system manages, not a recommendation.
    pub password_hash: String,

    /// Whether the account has administrative rights.
    pub is_admin: bool,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Inventory Report
// =============================================================================

/// Aggregate totals over the whole catalog.
///
/// Both fields are zero for an empty catalog - an empty report is a
/// valid result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryReport {
    /// Sum of quantities across all items.
    pub total_quantity: i64,

    /// Sum of quantity x unit price across all items.
    pub total_value: Money,
}

impl InventoryReport {
    /// An all-zero report (empty catalog).
    pub const fn empty() -> Self {
        InventoryReport {
            total_quantity: 0,
            total_value: Money::zero(),
        }
    }
}

// =============================================================================
// Mutation Inputs & Outcomes
// =============================================================================

/// Partial update to an inventory item. `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdate {
    /// New quantity, if changing.
    pub quantity: Option<i64>,

    /// New unit price, if changing.
    pub price: Option<Money>,
}

impl ItemUpdate {
    /// Update that only changes the quantity.
    pub const fn quantity(quantity: i64) -> Self {
        ItemUpdate {
            quantity: Some(quantity),
            price: None,
        }
    }

    /// Update that only changes the price.
    pub const fn price(price: Money) -> Self {
        ItemUpdate {
            quantity: None,
            price: Some(price),
        }
    }

    /// True when no field is set; such an update is a no-op.
    pub const fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.price.is_none()
    }
}

/// Outcome of an item update.
///
/// "Not found" is an informational outcome, not an error: callers are
/// expected to continue normally after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// The row was changed and `last_updated` refreshed.
    Updated,
    /// No fields were supplied; the store was not touched.
    NoChanges,
    /// No item with that name exists.
    NotFound,
}

/// Outcome of an item removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoveOutcome {
    /// The row was deleted.
    Removed,
    /// No item with that name exists; the catalog is unchanged.
    NotFound,
}

/// Outcome of recording a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleOutcome {
    /// The stock decrement applied and this event was appended, as one
    /// atomic unit.
    Recorded(SaleEvent),
    /// No item with that name exists; nothing was decremented and no
    /// event was appended.
    ItemNotFound,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item(quantity: i64, price_cents: i64) -> InventoryItem {
        InventoryItem {
            id: "00000000-0000-0000-0000-000000000001".to_string(),
            name: "Widget".to_string(),
            quantity,
            price_cents,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_stock_value() {
        let item = sample_item(10, 999);
        assert_eq!(item.stock_value().cents(), 9990);
        assert_eq!(item.price(), Money::from_cents(999));
    }

    #[test]
    fn test_low_stock_threshold_is_inclusive() {
        assert!(sample_item(10, 100).is_low_stock(10));
        assert!(sample_item(0, 100).is_low_stock(10));
        assert!(!sample_item(11, 100).is_low_stock(10));
    }

    #[test]
    fn test_item_update_emptiness() {
        assert!(ItemUpdate::default().is_empty());
        assert!(!ItemUpdate::quantity(5).is_empty());
        assert!(!ItemUpdate::price(Money::from_cents(100)).is_empty());
    }

    #[test]
    fn test_empty_report_is_all_zero() {
        let report = InventoryReport::empty();
        assert_eq!(report.total_quantity, 0);
        assert!(report.total_value.is_zero());
    }

    /// The export collaborator consumes items as plain serialized data;
    /// field names are part of that contract.
    #[test]
    fn test_item_serializes_with_stable_field_names() {
        let item = sample_item(3, 250);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["quantity"], 3);
        assert_eq!(json["price_cents"], 250);
        assert!(json["last_updated"].is_string());
    }
}
