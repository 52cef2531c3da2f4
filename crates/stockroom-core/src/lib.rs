//! # stockroom-core: Pure Business Logic for Stockroom
//!
//! This crate is the heart of the Stockroom inventory tracker. It contains
//! the business rules as pure functions and types with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Desktop UI / export tooling (external collaborator)          │
//! └──────────────────────────────┬────────────────────────────────┘
//!                                │
//! ┌──────────────────────────────▼────────────────────────────────┐
//! │  stockroom-db (SQLite repositories)                           │
//! └──────────────────────────────┬────────────────────────────────┘
//!                                │
//! ┌──────────────────────────────▼────────────────────────────────┐
//! │  stockroom-core (THIS CRATE)                                  │
//! │                                                               │
//! │   types · money · validation · forecast · session · error     │
//! │                                                               │
//! │   NO I/O - NO DATABASE - PURE FUNCTIONS                       │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (InventoryItem, SaleEvent, UserAccount, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point)
//! - [`validation`] - Boundary input validation and parsing
//! - [`forecast`] - Least-squares sales-trend fit and projection
//! - [`session`] - Login session state and password digest
//! - [`error`] - Domain error types

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod forecast;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use forecast::{Prediction, TrendLine};
pub use money::Money;
pub use session::Session;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default restock threshold for the low-stock scan.
///
/// Items whose quantity is at or below this value are flagged.
/// Callers may pass their own threshold; this is the documented default.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// Default trailing window, in days, for the sales forecast.
pub const DEFAULT_FORECAST_WINDOW_DAYS: u32 = 30;

/// Maximum length accepted for an item name.
pub const MAX_ITEM_NAME_LEN: usize = 200;

/// Maximum length accepted for a username.
pub const MAX_USERNAME_LEN: usize = 50;
