//! # stockroom-db: Database Layer for Stockroom
//!
//! This crate provides database access for the Stockroom inventory
//! tracker. It uses SQLite for local storage with sqlx for async
//! operations.
//!
//! ## Architecture Position
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Caller (desktop UI / CLI collaborator)                       │
//! │       │                                                       │
//! │       ▼                                                       │
//! │  ┌─────────────────────────────────────────────────────────┐  │
//! │  │                stockroom-db (THIS CRATE)                │  │
//! │  │                                                         │  │
//! │  │  ┌──────────┐  ┌──────────────────────┐  ┌──────────┐  │  │
//! │  │  │ Database │  │     Repositories     │  │  Schema  │  │  │
//! │  │  │ (pool.rs)│◄─│ items sales users    │  │ (embedded│  │  │
//! │  │  │          │  │ reports              │  │  DDL)    │  │  │
//! │  │  └──────────┘  └──────────────────────┘  └──────────┘  │  │
//! │  └─────────────────────────────────────────────────────────┘  │
//! │       │                                                       │
//! │       ▼                                                       │
//! │  SQLite database file (or :memory: for tests)                 │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`schema`] - Embedded schema, applied on connect
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (item, sale, user, report)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("stockroom.db")).await?;
//!
//! db.items().insert("Widget", 25, "9.99".parse()?).await?;
//! let report = db.reports().totals().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::item::ItemRepository;
pub use repository::report::ReportRepository;
pub use repository::sale::SaleRepository;
pub use repository::user::UserRepository;
