//! # User Repository
//!
//! The credential store: account creation and login verification.
//!
//! Passwords are stored as single-round unsalted SHA-256 digests (see
//! `stockroom_core::session::password_digest` for why that format is
//! frozen). Verification fetches the account by username and compares
//! digests in code; a mismatch or unknown username both come back as
//! `Ok(None)` so the caller cannot distinguish them.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::DbResult;
use stockroom_core::session::password_digest;
use stockroom_core::validation::{validate_password, validate_username};
use stockroom_core::UserAccount;

/// Repository for user account database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Creates an account, storing the password digest.
    ///
    /// ## Returns
    /// * `Ok(UserAccount)` - the stored account
    /// * `Err(DbError::UniqueViolation)` - username already exists
    /// * `Err(DbError::Invalid)` - empty username or password
    pub async fn add_user(
        &self,
        username: &str,
        password: &str,
        is_admin: bool,
    ) -> DbResult<UserAccount> {
        let username = validate_username(username)?;
        validate_password(password)?;

        let account = UserAccount {
            id: generate_user_id(),
            username,
            password_hash: password_digest(password),
            is_admin,
            created_at: Utc::now(),
        };

        info!(username = %account.username, is_admin = %account.is_admin, "Adding user");

        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, is_admin, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&account.id)
        .bind(&account.username)
        .bind(&account.password_hash)
        .bind(account.is_admin)
        .bind(account.created_at)
        .execute(&self.pool)
        .await?;

        Ok(account)
    }

    /// Gets an account by username.
    pub async fn get_by_username(&self, username: &str) -> DbResult<Option<UserAccount>> {
        let account = sqlx::query_as::<_, UserAccount>(
            r#"
            SELECT id, username, password_hash, is_admin, created_at
            FROM users
            WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Verifies a username/password pair.
    ///
    /// ## Returns
    /// * `Ok(Some(UserAccount))` - digests match; the caller may
    ///   establish a `Session` from this
    /// * `Ok(None)` - unknown username or wrong password (deliberately
    ///   indistinguishable)
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> DbResult<Option<UserAccount>> {
        let Some(account) = self.get_by_username(username).await? else {
            debug!(username = %username, "Authentication failed: unknown user");
            return Ok(None);
        };

        if account.password_hash != password_digest(password) {
            debug!(username = %username, "Authentication failed: digest mismatch");
            return Ok(None);
        }

        debug!(username = %username, "Authentication succeeded");
        Ok(Some(account))
    }

    /// Counts stored accounts (for diagnostics and seed guards).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Helper to generate a new user ID.
pub fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================
