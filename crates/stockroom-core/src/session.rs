//! # Session & Credentials
//!
//! The login session is an explicit value owned by the caller (typically
//! the UI layer), not hidden process-wide state. Authentication itself
//! happens in the persistence layer; this module holds what comes out of
//! it and the digest function both sides share.

use sha2::{Digest, Sha256};

use crate::types::UserAccount;

// =============================================================================
// Password Digest
// =============================================================================

/// Computes the stored digest of a password: lowercase hex SHA-256,
/// single round, unsalted.
///
/// This matches the format of existing stored rows and must not change
/// without a data migration. It is not a hardened password hash: no
/// salt, no work factor.
pub fn password_digest(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    format!("{:x}", digest)
}

// =============================================================================
// Session
// =============================================================================

/// The transient record of which account is currently authenticated.
///
/// ## Usage
/// ```rust
/// use stockroom_core::Session;
///
/// let mut session = Session::new();
/// assert!(!session.is_authenticated());
///
/// // after a successful authenticate() call:
/// // session.login(account);
///
/// session.logout(); // idempotent
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<UserAccount>,
}

impl Session {
    /// Creates a logged-out session.
    pub fn new() -> Self {
        Session { current: None }
    }

    /// Establishes the session for an authenticated account.
    pub fn login(&mut self, account: UserAccount) {
        self.current = Some(account);
    }

    /// Clears the session. Safe to call when already logged out.
    pub fn logout(&mut self) {
        self.current = None;
    }

    /// The currently authenticated account, if any.
    pub fn current(&self) -> Option<&UserAccount> {
        self.current.as_ref()
    }

    /// True when an account is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// True when the logged-in account has admin rights. A logged-out
    /// session is never an admin.
    pub fn is_admin(&self) -> bool {
        self.current.as_ref().map(|a| a.is_admin).unwrap_or(false)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn account(is_admin: bool) -> UserAccount {
        UserAccount {
            id: "00000000-0000-0000-0000-000000000001".to_string(),
            username: "hk".to_string(),
            password_hash: password_digest("123"),
            is_admin,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_digest_is_deterministic_hex() {
        let a = password_digest("123");
        let b = password_digest("123");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(password_digest("123"), password_digest("124"));
    }

    #[test]
    fn test_digest_known_vector() {
        // SHA-256 of the empty string, the classic fixed point.
        assert_eq!(
            password_digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_login_logout_cycle() {
        let mut session = Session::new();
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert!(session.current().is_none());

        session.login(account(false));
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.current().unwrap().username, "hk");

        session.logout();
        assert!(!session.is_authenticated());

        // Idempotent: logging out twice is fine.
        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_admin_flag_follows_account() {
        let mut session = Session::new();
        session.login(account(true));
        assert!(session.is_admin());

        session.login(account(false));
        assert!(!session.is_admin());
    }
}
