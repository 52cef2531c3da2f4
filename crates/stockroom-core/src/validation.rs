//! # Validation Module
//!
//! Centralized boundary validation for Stockroom.
//!
//! Every public store operation validates its inputs through this module
//! before touching persistence, so a desktop form and an automated test
//! suite validate identically. This includes the string-to-number parsing
//! that entry forms need: free text is converted here, once, instead of
//! ad hoc at each call site.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_quantity, validate_item_name};
//!
//! let name = validate_item_name("  Widget  ").unwrap();
//! assert_eq!(name, "Widget");
//!
//! assert!(parse_quantity("12").is_ok());
//! assert!(parse_quantity("twelve").is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::{MAX_ITEM_NAME_LEN, MAX_USERNAME_LEN};

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most [`MAX_ITEM_NAME_LEN`] characters
pub fn validate_item_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

/// Validates a username and returns it trimmed.
pub fn validate_username(username: &str) -> ValidationResult<String> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    if username.len() > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: MAX_USERNAME_LEN,
        });
    }

    Ok(username.to_string())
}

/// Validates that a password was supplied.
///
/// No strength rules: the digest format is a fixed contract and the rest
/// is the operator's business.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a sale quantity.
///
/// A sale of zero or fewer units is meaningless; the catalog quantity on
/// the other hand is allowed to be any integer (see the ledger docs).
pub fn validate_sale_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must not be negative
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a forecast window in days.
pub fn validate_forecast_window(days: u32) -> ValidationResult<()> {
    if days == 0 {
        return Err(ValidationError::MustBePositive {
            field: "days".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Boundary Parsers
// =============================================================================

/// Parses free text into a whole-unit quantity.
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        })
}

/// Parses free text into a price.
pub fn parse_price(text: &str) -> ValidationResult<Money> {
    text.parse::<Money>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: e.to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
