//! # Error Types
//!
//! Validation error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! stockroom-core (this file)
//! └── ValidationError  - Input validation failures
//!
//! stockroom-db (separate crate)
//! └── DbError          - Database operation failures; wraps
//!                        ValidationError at the persistence boundary
//! ```
//!
//! "Not found" on remove/update/record-sale is deliberately NOT an error
//! anywhere in this workspace - those are outcome values in `types`,
//! because callers continue normally after them. Errors are reserved for
//! conflicts, invalid input, and store failures.
//!
//! Errors are enum variants, never bare strings, and each variant carries
//! the context (field, limits) a caller needs to render a message.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller-supplied input does not meet requirements.
/// Validation runs before business logic, so a failing input never
/// reaches the store.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., non-numeric text where a number is expected).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");

        let err = ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a whole number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "quantity has invalid format: must be a whole number"
        );
    }
}
