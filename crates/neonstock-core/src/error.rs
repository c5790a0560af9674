//! # Error Types
//!
//! Domain-specific error types for neonstock-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  neonstock-core errors (this file)                                     │
//! │  ├── CoreError        - Parsing / domain errors                        │
//! │  └── ValidationError  - Product form failures                          │
//! │                                                                         │
//! │  neonstock-store errors (separate crate)                               │
//! │  ├── StorageError     - Backend failures (SQLite, quota)               │
//! │  └── StoreError       - NotFound / OperationFailed / CorruptData       │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store never raises [`ValidationError`]: validation is the caller's
//! job, performed with [`crate::validation`] before a store call.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product id could not be read from the caller's representation.
    ///
    /// ## When This Occurs
    /// - `"abc"` or `"-3"` passed where an id is expected
    /// - `"0"` (ids start at 1)
    #[error("Invalid product id: '{0}'")]
    InvalidProductId(String),

    /// A monetary amount could not be parsed.
    #[error("Invalid amount '{input}': {reason}")]
    InvalidMoney { input: String, reason: String },

    /// A stock status name was not recognised.
    #[error("Unknown stock status '{0}'. Valid options: in-stock, low-stock, out-of-stock")]
    UnknownStatus(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Product form validation errors.
///
/// Messages match what the dashboard form shows next to each field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly greater than zero.
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must be 0 or greater")]
    MustBeNonNegative { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::MustBeNonNegative { field }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "SKU".to_string(),
        };
        assert_eq!(err.to_string(), "SKU is required");

        let err = ValidationError::MustBePositive {
            field: "Price".to_string(),
        };
        assert_eq!(err.to_string(), "Price must be greater than 0");

        let err = ValidationError::MustBeNonNegative {
            field: "Quantity".to_string(),
        };
        assert_eq!(err.to_string(), "Quantity must be 0 or greater");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(validation_err.field(), "name");

        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_invalid_id_message() {
        let err = CoreError::InvalidProductId("abc".to_string());
        assert_eq!(err.to_string(), "Invalid product id: 'abc'");
    }
}
