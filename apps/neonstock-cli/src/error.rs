//! # CLI Error Type
//!
//! Unified error type for every command.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the neonstock CLI                      │
//! │                                                                         │
//! │  Command handler                                                       │
//! │  Result<Output, CliError>                                              │
//! │         │                                                               │
//! │         ├── ValidationError (form rules) ─────────┐                    │
//! │         ├── CoreError (bad id / money / status) ──┤                    │
//! │         ├── StoreError (not found, conflict ...) ─┼──► CliError        │
//! │         ├── StorageError (opening the database) ──┤    { code, msg }   │
//! │         └── ConfigError (config file / env) ──────┘        │           │
//! │                                                             ▼           │
//! │                                   stderr: "error[NOT_FOUND]: ..."      │
//! │                                   or --json: {"code": ..., "message"}  │
//! │                                   exit status 1                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use neonstock_core::{CoreError, ValidationError};
use neonstock_store::{StorageError, StoreError};
use serde::Serialize;
use std::fmt;

use crate::config::ConfigError;

/// Error reported to the user when a command fails.
///
/// ## Serialization
/// With `--json` this is what lands on stderr:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code for scripts
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No product with the requested id
    NotFound,

    /// Input failed the form rules
    ValidationError,

    /// The product changed since it was read
    Conflict,

    /// Stored data can't be parsed; `neonstock reset` recovers
    CorruptData,

    /// The database failed underneath the store
    StorageError,

    /// Config file or environment is invalid
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::CorruptData => "CORRUPT_DATA",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }

    /// Joins every field error of a form into one message.
    pub fn from_field_errors(errors: &[ValidationError]) -> Self {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        CliError::validation(message)
    }
}

/// Converts store errors to CLI errors.
impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::NotFound { .. } => CliError::new(ErrorCode::NotFound, err.to_string()),
            StoreError::VersionConflict { .. } => {
                CliError::new(ErrorCode::Conflict, err.to_string())
            }
            StoreError::CorruptData { .. } => CliError::new(
                ErrorCode::CorruptData,
                format!("{}. Run `neonstock reset` to restore the starter catalogue", err),
            ),
            StoreError::OperationFailed { operation, source } => {
                tracing::error!(%operation, error = %source, "Store operation failed");
                CliError::new(ErrorCode::StorageError, err.to_string())
            }
        }
    }
}

/// Failures opening the database.
impl From<StorageError> for CliError {
    fn from(err: StorageError) -> Self {
        tracing::error!(error = %err, "Storage unavailable");
        CliError::new(ErrorCode::StorageError, err.to_string())
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => CliError::validation(e.to_string()),
            other => CliError::validation(other.to_string()),
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::validation(err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for CliError {}
