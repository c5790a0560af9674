//! # Store Error Types
//!
//! Error types for the persistence medium and the store contract.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  sqlx::Error / quota / serde_json                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError ← backend failure, categorized                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError::OperationFailed { operation, source }                     │
//! │       │          (plus NotFound / CorruptData / VersionConflict)        │
//! │       ▼                                                                 │
//! │  CliError (in app) ← code + human-readable message                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use neonstock_core::ProductId;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Storage Error
// =============================================================================

/// Failures of the slot backend itself.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend could not be opened.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A write would exceed the medium's capacity.
    ///
    /// ## When This Occurs
    /// - Memory backend configured with a quota (models browser storage)
    /// - SQLite reports a full disk
    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    /// Document could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal backend error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to StorageError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → QuotaExceeded for SQLITE_FULL, else QueryFailed
/// sqlx::Error::PoolTimedOut   → PoolExhausted
/// sqlx::Error::PoolClosed     → ConnectionFailed
/// Other                       → Internal
/// ```
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();
                if msg.contains("database or disk is full") {
                    StorageError::QuotaExceeded {
                        needed: 0,
                        quota: 0,
                    }
                } else {
                    StorageError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => StorageError::PoolExhausted,

            sqlx::Error::PoolClosed => StorageError::ConnectionFailed("Pool is closed".to_string()),

            _ => StorageError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StorageError::MigrationFailed(err.to_string())
    }
}

/// Result type for backend operations.
pub type StorageResult<T> = Result<T, StorageError>;

// =============================================================================
// Store Error
// =============================================================================

/// Store operation, named in `OperationFailed` messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Initialize,
    List,
    Get,
    Create,
    Update,
    Delete,
    ListCategories,
    ComputeStats,
    Reset,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Operation::Initialize => "initialize inventory",
            Operation::List => "load products",
            Operation::Get => "load product",
            Operation::Create => "create product",
            Operation::Update => "update product",
            Operation::Delete => "delete product",
            Operation::ListCategories => "load categories",
            Operation::ComputeStats => "compute statistics",
            Operation::Reset => "reset inventory",
        };
        f.write_str(text)
    }
}

/// Errors of the InventoryStore contract.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The operation addressed an id with no product.
    #[error("Product not found: {id}")]
    NotFound { id: ProductId },

    /// The backend failed underneath an operation. Nothing was written.
    #[error("Failed to {operation}: {source}")]
    OperationFailed {
        operation: Operation,
        #[source]
        source: StorageError,
    },

    /// A slot holds data that cannot be read back.
    ///
    /// Recover with `InventoryStore::reset_to_seed`.
    #[error("Stored data in '{key}' is unreadable: {reason}")]
    CorruptData { key: String, reason: String },

    /// Optimistic concurrency check failed.
    #[error("Product {id} was modified concurrently: expected version {expected}, found {actual}")]
    VersionConflict { id: ProductId, expected: i64, actual: i64 },
}

impl StoreError {
    /// Creates a NotFound error.
    pub fn not_found(id: ProductId) -> Self {
        StoreError::NotFound { id }
    }

    /// Returns a closure wrapping a backend error for `operation`.
    pub(crate) fn failed(operation: Operation) -> impl FnOnce(StorageError) -> StoreError {
        move |source| StoreError::OperationFailed { operation, source }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_messages() {
        let err = StoreError::not_found(ProductId::new(4));
        assert_eq!(err.to_string(), "Product not found: 4");

        let err = StoreError::failed(Operation::Create)(StorageError::QuotaExceeded {
            needed: 10,
            quota: 5,
        });
        assert_eq!(
            err.to_string(),
            "Failed to create product: Storage quota exceeded: 10 bytes needed, 5 allowed"
        );
    }

    #[test]
    fn test_conflict_message() {
        let err = StoreError::VersionConflict {
            id: ProductId::new(2),
            expected: 3,
            actual: 4,
        };
        assert!(err.to_string().contains("expected version 3, found 4"));
    }
}
