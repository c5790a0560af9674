//! # neonstock-store: InventoryStore for NeonStock
//!
//! The only component that touches persisted product data. It assigns ids,
//! stamps timestamps, seeds the catalogue on first run and keeps concurrent
//! writers from losing each other's updates.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        NeonStock Data Flow                              │
//! │                                                                         │
//! │  neonstock CLI command (list / add / adjust ...)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  neonstock-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐   ┌───────────────┐   ┌────────────────┐  │   │
//! │  │   │ InventoryStore │   │   Document    │   │  SlotStorage   │  │   │
//! │  │   │ (inventory.rs) │──►│ (document.rs) │──►│  Memory/SQLite │  │   │
//! │  │   │ CRUD + stats   │   │ products +    │   │  (storage/)    │  │   │
//! │  │   │ writer lock    │   │ id counter    │   │                │  │   │
//! │  │   └────────────────┘   └───────────────┘   └────────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  SQLite: storage_slots(key, value, updated_at)                  │   │
//! │  │  ~/.local/share/neonstock/neonstock.db                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`inventory`] - The `InventoryStore` handle
//! - [`storage`] - Slot backends (in-memory and SQLite)
//! - [`pool`] - SQLite connection pool
//! - [`migrations`] - Embedded database migrations
//! - [`config`] - Latency and corruption handling
//! - [`seed`] - First-run catalogue
//! - [`error`] - Storage and store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use neonstock_store::{Database, DbConfig, InventoryStore, SqliteStorage, StoreConfig};
//!
//! let db = Database::new(DbConfig::new("neonstock.db")).await?;
//! let store = InventoryStore::new(SqliteStorage::new(db), StoreConfig::default());
//! store.initialize().await?;
//!
//! let stats = store.compute_stats().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
mod document;
pub mod error;
pub mod inventory;
pub mod migrations;
pub mod pool;
pub mod seed;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{CorruptionPolicy, Latency, StoreConfig};
pub use error::{Operation, StorageError, StorageResult, StoreError, StoreResult};
pub use inventory::InventoryStore;
pub use pool::{Database, DbConfig};
pub use storage::{MemoryStorage, SlotStorage, SqliteStorage};
