//! # Slot Storage
//!
//! A small key-value medium holding whole serialized documents.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         SlotStorage                                     │
//! │              read(key) · write_batch([(key, value)])                    │
//! │                               │                                         │
//! │              ┌────────────────┴────────────────┐                        │
//! │              ▼                                 ▼                        │
//! │      MemoryStorage                     SqliteStorage                    │
//! │      HashMap behind RwLock             storage_slots table              │
//! │      optional byte quota               one transaction per batch        │
//! │      (tests, browser model)            (CLI, durable)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `write_batch` is all-or-nothing: either every entry is stored or none
//! is. The store relies on this to keep the collection and its id counter
//! in step.

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use std::future::Future;

use crate::error::StorageResult;

/// Key-value medium for serialized slots.
pub trait SlotStorage: Send + Sync + 'static {
    /// Returns the value stored under `key`, or `None` if the slot is absent.
    fn read(&self, key: &str) -> impl Future<Output = StorageResult<Option<String>>> + Send;

    /// Stores every entry atomically, replacing existing values.
    fn write_batch(
        &self,
        entries: Vec<(String, String)>,
    ) -> impl Future<Output = StorageResult<()>> + Send;
}
