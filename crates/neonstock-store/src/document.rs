//! The persisted product document: the collection slot plus its id counter.

use neonstock_core::{Product, ProductId};
use tracing::warn;

use crate::config::{CorruptionPolicy, StoreConfig};
use crate::error::{Operation, StorageError, StoreError, StoreResult};
use crate::storage::SlotStorage;

/// In-memory view of everything the store persists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Document {
    /// Products in insertion order.
    pub products: Vec<Product>,
    /// Highest id ever issued.
    pub counter: u64,
}

impl Document {
    pub fn new(products: Vec<Product>) -> Self {
        let counter = products.iter().map(|p| p.id.get()).max().unwrap_or(0);
        Document { products, counter }
    }

    /// Loads the document. `None` means the products slot has never been
    /// written.
    pub async fn load<S: SlotStorage>(
        storage: &S,
        config: &StoreConfig,
        operation: Operation,
    ) -> StoreResult<Option<Document>> {
        let key = &config.storage_key;
        let raw = storage
            .read(key)
            .await
            .map_err(StoreError::failed(operation))?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let products = match serde_json::from_str::<Vec<Product>>(&raw) {
            Ok(products) => products,
            Err(err) => match config.corruption_policy {
                CorruptionPolicy::Surface => {
                    return Err(StoreError::CorruptData {
                        key: key.clone(),
                        reason: err.to_string(),
                    })
                }
                CorruptionPolicy::TreatAsEmpty => {
                    warn!(key = %key, error = %err, "Unreadable product slot treated as empty");
                    Vec::new()
                }
            },
        };

        let counter = Self::read_counter(storage, config, operation).await?;
        Ok(Some(Document { products, counter }))
    }

    /// Highest id recorded in the counter slot. Read even when the product
    /// slot was discarded.
    async fn read_counter<S: SlotStorage>(
        storage: &S,
        config: &StoreConfig,
        operation: Operation,
    ) -> StoreResult<u64> {
        let counter_key = config.counter_key();
        let counter = storage
            .read(&counter_key)
            .await
            .map_err(StoreError::failed(operation))?;
        // A damaged counter is recoverable from the live ids
        Ok(match counter.map(|c| c.trim().parse::<u64>()) {
            Some(Ok(value)) => value,
            Some(Err(err)) => {
                warn!(key = %counter_key, error = %err, "Unreadable id counter ignored");
                0
            }
            None => 0,
        })
    }

    /// Loads the document, treating an absent slot as empty.
    pub async fn load_or_empty<S: SlotStorage>(
        storage: &S,
        config: &StoreConfig,
        operation: Operation,
    ) -> StoreResult<Document> {
        Ok(Self::load(storage, config, operation)
            .await?
            .unwrap_or_default())
    }

    /// Writes both slots in one batch.
    pub async fn save<S: SlotStorage>(
        &self,
        storage: &S,
        config: &StoreConfig,
        operation: Operation,
    ) -> StoreResult<()> {
        let entries = self
            .encode(config)
            .map_err(StoreError::failed(operation))?;
        storage
            .write_batch(entries)
            .await
            .map_err(StoreError::failed(operation))
    }

    fn encode(&self, config: &StoreConfig) -> Result<Vec<(String, String)>, StorageError> {
        let products = serde_json::to_string(&self.products)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(vec![
            (config.storage_key.clone(), products),
            (config.counter_key(), self.high_water().to_string()),
        ])
    }

    /// Highest id ever issued, never below a live id.
    fn high_water(&self) -> u64 {
        let max_live = self.products.iter().map(|p| p.id.get()).max().unwrap_or(0);
        self.counter.max(max_live)
    }

    /// Position of the product with `id`.
    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}
