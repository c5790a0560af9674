use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use super::SlotStorage;
use crate::error::{StorageError, StorageResult};

/// In-process slot storage.
///
/// Clones share the same slots, so a test can keep a handle and inspect or
/// tamper with what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the total bytes (keys plus values) the storage will hold.
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Bytes currently held.
    pub async fn used_bytes(&self) -> usize {
        let slots = self.slots.read().await;
        slots.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl SlotStorage for MemoryStorage {
    async fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn write_batch(&self, entries: Vec<(String, String)>) -> StorageResult<()> {
        let mut slots = self.slots.write().await;

        if let Some(quota) = self.quota {
            let mut needed: usize = slots.iter().map(|(k, v)| k.len() + v.len()).sum();
            for (key, value) in &entries {
                if let Some(old) = slots.get(key) {
                    needed -= key.len() + old.len();
                }
                needed += key.len() + value.len();
            }
            if needed > quota {
                warn!(needed, quota, "Write rejected: storage quota exceeded");
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }

        slots.extend(entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[tokio::test]
    async fn test_read_write_shared() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("a").await.unwrap(), None);

        storage
            .write_batch(vec![entry("a", "1"), entry("b", "2")])
            .await
            .unwrap();
        assert_eq!(storage.read("a").await.unwrap().as_deref(), Some("1"));

        // Clones see the same slots
        let other = storage.clone();
        other.write_batch(vec![entry("a", "3")]).await.unwrap();
        assert_eq!(storage.read("a").await.unwrap().as_deref(), Some("3"));
        assert_eq!(storage.read("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_quota_rejects_whole_batch() {
        let storage = MemoryStorage::new().with_quota(10);
        storage.write_batch(vec![entry("k", "1234")]).await.unwrap();
        assert_eq!(storage.used_bytes().await, 5);

        let err = storage
            .write_batch(vec![entry("j", "1"), entry("k", "123456789")])
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { quota: 10, .. }));

        // Nothing from the rejected batch landed
        assert_eq!(storage.read("j").await.unwrap(), None);
        assert_eq!(storage.read("k").await.unwrap().as_deref(), Some("1234"));
    }

    #[tokio::test]
    async fn test_quota_counts_replaced_values_once() {
        let storage = MemoryStorage::new().with_quota(6);
        storage.write_batch(vec![entry("k", "12345")]).await.unwrap();
        storage.write_batch(vec![entry("k", "54321")]).await.unwrap();
        assert_eq!(storage.used_bytes().await, 6);
    }
}
