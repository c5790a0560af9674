//! # InventoryStore
//!
//! The system of record for products. Every read and write of the product
//! collection goes through this handle.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Mutation (create / update / delete)                  │
//! │                                                                         │
//! │  caller                                                                │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  sleep(latency)            ← simulated round-trip                      │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  writer.lock()             ← one mutation at a time                    │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  Document::load            ← whole collection + id counter             │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  mutate in memory          ← stamp updatedAt, bump version             │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  write_batch               ← collection + counter, all or nothing      │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  snapshot returned (owned clone)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads skip the writer lock and see the last committed batch.
//!
//! ## Usage
//! ```rust,ignore
//! let store = InventoryStore::new(MemoryStorage::new(), StoreConfig::default());
//! store.initialize().await?;
//!
//! let product = store.get_by_id(3u64).await?;
//! store.update_quantity(product.id, product.quantity + 1).await?;
//! let stats = store.compute_stats().await?;
//! ```

use chrono::Utc;
use neonstock_core::inventory::{advance_timestamp, compute_stats, distinct_categories, next_product_id};
use neonstock_core::{
    InventoryStats, NewProduct, Product, ProductFilter, ProductId, ProductPatch, StockStatus,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::document::Document;
use crate::error::{Operation, StoreError, StoreResult};
use crate::seed::seed_products;
use crate::storage::SlotStorage;

struct Inner<S> {
    storage: S,
    config: StoreConfig,
    /// Serializes read-modify-write cycles.
    writer: Mutex<()>,
}

/// Handle to the product collection.
///
/// Cloning is cheap and every clone shares the same storage and writer lock,
/// so one store can be handed to many tasks.
pub struct InventoryStore<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for InventoryStore<S> {
    fn clone(&self) -> Self {
        InventoryStore {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: SlotStorage> InventoryStore<S> {
    /// Creates a store over `storage`. Nothing is read until the first call.
    pub fn new(storage: S, config: StoreConfig) -> Self {
        InventoryStore {
            inner: Arc::new(Inner {
                storage,
                config,
                writer: Mutex::new(()),
            }),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    pub fn storage(&self) -> &S {
        &self.inner.storage
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Seeds the collection if its slot has never been written.
    ///
    /// A slot that exists is left alone, even when it cannot be parsed.
    ///
    /// ## Returns
    /// `true` if the seed dataset was written.
    pub async fn initialize(&self) -> StoreResult<bool> {
        let _guard = self.inner.writer.lock().await;
        let key = &self.inner.config.storage_key;

        let existing = self
            .inner
            .storage
            .read(key)
            .await
            .map_err(StoreError::failed(Operation::Initialize))?;
        if existing.is_some() {
            debug!(key = %key, "Product slot present, skipping seed");
            return Ok(false);
        }

        let document = Document::new(seed_products());
        self.save(&document, Operation::Initialize).await?;

        info!(key = %key, products = document.products.len(), "Seeded product collection");
        Ok(true)
    }

    /// Overwrites the collection with the seed dataset and resets the id
    /// counter. Recovers a slot that fails with `CorruptData`.
    ///
    /// ## Returns
    /// Number of products written.
    pub async fn reset_to_seed(&self) -> StoreResult<usize> {
        let _guard = self.inner.writer.lock().await;

        let document = Document::new(seed_products());
        self.save(&document, Operation::Reset).await?;

        info!(
            key = %self.inner.config.storage_key,
            products = document.products.len(),
            "Product collection reset to seed"
        );
        Ok(document.products.len())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All products in storage order. An absent slot reads as empty.
    pub async fn list(&self) -> StoreResult<Vec<Product>> {
        pause(self.inner.config.latency.list).await;
        let document = self.load(Operation::List).await?;
        debug!(count = document.products.len(), "Listed products");
        Ok(document.products)
    }

    /// The product with `id`.
    ///
    /// ## Errors
    /// `StoreError::NotFound` when no product has that id.
    pub async fn get_by_id(&self, id: impl Into<ProductId>) -> StoreResult<Product> {
        let id = id.into();
        pause(self.inner.config.latency.get).await;

        let document = self.load(Operation::Get).await?;
        document
            .products
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Products matching a dashboard filter, in storage order.
    pub async fn search(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>> {
        pause(self.inner.config.latency.list).await;
        let document = self.load(Operation::List).await?;
        let products = filter.apply(document.products);
        debug!(
            search = ?filter.search,
            category = ?filter.category,
            status = ?filter.status,
            count = products.len(),
            "Searched products"
        );
        Ok(products)
    }

    /// Products currently in `status`.
    pub async fn list_by_status(&self, status: StockStatus) -> StoreResult<Vec<Product>> {
        self.search(&ProductFilter::all().with_status(status)).await
    }

    /// Distinct categories, sorted ascending.
    pub async fn list_categories(&self) -> StoreResult<Vec<String>> {
        pause(self.inner.config.latency.categories).await;
        let document = self.load(Operation::ListCategories).await?;
        Ok(distinct_categories(&document.products))
    }

    /// Dashboard totals, computed from a full scan.
    pub async fn compute_stats(&self) -> StoreResult<InventoryStats> {
        pause(self.inner.config.latency.stats).await;
        let document = self.load(Operation::ComputeStats).await?;
        Ok(compute_stats(&document.products))
    }

    /// Stock status of a product. Never stored.
    #[inline]
    pub fn classify_status(product: &Product) -> StockStatus {
        product.status()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds a product. The store assigns the id, both timestamps and
    /// version 1; field values are stored as given.
    ///
    /// ## Errors
    /// `OperationFailed` if the write is rejected (e.g. quota). The
    /// collection is unchanged in that case.
    pub async fn create(&self, new_product: NewProduct) -> StoreResult<Product> {
        pause(self.inner.config.latency.create).await;
        let _guard = self.inner.writer.lock().await;

        let mut document = self.load(Operation::Create).await?;
        let id = next_product_id(document.counter, &document.products).ok_or_else(|| {
            StoreError::CorruptData {
                key: self.inner.config.counter_key(),
                reason: "no product ids left to issue".to_string(),
            }
        })?;
        let product = new_product.into_product(id, Utc::now());

        document.counter = id.get();
        document.products.push(product.clone());
        self.save(&document, Operation::Create).await?;

        debug!(id = %id, sku = %product.sku, "Created product");
        Ok(product)
    }

    /// Merges `patch` into the product with `id`.
    ///
    /// The id and `created_at` are kept; `updated_at` moves forward and
    /// `version` goes up by one.
    pub async fn update(&self, id: impl Into<ProductId>, patch: ProductPatch) -> StoreResult<Product> {
        let id = id.into();
        pause(self.inner.config.latency.update).await;
        self.apply_patch(id, &patch, None).await
    }

    /// Like [`update`](Self::update), but only if the stored version is
    /// still `expected_version`.
    ///
    /// ## Errors
    /// `VersionConflict` when another write got there first.
    pub async fn update_checked(
        &self,
        id: impl Into<ProductId>,
        expected_version: i64,
        patch: ProductPatch,
    ) -> StoreResult<Product> {
        let id = id.into();
        pause(self.inner.config.latency.update).await;
        self.apply_patch(id, &patch, Some(expected_version)).await
    }

    /// Sets only the quantity.
    pub async fn update_quantity(&self, id: impl Into<ProductId>, quantity: i64) -> StoreResult<Product> {
        self.update(id, ProductPatch::quantity(quantity)).await
    }

    /// Removes the product with `id`.
    pub async fn delete(&self, id: impl Into<ProductId>) -> StoreResult<()> {
        let id = id.into();
        pause(self.inner.config.latency.delete).await;
        let _guard = self.inner.writer.lock().await;

        let mut document = self.load(Operation::Delete).await?;
        let before = document.products.len();
        document.products.retain(|p| p.id != id);
        if document.products.len() == before {
            return Err(StoreError::not_found(id));
        }

        self.save(&document, Operation::Delete).await?;
        debug!(id = %id, "Deleted product");
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn apply_patch(
        &self,
        id: ProductId,
        patch: &ProductPatch,
        expected_version: Option<i64>,
    ) -> StoreResult<Product> {
        let _guard = self.inner.writer.lock().await;

        let mut document = self.load(Operation::Update).await?;
        let index = document
            .position(id)
            .ok_or_else(|| StoreError::not_found(id))?;

        let product = &mut document.products[index];
        if let Some(expected) = expected_version {
            if product.version != expected {
                return Err(StoreError::VersionConflict {
                    id,
                    expected,
                    actual: product.version,
                });
            }
        }

        patch.apply_to(product);
        product.updated_at = advance_timestamp(product.updated_at, Utc::now());
        product.version += 1;
        let updated = product.clone();

        self.save(&document, Operation::Update).await?;
        debug!(id = %id, version = updated.version, "Updated product");
        Ok(updated)
    }

    async fn load(&self, operation: Operation) -> StoreResult<Document> {
        Document::load_or_empty(&self.inner.storage, &self.inner.config, operation).await
    }

    async fn save(&self, document: &Document, operation: Operation) -> StoreResult<()> {
        document
            .save(&self.inner.storage, &self.inner.config, operation)
            .await
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CorruptionPolicy, Latency};
    use crate::error::StorageError;
    use crate::pool::{Database, DbConfig};
    use crate::storage::{MemoryStorage, SqliteStorage};
    use neonstock_core::Money;

    fn empty_store() -> InventoryStore<MemoryStorage> {
        InventoryStore::new(MemoryStorage::new(), StoreConfig::immediate())
    }

    async fn seeded_store() -> InventoryStore<MemoryStorage> {
        let store = empty_store();
        assert!(store.initialize().await.unwrap());
        store
    }

    fn form(name: &str, category: &str, quantity: i64, price_cents: i64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            sku: format!("SKU-{}", name.to_uppercase()),
            category: category.to_string(),
            quantity,
            price_cents,
            location: Some("A1".to_string()),
            ..NewProduct::default()
        }
    }

    async fn corrupt(storage: &MemoryStorage) {
        storage
            .write_batch(vec![("neonstock-products".to_string(), "[{\"Id\":".to_string())])
            .await
            .unwrap();
    }

    // -------------------------------------------------------------------------
    // Initialization
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_initialize_seeds_once() {
        let store = empty_store();
        assert!(store.initialize().await.unwrap());
        let seeded = store.list().await.unwrap();
        assert_eq!(seeded.len(), seed_products().len());

        store.delete(seeded[0].id).await.unwrap();
        assert!(!store.initialize().await.unwrap());
        assert_eq!(store.list().await.unwrap().len(), seeded.len() - 1);
    }

    #[tokio::test]
    async fn test_initialize_leaves_corrupt_slot() {
        let storage = MemoryStorage::new();
        corrupt(&storage).await;
        let store = InventoryStore::new(storage.clone(), StoreConfig::immediate());

        assert!(!store.initialize().await.unwrap());
        assert!(matches!(store.list().await, Err(StoreError::CorruptData { .. })));
    }

    #[tokio::test]
    async fn test_absent_slot_reads_empty() {
        let store = empty_store();
        assert!(store.list().await.unwrap().is_empty());
        assert!(store.list_categories().await.unwrap().is_empty());
        assert_eq!(store.compute_stats().await.unwrap(), InventoryStats::default());
    }

    // -------------------------------------------------------------------------
    // Create / read
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_sequential_ids_from_empty() {
        let store = empty_store();
        let mut ids = Vec::new();
        for n in 0..5 {
            let product = store
                .create(form(&format!("item{n}"), "Misc", 1, 100))
                .await
                .unwrap();
            assert_eq!(product.version, 1);
            assert_eq!(product.created_at, product.updated_at);
            ids.push(product.id.get());
        }
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_ids_continue_after_seed() {
        let store = seeded_store().await;
        let created = store.create(form("lamp", "Lighting", 3, 999)).await.unwrap();
        assert_eq!(created.id.get(), seed_products().len() as u64 + 1);
        assert_eq!(store.get_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_deleted_max_id_not_reissued() {
        let store = empty_store();
        store.create(form("a", "Misc", 1, 100)).await.unwrap();
        let second = store.create(form("b", "Misc", 1, 100)).await.unwrap();
        store.delete(second.id).await.unwrap();

        let third = store.create(form("c", "Misc", 1, 100)).await.unwrap();
        assert_eq!(third.id.get(), 3);
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let store = seeded_store().await;
        let err = store.get_by_id(999u64).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id } if id.get() == 999));
    }

    #[tokio::test]
    async fn test_textual_id_lookup() {
        let store = seeded_store().await;
        let id: ProductId = " 2 ".parse().unwrap();
        assert_eq!(store.get_by_id(id).await.unwrap().id.get(), 2);
    }

    #[tokio::test]
    async fn test_snapshots_are_owned() {
        let store = seeded_store().await;
        let mut product = store.get_by_id(1u64).await.unwrap();
        product.quantity = -40;
        assert_ne!(store.get_by_id(1u64).await.unwrap().quantity, -40);
    }

    // -------------------------------------------------------------------------
    // Update / delete
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_update_preserves_identity() {
        let store = seeded_store().await;
        let before = store.get_by_id(1u64).await.unwrap();

        let patch = ProductPatch {
            name: Some("Neon LED Strip 10m".to_string()),
            price_cents: Some(4999),
            ..ProductPatch::default()
        };
        let after = store.update(1u64, patch).await.unwrap();

        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
        assert_eq!(after.version, before.version + 1);
        assert_eq!(after.name, "Neon LED Strip 10m");
        assert_eq!(after.price_cents, 4999);
        // Untouched fields survive the merge
        assert_eq!(after.sku, before.sku);
        assert_eq!(after.location, before.location);
        assert_eq!(store.get_by_id(1u64).await.unwrap(), after);
    }

    #[tokio::test]
    async fn test_back_to_back_updates_advance_timestamp() {
        let store = empty_store();
        let created = store.create(form("a", "Misc", 1, 100)).await.unwrap();
        let first = store.update_quantity(created.id, 2).await.unwrap();
        let second = store.update_quantity(created.id, 3).await.unwrap();
        assert!(first.updated_at > created.updated_at);
        assert!(second.updated_at > first.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let store = seeded_store().await;
        assert!(matches!(
            store.update_quantity(404u64, 1).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_checked_conflict() {
        let store = seeded_store().await;
        let product = store.get_by_id(3u64).await.unwrap();

        store
            .update_checked(3u64, product.version, ProductPatch::quantity(7))
            .await
            .unwrap();

        let err = store
            .update_checked(3u64, product.version, ProductPatch::quantity(9))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::VersionConflict { expected, actual, .. }
                if expected == product.version && actual == product.version + 1
        ));
        assert_eq!(store.get_by_id(3u64).await.unwrap().quantity, 7);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let store = seeded_store().await;
        store.delete(4u64).await.unwrap();
        assert!(matches!(store.get_by_id(4u64).await, Err(StoreError::NotFound { .. })));
        assert!(matches!(store.delete(4u64).await, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_then_delete_leaves_no_categories() {
        let store = empty_store();
        let product = store.create(form("a", "Gadgets", 1, 100)).await.unwrap();
        assert_eq!(store.list_categories().await.unwrap(), vec!["Gadgets"]);

        store.delete(product.id).await.unwrap();
        assert!(store.list_categories().await.unwrap().is_empty());
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_stats_total_value() {
        let store = empty_store();
        store.create(form("a", "X", 3, 250)).await.unwrap();
        store.create(form("b", "Y", 0, 1000)).await.unwrap();
        store.create(form("c", "X", 2, 1999)).await.unwrap();

        let stats = store.compute_stats().await.unwrap();
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.total_value, Money::from_cents(3 * 250 + 2 * 1999));
        assert_eq!(stats.category_count, 2);
        // quantity 2 and 3 are within the default threshold of 10
        assert_eq!(stats.low_stock_count, 2);
    }

    #[tokio::test]
    async fn test_status_scenarios() {
        let store = empty_store();
        for quantity in [0, 5, 6] {
            let mut new_product = form(&format!("q{quantity}"), "X", quantity, 100);
            new_product.low_stock_threshold = 5;
            store.create(new_product).await.unwrap();
        }

        let statuses: Vec<StockStatus> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(InventoryStore::<MemoryStorage>::classify_status)
            .collect();
        assert_eq!(
            statuses,
            vec![StockStatus::OutOfStock, StockStatus::LowStock, StockStatus::InStock]
        );
        assert_eq!(store.compute_stats().await.unwrap().low_stock_count, 1);
        assert_eq!(
            store.list_by_status(StockStatus::OutOfStock).await.unwrap()[0].quantity,
            0
        );
    }

    #[tokio::test]
    async fn test_search_filters() {
        let store = seeded_store().await;
        let cables = store
            .search(&ProductFilter::all().with_category("Cables"))
            .await
            .unwrap();
        assert_eq!(cables.len(), 3);

        let hits = store
            .search(&ProductFilter::all().with_search("cable"))
            .await
            .unwrap();
        assert!(hits.iter().all(|p| p.name.to_lowercase().contains("cable")
            || p.sku.to_lowercase().contains("cable")
            || p.category.to_lowercase().contains("cable")));
        assert!(!hits.is_empty());

        let sorted = store.list_categories().await.unwrap();
        let mut expected = sorted.clone();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    // -------------------------------------------------------------------------
    // Concurrency
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_concurrent_updates_both_apply() {
        let store = seeded_store().await;
        let before = store.get_by_id(1u64).await.unwrap();

        let (a, b) = tokio::join!(store.update_quantity(1u64, 5), store.update_quantity(1u64, 9));
        let (a, b) = (a.unwrap(), b.unwrap());

        let last = if a.version > b.version { a } else { b };
        let stored = store.get_by_id(1u64).await.unwrap();
        assert_eq!(stored.version, before.version + 2);
        assert_eq!(stored.quantity, last.quantity);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_creates_get_distinct_ids() {
        let store = empty_store();
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = store.clone();
                tokio::spawn(async move { store.create(form(&format!("p{n}"), "X", 1, 1)).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id.get());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    // -------------------------------------------------------------------------
    // Failure handling
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_corrupt_slot_surfaces_and_reset_recovers() {
        let storage = MemoryStorage::new();
        corrupt(&storage).await;
        let store = InventoryStore::new(storage, StoreConfig::immediate());

        assert!(matches!(store.list().await, Err(StoreError::CorruptData { .. })));
        assert!(matches!(
            store.create(form("a", "X", 1, 1)).await,
            Err(StoreError::CorruptData { .. })
        ));

        let count = store.reset_to_seed().await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), count);
    }

    #[tokio::test]
    async fn test_corrupt_slot_treated_as_empty() {
        let storage = MemoryStorage::new();
        let config = StoreConfig::immediate().corruption_policy(CorruptionPolicy::TreatAsEmpty);
        let store = InventoryStore::new(storage.clone(), config);
        store.initialize().await.unwrap();
        corrupt(&storage).await;

        assert!(store.list().await.unwrap().is_empty());

        // Ids keep counting past the discarded catalogue
        let created = store.create(form("a", "X", 1, 1)).await.unwrap();
        assert_eq!(created.id.get(), 13);
        assert_eq!(
            storage.read("neonstock-products:next-id").await.unwrap().as_deref(),
            Some("13")
        );
    }

    #[tokio::test]
    async fn test_exhausted_counter_is_corrupt() {
        let storage = MemoryStorage::new();
        storage
            .write_batch(vec![
                ("neonstock-products".to_string(), "[]".to_string()),
                ("neonstock-products:next-id".to_string(), u64::MAX.to_string()),
            ])
            .await
            .unwrap();
        let store = InventoryStore::new(storage, StoreConfig::immediate());

        let err = store.create(form("a", "X", 1, 1)).await.unwrap_err();
        assert!(matches!(err, StoreError::CorruptData { ref key, .. } if key == "neonstock-products:next-id"));
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_huge_stock_value_does_not_break_stats() {
        let store = seeded_store().await;
        let mut huge = form("bulk", "X", 1_000_000_000_000, 10_000_000_000);
        huge.low_stock_threshold = 10;
        assert!(neonstock_core::validation::collect_errors(&huge).is_empty());
        store.create(huge).await.unwrap();

        let stats = store.compute_stats().await.unwrap();
        assert_eq!(stats.total_value, Money::from_cents(i64::MAX));
        assert_eq!(stats.total_products, 13);
    }

    #[tokio::test]
    async fn test_quota_failure_leaves_collection_unchanged() {
        let storage = MemoryStorage::new().with_quota(16 * 1024);
        let store = InventoryStore::new(storage, StoreConfig::immediate());
        store.initialize().await.unwrap();
        let before = store.list().await.unwrap();

        let mut big = form("huge", "X", 1, 1);
        big.image_url = Some("x".repeat(32 * 1024));
        let err = store.create(big).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::OperationFailed {
                operation: Operation::Create,
                source: StorageError::QuotaExceeded { .. },
            }
        ));
        assert_eq!(err.to_string().split(':').next(), Some("Failed to create product"));
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency() {
        let store = InventoryStore::new(
            MemoryStorage::new(),
            StoreConfig::default().latency(Latency::simulated()),
        );
        store.initialize().await.unwrap();

        let start = tokio::time::Instant::now();
        store.list().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(250));

        let start = tokio::time::Instant::now();
        store.create(form("a", "X", 1, 1)).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    // -------------------------------------------------------------------------
    // SQLite backend
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_sqlite_round_trip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = InventoryStore::new(SqliteStorage::new(db), StoreConfig::immediate());

        assert!(store.initialize().await.unwrap());
        let created = store.create(form("desk", "Furniture", 4, 12900)).await.unwrap();
        store.update_quantity(created.id, 2).await.unwrap();

        let reloaded = store.get_by_id(created.id).await.unwrap();
        assert_eq!(reloaded.quantity, 2);
        assert_eq!(reloaded.version, 2);
        assert!(store
            .list_categories()
            .await
            .unwrap()
            .contains(&"Furniture".to_string()));
    }
}
