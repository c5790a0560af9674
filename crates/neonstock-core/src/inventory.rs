//! # Inventory Rules
//!
//! Pure functions behind every derived value the store reports.
//!
//! ## Stock Status Partition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quantity                                                               │
//! │  ────────────────────────────────────────────────────────────────►      │
//! │  ≤ 0          │ 1 ..= threshold          │ > threshold                  │
//! │  OUT-OF-STOCK │ LOW-STOCK                │ IN-STOCK                     │
//! │               │ (counted by lowStockCount)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A zero quantity is out of stock whatever the threshold, including a
//! threshold of zero. `quantity == threshold` is low stock.

use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeSet;

use crate::money::Money;
use crate::types::{InventoryStats, Product, ProductId, StockStatus};

/// Classifies stock. Single source of truth for status.
///
/// Negative quantities never come from a validated form; they are treated
/// as out of stock so the function stays total.
pub fn classify(quantity: i64, low_stock_threshold: i64) -> StockStatus {
    if quantity <= 0 {
        StockStatus::OutOfStock
    } else if quantity <= low_stock_threshold {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}

/// Computes the dashboard statistics with a full scan.
pub fn compute_stats(products: &[Product]) -> InventoryStats {
    let total_value: Money = products.iter().map(Product::stock_value).sum();
    let low_stock_count = products
        .iter()
        .filter(|p| p.status() == StockStatus::LowStock)
        .count();

    InventoryStats {
        total_products: products.len(),
        total_value,
        low_stock_count,
        category_count: category_set(products).len(),
    }
}

/// Distinct categories in ascending lexicographic order.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    category_set(products).into_iter().map(str::to_string).collect()
}

fn category_set(products: &[Product]) -> BTreeSet<&str> {
    products.iter().map(|p| p.category.as_str()).collect()
}

/// Next id to hand out.
///
/// `counter` is the highest id ever issued (persisted next to the
/// collection). Taking the max with the live ids keeps collections written
/// without a counter (the seed, older data) collision-free.
///
/// Returns `None` once the id space is exhausted.
pub fn next_product_id(counter: u64, products: &[Product]) -> Option<ProductId> {
    let max_live = products.iter().map(|p| p.id.get()).max().unwrap_or(0);
    counter.max(max_live).checked_add(1).map(ProductId::new)
}

/// Timestamp for a write that must be strictly later than `previous`.
///
/// Two writes landing in the same clock tick would otherwise leave
/// `updated_at` unchanged.
pub fn advance_timestamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
