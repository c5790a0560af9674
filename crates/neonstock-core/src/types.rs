//! # Domain Types
//!
//! Core domain types used throughout NeonStock.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   NewProduct    │   │  ProductPatch   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Id (store)     │   │  form fields    │   │  Option<field>  │       │
//! │  │  sku, name      │   │  (no Id, no     │   │  shallow merge  │       │
//! │  │  quantity       │   │   timestamps)   │   │  (no Id)        │       │
//! │  │  price_cents    │   └─────────────────┘   └─────────────────┘       │
//! │  │  timestamps     │                                                    │
//! │  │  version        │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  └─────────────────┘   │  StockStatus    │   │ InventoryStats  │       │
//! │                        │  in-stock       │   │  totals, counts │       │
//! │                        │  low-stock      │   │  (derived)      │       │
//! │                        │  out-of-stock   │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! Products serialize in camelCase with the identifier under `Id`, the shape
//! the browser dashboard has always read from local storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::inventory;
use crate::money::Money;
use crate::DEFAULT_LOW_STOCK_THRESHOLD;

// =============================================================================
// Product Id
// =============================================================================

/// Store-assigned product identifier (positive integer).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(u64);

impl ProductId {
    /// Wraps a raw id value.
    #[inline]
    pub const fn new(value: u64) -> Self {
        ProductId(value)
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        ProductId(value)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Coerces the caller's textual id (`"7"`, `" 7 "`) into a `ProductId`.
impl FromStr for ProductId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u64>() {
            Ok(value) if value > 0 => Ok(ProductId(value)),
            _ => Err(CoreError::InvalidProductId(s.to_string())),
        }
    }
}

// =============================================================================
// Stock Status
// =============================================================================

/// Derived stock classification. Never stored, always computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    /// Quantity above the low-stock threshold.
    InStock,
    /// Quantity at or below the threshold, but not zero.
    LowStock,
    /// Nothing left.
    OutOfStock,
}

impl StockStatus {
    /// Classifies a quantity against a low-stock threshold.
    ///
    /// See [`inventory::classify`].
    #[inline]
    pub fn classify(quantity: i64, low_stock_threshold: i64) -> Self {
        inventory::classify(quantity, low_stock_threshold)
    }

    /// Kebab-case label used by the dashboard badges.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "in-stock" | "instock" => Ok(StockStatus::InStock),
            "low-stock" | "lowstock" | "low" => Ok(StockStatus::LowStock),
            "out-of-stock" | "outofstock" | "out" => Ok(StockStatus::OutOfStock),
            _ => Err(CoreError::UnknownStatus(s.to_string())),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

fn default_low_stock_threshold() -> i64 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

fn default_version() -> i64 {
    1
}

/// A single inventory item as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier. Immutable after creation.
    #[serde(rename = "Id")]
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Stock Keeping Unit. Not unique-checked by the store.
    pub sku: String,

    /// Free-form category; the category list is derived from these.
    pub category: String,

    /// Units on hand.
    pub quantity: i64,

    /// Unit price in cents.
    pub price_cents: i64,

    /// At or below this quantity the product is low on stock.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,

    /// Product image (not validated).
    #[serde(default)]
    pub image_url: Option<String>,

    /// Shelf / bin location.
    #[serde(default)]
    pub location: Option<String>,

    /// When the product was created. Never changes.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last written.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    /// Bumped on every write; used for optimistic concurrency checks.
    #[serde(default = "default_version")]
    pub version: i64,
}

impl Product {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Value of the units on hand (quantity × price).
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }

    /// Derived stock status.
    #[inline]
    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.quantity, self.low_stock_threshold)
    }
}

// =============================================================================
// New Product
// =============================================================================

/// Fields supplied when creating a product.
///
/// The store assigns the id, timestamps and version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: i64,
    pub price_cents: i64,
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Default for NewProduct {
    /// Blank form: empty strings, zero quantity and price, threshold 10.
    fn default() -> Self {
        NewProduct {
            name: String::new(),
            sku: String::new(),
            category: String::new(),
            quantity: 0,
            price_cents: 0,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            image_url: None,
            location: None,
        }
    }
}

impl NewProduct {
    /// Materializes the record the store will persist.
    pub fn into_product(self, id: ProductId, now: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            sku: self.sku,
            category: self.category,
            quantity: self.quantity,
            price_cents: self.price_cents,
            low_stock_threshold: self.low_stock_threshold,
            image_url: self.image_url,
            location: self.location,
            created_at: now,
            updated_at: now,
            version: 1,
        }
    }
}

// =============================================================================
// Product Patch
// =============================================================================

/// Partial update merged shallowly over an existing product.
///
/// `None` leaves a field untouched. For the optional text fields,
/// `Some(None)` clears the value. There is deliberately no id, `created_at`
/// or `version` field: those are owned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub price_cents: Option<i64>,
    pub low_stock_threshold: Option<i64>,
    pub image_url: Option<Option<String>>,
    pub location: Option<Option<String>>,
}

impl ProductPatch {
    /// A patch that only sets the quantity.
    pub fn quantity(quantity: i64) -> Self {
        ProductPatch {
            quantity: Some(quantity),
            ..ProductPatch::default()
        }
    }

    /// True if the patch would not change any field.
    pub fn is_empty(&self) -> bool {
        *self == ProductPatch::default()
    }

    /// Applies every present field to `product`.
    ///
    /// Only the editable fields are touched; the caller stamps
    /// `updated_at` and `version`.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(sku) = &self.sku {
            product.sku = sku.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(price_cents) = self.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(threshold) = self.low_stock_threshold {
            product.low_stock_threshold = threshold;
        }
        if let Some(image_url) = &self.image_url {
            product.image_url = image_url.clone();
        }
        if let Some(location) = &self.location {
            product.location = location.clone();
        }
    }
}

// =============================================================================
// Inventory Statistics
// =============================================================================

/// Aggregate figures shown on the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    /// Number of products.
    pub total_products: usize,
    /// Σ quantity × price.
    pub total_value: Money,
    /// Products with `0 < quantity <= threshold`.
    pub low_stock_count: usize,
    /// Number of distinct categories.
    pub category_count: usize,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Product {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        NewProduct {
            name: "Neon Strip".to_string(),
            sku: "NEO-001".to_string(),
            category: "Lighting".to_string(),
            quantity: 4,
            price_cents: 2499,
            location: Some("A1".to_string()),
            ..NewProduct::default()
        }
        .into_product(ProductId::new(3), now)
    }

    #[test]
    fn test_product_id_parsing() {
        assert_eq!("7".parse::<ProductId>().unwrap(), ProductId::new(7));
        assert_eq!(" 12 ".parse::<ProductId>().unwrap().get(), 12);
        assert!("0".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("low-stock".parse::<StockStatus>().unwrap(), StockStatus::LowStock);
        assert_eq!("OUT_OF_STOCK".parse::<StockStatus>().unwrap(), StockStatus::OutOfStock);
        assert_eq!("in-stock".parse::<StockStatus>().unwrap(), StockStatus::InStock);
        assert!("all".parse::<StockStatus>().is_err());
    }

    #[test]
    fn test_product_wire_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["Id"], 3);
        assert_eq!(json["priceCents"], 2499);
        assert_eq!(json["lowStockThreshold"], 10);
        assert_eq!(json["location"], "A1");
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["version"], 1);
    }

    #[test]
    fn test_missing_threshold_and_version_default() {
        let json = r#"{
            "Id": 1, "name": "Cable", "sku": "CBL-1", "category": "Cables",
            "quantity": 3, "priceCents": 500,
            "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
        assert_eq!(product.version, 1);
        assert_eq!(product.image_url, None);
        assert_eq!(product.status(), StockStatus::LowStock);
    }

    #[test]
    fn test_patch_merge_is_shallow() {
        let mut product = sample();
        let original = product.clone();

        let patch = ProductPatch {
            price_cents: Some(1999),
            location: Some(None),
            ..ProductPatch::default()
        };
        patch.apply_to(&mut product);

        assert_eq!(product.price_cents, 1999);
        assert_eq!(product.location, None);
        assert_eq!(product.name, original.name);
        assert_eq!(product.quantity, original.quantity);
        assert_eq!(product.id, original.id);
        assert_eq!(product.created_at, original.created_at);
    }

    #[test]
    fn test_empty_patch() {
        assert!(ProductPatch::default().is_empty());
        assert!(!ProductPatch::quantity(0).is_empty());
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(sample().stock_value().cents(), 4 * 2499);
    }
}
