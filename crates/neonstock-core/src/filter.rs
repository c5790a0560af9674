//! # Dashboard Filtering
//!
//! The product table on the dashboard is narrowed by three independent
//! controls; a product is shown only if it passes all of them.
//!
//! ```text
//! search term ──► case-insensitive substring of name, SKU or category
//! category    ──► exact match (empty = all categories)
//! status      ──► derived stock status (None = all)
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{Product, StockStatus};

/// Search and filter criteria for the product list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilter {
    /// Free-text search over name, SKU and category.
    pub search: Option<String>,
    /// Exact category to keep.
    pub category: Option<String>,
    /// Stock status to keep.
    pub status: Option<StockStatus>,
}

impl ProductFilter {
    /// Filter that keeps everything.
    pub fn all() -> Self {
        ProductFilter::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: StockStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True if the product passes every active criterion.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.matches_category(product) && self.matches_status(product)
    }

    /// Keeps matching products, preserving their order.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }

    fn matches_search(&self, product: &Product) -> bool {
        let term = match self.search.as_deref() {
            Some(term) if !term.is_empty() => term.to_lowercase(),
            _ => return true,
        };

        [&product.name, &product.sku, &product.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_category(&self, product: &Product) -> bool {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => product.category == category,
            _ => true,
        }
    }

    fn matches_status(&self, product: &Product) -> bool {
        self.status.map_or(true, |status| product.status() == status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NewProduct, ProductId};
    use chrono::Utc;

    fn product(id: u64, name: &str, sku: &str, category: &str, quantity: i64) -> Product {
        NewProduct {
            name: name.to_string(),
            sku: sku.to_string(),
            category: category.to_string(),
            quantity,
            price_cents: 100,
            low_stock_threshold: 5,
            ..NewProduct::default()
        }
        .into_product(ProductId::new(id), Utc::now())
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Neon Strip 5m", "NEO-500", "Lighting", 40),
            product(2, "USB-C Cable", "CBL-USB", "Cables", 3),
            product(3, "Cable Tester", "TST-001", "Tools", 0),
            product(4, "Desk Lamp", "LMP-NEON", "Lighting", 2),
        ]
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        assert_eq!(ids(&ProductFilter::all().apply(catalog())), vec![1, 2, 3, 4]);
        assert_eq!(ids(&ProductFilter::all().with_search("").apply(catalog())), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        // name, sku and category all participate
        let found = ProductFilter::all().with_search("neon").apply(catalog());
        assert_eq!(ids(&found), vec![1, 4]);

        let found = ProductFilter::all().with_search("CABLE").apply(catalog());
        assert_eq!(ids(&found), vec![2, 3]);

        let found = ProductFilter::all().with_search("tools").apply(catalog());
        assert_eq!(ids(&found), vec![3]);
    }

    #[test]
    fn test_category_and_status_combine() {
        let lighting = ProductFilter::all().with_category("Lighting").apply(catalog());
        assert_eq!(ids(&lighting), vec![1, 4]);

        let low_lighting = ProductFilter::all()
            .with_category("Lighting")
            .with_status(StockStatus::LowStock)
            .apply(catalog());
        assert_eq!(ids(&low_lighting), vec![4]);

        let out = ProductFilter::all().with_status(StockStatus::OutOfStock).apply(catalog());
        assert_eq!(ids(&out), vec![3]);
    }

    #[test]
    fn test_category_is_exact() {
        let found = ProductFilter::all().with_category("light").apply(catalog());
        assert!(found.is_empty());
    }
}
