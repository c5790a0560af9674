//! Starter catalogue written on first run and by `reset_to_seed`.
//!
//! The mix covers every dashboard state: in-stock, low-stock (including
//! `quantity == threshold`) and out-of-stock items across five categories.

use chrono::{DateTime, Utc};
use neonstock_core::{Product, ProductId};

/// 2024-01-15T09:00:00Z
const SEED_EPOCH: i64 = 1_705_309_200;
const DAY: i64 = 86_400;

struct SeedRow {
    name: &'static str,
    sku: &'static str,
    category: &'static str,
    quantity: i64,
    price_cents: i64,
    low_stock_threshold: i64,
    location: &'static str,
}

const SEED: &[SeedRow] = &[
    SeedRow { name: "Neon LED Strip 5m", sku: "NEO-STR-005", category: "Lighting", quantity: 48, price_cents: 2999, low_stock_threshold: 10, location: "A1-01" },
    SeedRow { name: "RGB Smart Bulb", sku: "NEO-BLB-RGB", category: "Lighting", quantity: 6, price_cents: 1899, low_stock_threshold: 10, location: "A1-04" },
    SeedRow { name: "Mechanical Keyboard", sku: "PER-KBD-MX1", category: "Peripherals", quantity: 22, price_cents: 8999, low_stock_threshold: 5, location: "B2-02" },
    SeedRow { name: "Wireless Mouse", sku: "PER-MSE-W20", category: "Peripherals", quantity: 0, price_cents: 3499, low_stock_threshold: 8, location: "B2-05" },
    SeedRow { name: "Gaming Headset", sku: "AUD-HST-G70", category: "Audio", quantity: 15, price_cents: 7499, low_stock_threshold: 6, location: "C1-03" },
    SeedRow { name: "Bluetooth Speaker", sku: "AUD-SPK-BT4", category: "Audio", quantity: 4, price_cents: 5999, low_stock_threshold: 4, location: "C1-07" },
    SeedRow { name: "USB-C Cable 2m", sku: "CAB-USC-200", category: "Cables", quantity: 120, price_cents: 1299, low_stock_threshold: 25, location: "D3-01" },
    SeedRow { name: "HDMI 2.1 Cable", sku: "CAB-HDM-21", category: "Cables", quantity: 9, price_cents: 1999, low_stock_threshold: 15, location: "D3-02" },
    SeedRow { name: "DisplayPort Adapter", sku: "CAB-DPA-001", category: "Cables", quantity: 0, price_cents: 1499, low_stock_threshold: 5, location: "D3-06" },
    SeedRow { name: "27\" Monitor Arm", sku: "ACC-ARM-027", category: "Accessories", quantity: 11, price_cents: 4599, low_stock_threshold: 3, location: "E2-01" },
    SeedRow { name: "Laptop Stand", sku: "ACC-STD-ALU", category: "Accessories", quantity: 2, price_cents: 3999, low_stock_threshold: 5, location: "E2-04" },
    SeedRow { name: "Desk Mat XL", sku: "ACC-MAT-XL", category: "Accessories", quantity: 35, price_cents: 2499, low_stock_threshold: 10, location: "E2-09" },
];

fn seed_time(offset_days: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(SEED_EPOCH + offset_days * DAY, 0).unwrap_or_default()
}

/// The seed products with ids `1..=N`.
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .enumerate()
        .map(|(index, row)| {
            let offset = index as i64;
            Product {
                id: ProductId::new(index as u64 + 1),
                name: row.name.to_string(),
                sku: row.sku.to_string(),
                category: row.category.to_string(),
                quantity: row.quantity,
                price_cents: row.price_cents,
                low_stock_threshold: row.low_stock_threshold,
                image_url: None,
                location: Some(row.location.to_string()),
                created_at: seed_time(offset),
                updated_at: seed_time(offset + 7),
                version: 1,
            }
        })
        .collect()
}
