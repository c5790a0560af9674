//! # neonstock-core: Pure Inventory Logic for NeonStock
//!
//! This crate holds every inventory rule as a pure function with zero I/O.
//! The store crate persists products; this crate decides what they mean.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        NeonStock Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             Dashboard (browser UI / neonstock CLI)              │   │
//! │  │     Search ──► Filter ──► Product form ──► Quantity adjuster    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ neonstock-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ inventory │  │  filter   │  │ validation│  │   │
//! │  │   │  Product  │  │  status   │  │  search   │  │ form rules│  │   │
//! │  │   │  Money    │  │  stats    │  │  category │  │  sku gen  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              neonstock-store (InventoryStore)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, NewProduct, ProductPatch, StockStatus)
//! - [`money`] - Money type with integer arithmetic
//! - [`inventory`] - Status classification, statistics, id assignment
//! - [`filter`] - Dashboard search and filter rules
//! - [`validation`] - Product form validation
//! - [`sku`] - SKU generation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use neonstock_core::inventory::classify;
//! use neonstock_core::StockStatus;
//!
//! assert_eq!(classify(0, 5), StockStatus::OutOfStock);
//! assert_eq!(classify(5, 5), StockStatus::LowStock);
//! assert_eq!(classify(6, 5), StockStatus::InStock);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod inventory;
pub mod money;
pub mod sku;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::ProductFilter;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name of the storage slot holding the product collection.
pub const PRODUCTS_SLOT: &str = "neonstock-products";

/// Low-stock threshold applied when a record does not carry one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 10;

/// Upper bound of the quantity adjuster.
///
/// ## Business Reason
/// Prevents accidental over-counting (e.g., typing 1000 instead of 100).
pub const MAX_QUANTITY: i64 = 999;

/// Maximum length of a dashboard search term.
pub const MAX_SEARCH_LEN: usize = 100;
