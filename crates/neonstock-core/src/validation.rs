//! # Validation Module
//!
//! Product form validation for NeonStock.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form / CLI arguments                                         │
//! │  ├── Type parsing (ids, money, integers)                               │
//! │  └── THIS MODULE: field rules                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: InventoryStore                                               │
//! │  └── No field checks. Stores whatever it is given.                     │
//! │                                                                         │
//! │  Callers MUST validate before calling the store.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Field Rules
//! | Field | Rule |
//! |---|---|
//! | name, SKU, category, location | required (non-blank) |
//! | quantity | ≥ 0 |
//! | price | > 0 |
//! | low-stock threshold | ≥ 0 |
//!
//! ## Usage
//! ```rust
//! use neonstock_core::validation::{validate_new_product, collect_errors};
//! use neonstock_core::NewProduct;
//!
//! let form = NewProduct::default();
//! assert!(validate_new_product(&form).is_err());
//! // The form shows every problem at once
//! assert_eq!(collect_errors(&form).len(), 5);
//! ```

use crate::error::ValidationError;
use crate::types::{NewProduct, ProductPatch};
use crate::{MAX_QUANTITY, MAX_SEARCH_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Rejects blank text.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a quantity on hand (zero allowed).
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "Quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates a unit price in cents. Free items are not allowed.
///
/// ```rust
/// use neonstock_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());
/// assert!(validate_price_cents(0).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "Price".to_string(),
        });
    }
    Ok(())
}

/// Validates a low-stock threshold.
pub fn validate_low_stock_threshold(threshold: i64) -> ValidationResult<()> {
    if threshold < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "Low stock threshold".to_string(),
        });
    }
    Ok(())
}

/// Validates a search query.
///
/// ## Returns
/// The trimmed query string. Empty is allowed and means "no search".
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "Search".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

/// Clamps a quantity into the adjuster's range `0..=MAX_QUANTITY`.
#[inline]
pub fn clamp_quantity(quantity: i64) -> i64 {
    quantity.clamp(0, MAX_QUANTITY)
}

// =============================================================================
// Form Validators
// =============================================================================

/// Every field error of a create form, in form order.
pub fn collect_errors(form: &NewProduct) -> Vec<ValidationError> {
    let location = form.location.as_deref().unwrap_or("");
    [
        validate_required("Product name", &form.name),
        validate_required("SKU", &form.sku),
        validate_required("Category", &form.category),
        validate_quantity(form.quantity),
        validate_price_cents(form.price_cents),
        validate_low_stock_threshold(form.low_stock_threshold),
        validate_required("Location", location),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

/// Validates a create form, returning the first problem.
pub fn validate_new_product(form: &NewProduct) -> ValidationResult<()> {
    match collect_errors(form).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Validates only the fields a patch sets.
///
/// An edit form may clear the image but never the location.
pub fn validate_patch(patch: &ProductPatch) -> ValidationResult<()> {
    if let Some(name) = &patch.name {
        validate_required("Product name", name)?;
    }
    if let Some(sku) = &patch.sku {
        validate_required("SKU", sku)?;
    }
    if let Some(category) = &patch.category {
        validate_required("Category", category)?;
    }
    if let Some(quantity) = patch.quantity {
        validate_quantity(quantity)?;
    }
    if let Some(price) = patch.price_cents {
        validate_price_cents(price)?;
    }
    if let Some(threshold) = patch.low_stock_threshold {
        validate_low_stock_threshold(threshold)?;
    }
    if let Some(location) = &patch.location {
        validate_required("Location", location.as_deref().unwrap_or(""))?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
