//! # Store Configuration
//!
//! Knobs of an [`InventoryStore`](crate::InventoryStore): which slot it
//! owns, how long each call pretends to take, and what to do with a slot
//! that cannot be parsed.
//!
//! ```rust
//! use neonstock_store::{CorruptionPolicy, Latency, StoreConfig};
//!
//! let config = StoreConfig::default()
//!     .latency(Latency::none())
//!     .corruption_policy(CorruptionPolicy::TreatAsEmpty);
//! assert_eq!(config.counter_key(), "neonstock-products:next-id");
//! ```

use neonstock_core::PRODUCTS_SLOT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// =============================================================================
// Latency
// =============================================================================

/// Artificial delay applied at the start of each store operation.
///
/// The dashboard was built against a store that behaves like a remote API;
/// these delays keep loading states visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
    pub categories: Duration,
    pub stats: Duration,
}

impl Latency {
    /// The dashboard's delays.
    pub const fn simulated() -> Self {
        Latency {
            list: Duration::from_millis(250),
            get: Duration::from_millis(200),
            create: Duration::from_millis(300),
            update: Duration::from_millis(250),
            delete: Duration::from_millis(200),
            categories: Duration::from_millis(150),
            stats: Duration::from_millis(200),
        }
    }

    /// No delay at all (tests, scripting).
    pub const fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// The same delay for every operation.
    pub const fn uniform(delay: Duration) -> Self {
        Latency {
            list: delay,
            get: delay,
            create: delay,
            update: delay,
            delete: delay,
            categories: delay,
            stats: delay,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}

// =============================================================================
// Corruption Policy
// =============================================================================

/// What a read does when the products slot holds unparseable data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorruptionPolicy {
    /// Fail with `StoreError::CorruptData`; the data stays untouched.
    #[default]
    Surface,
    /// Log a warning and behave as if the collection were empty.
    TreatAsEmpty,
}

impl fmt::Display for CorruptionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorruptionPolicy::Surface => f.write_str("surface"),
            CorruptionPolicy::TreatAsEmpty => f.write_str("treat-as-empty"),
        }
    }
}

impl FromStr for CorruptionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "surface" | "error" => Ok(CorruptionPolicy::Surface),
            "treat-as-empty" | "empty" => Ok(CorruptionPolicy::TreatAsEmpty),
            other => Err(format!(
                "unknown corruption policy '{}' (expected 'surface' or 'treat-as-empty')",
                other
            )),
        }
    }
}

// =============================================================================
// Store Config
// =============================================================================

/// Configuration of one store instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Slot holding the product collection.
    pub storage_key: String,
    pub latency: Latency,
    pub corruption_policy: CorruptionPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            storage_key: PRODUCTS_SLOT.to_string(),
            latency: Latency::default(),
            corruption_policy: CorruptionPolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Config for tests: default slot, no latency.
    pub fn immediate() -> Self {
        Self::default().latency(Latency::none())
    }

    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn corruption_policy(mut self, policy: CorruptionPolicy) -> Self {
        self.corruption_policy = policy;
        self
    }

    /// Slot holding the highest id ever issued.
    pub fn counter_key(&self) -> String {
        format!("{}:next-id", self.storage_key)
    }
}
