//! # CLI Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--db`)
//! 2. Environment variables (`NEONSTOCK_*`)
//! 3. Config file (`config.toml`)
//! 4. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! # ~/.config/neonstock/config.toml
//! database_path = "/var/lib/neonstock/neonstock.db"
//! latency = "simulated"           # simulated | none | <millis>
//! corruption_policy = "surface"   # surface | treat-as-empty
//! currency_symbol = "$"
//! ```

use neonstock_store::{CorruptionPolicy, Latency, StoreConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

const DB_FILE: &str = "neonstock.db";
const CONFIG_FILE: &str = "config.toml";

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Latency Profile
// =============================================================================

/// How much artificial delay store calls get.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LatencyProfile {
    /// The dashboard's per-operation delays.
    Simulated,
    /// No delay.
    #[default]
    None,
    /// The same delay for every operation.
    Fixed(Duration),
}

impl LatencyProfile {
    pub fn to_latency(self) -> Latency {
        match self {
            LatencyProfile::Simulated => Latency::simulated(),
            LatencyProfile::None => Latency::none(),
            LatencyProfile::Fixed(delay) => Latency::uniform(delay),
        }
    }
}

impl FromStr for LatencyProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        match value.as_str() {
            "simulated" | "on" => Ok(LatencyProfile::Simulated),
            "none" | "off" | "0" => Ok(LatencyProfile::None),
            other => other
                .trim_end_matches("ms")
                .parse::<u64>()
                .map(|ms| LatencyProfile::Fixed(Duration::from_millis(ms)))
                .map_err(|_| {
                    format!(
                        "unknown latency '{}' (expected 'simulated', 'none' or milliseconds)",
                        s
                    )
                }),
        }
    }
}

impl fmt::Display for LatencyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatencyProfile::Simulated => f.write_str("simulated"),
            LatencyProfile::None => f.write_str("none"),
            LatencyProfile::Fixed(delay) => write!(f, "{}ms", delay.as_millis()),
        }
    }
}

impl TryFrom<String> for LatencyProfile {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LatencyProfile> for String {
    fn from(profile: LatencyProfile) -> Self {
        profile.to_string()
    }
}

// =============================================================================
// App Config
// =============================================================================

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite file. Default: the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Default: none (the CLI is used from scripts)
    pub latency: LatencyProfile,

    /// Default: surface
    pub corruption_policy: CorruptionPolicy,

    /// Symbol printed in front of amounts.
    /// Default: "$"
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: None,
            latency: LatencyProfile::default(),
            corruption_policy: CorruptionPolicy::default(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from file and environment.
    ///
    /// ## Loading Order
    /// 1. Start with defaults
    /// 2. Overlay the config file, if it exists
    /// 3. Override with environment variables
    /// 4. Validate
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                config = Self::from_file(&path)?;
            } else if explicit {
                return Err(ConfigError::Read {
                    path,
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                });
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `NEONSTOCK_*` overrides looked up through `lookup`.
    ///
    /// ## Variables
    /// - `NEONSTOCK_DB_PATH`: SQLite file
    /// - `NEONSTOCK_LATENCY`: `simulated`, `none` or milliseconds
    /// - `NEONSTOCK_CORRUPTION_POLICY`: `surface` or `treat-as-empty`
    /// - `NEONSTOCK_CURRENCY_SYMBOL`: e.g. `€`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<()> {
        if let Some(path) = lookup("NEONSTOCK_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database_path = Some(PathBuf::from(path));
        }

        if let Some(latency) = lookup("NEONSTOCK_LATENCY") {
            self.latency = latency.parse().map_err(|reason| ConfigError::InvalidValue {
                key: "NEONSTOCK_LATENCY".to_string(),
                reason,
            })?;
        }

        if let Some(policy) = lookup("NEONSTOCK_CORRUPTION_POLICY") {
            self.corruption_policy = policy.parse().map_err(|reason| ConfigError::InvalidValue {
                key: "NEONSTOCK_CORRUPTION_POLICY".to_string(),
                reason,
            })?;
        }

        if let Some(symbol) = lookup("NEONSTOCK_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.database_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "database_path".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "currency_symbol".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Store settings derived from this configuration.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default()
            .latency(self.latency.to_latency())
            .corruption_policy(self.corruption_policy)
    }

    /// The SQLite file to open.
    ///
    /// ## Default Locations
    /// - Linux: `~/.local/share/neonstock/neonstock.db`
    /// - macOS: `~/Library/Application Support/com.neonstock.neonstock/neonstock.db`
    /// - Fallback: `./neonstock.db`
    pub fn resolved_database_path(&self) -> PathBuf {
        self.database_path.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|dirs| dirs.data_dir().join(DB_FILE))
                .unwrap_or_else(|| PathBuf::from(DB_FILE))
        })
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "neonstock", "neonstock")
}
