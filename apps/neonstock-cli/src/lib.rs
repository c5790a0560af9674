//! # neonstock-cli
//!
//! Command-line dashboard over the NeonStock InventoryStore.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize tracing (stderr, RUST_LOG or default filter)            │
//! │  2. Parse arguments (clap)                                             │
//! │  3. Load AppConfig: config.toml → NEONSTOCK_* env → --db flag          │
//! │  4. Open SQLite + run migrations                                       │
//! │  5. Build InventoryStore<SqliteStorage>                                │
//! │  6. Execute the command (seeding a fresh inventory first)              │
//! │  7. Render output (table or --json) and close the pool                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{BaseArgs, Commands};
pub use commands::{execute, Output};
pub use config::AppConfig;
pub use error::{CliError, ErrorCode};
pub use output::Renderer;

use neonstock_store::{Database, DbConfig, InventoryStore, SqliteStorage};
use tracing::info;
use tracing_subscriber::EnvFilter;

impl BaseArgs {
    /// Loads configuration, runs the command and returns its output.
    pub async fn evaluate(self, config: &AppConfig) -> Result<Output, CliError> {
        let path = self
            .db
            .clone()
            .unwrap_or_else(|| config.resolved_database_path());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CliError::new(
                    ErrorCode::StorageError,
                    format!("Failed to create {}: {}", parent.display(), e),
                )
            })?;
        }

        info!(path = %path.display(), "Opening inventory");
        let db = Database::new(DbConfig::new(path)).await?;
        let store = InventoryStore::new(SqliteStorage::new(db.clone()), config.store_config());

        let result = execute(&store, self.command).await;
        db.close().await;
        result
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=neonstock=trace` - Show trace for neonstock crates only
/// - Default: warnings, plus info from neonstock crates
///
/// Logs go to stderr so stdout stays parseable with `--json`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,neonstock=info,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
