//! # Database Migrations
//!
//! Embedded SQL migrations for the SQLite slot backend.
//!
//! ## Schema
//! ```text
//! storage_slots
//! ┌──────────────┬──────────────────────────────────────┬────────────┐
//! │ key (PK)     │ value                                │ updated_at │
//! ├──────────────┼──────────────────────────────────────┼────────────┤
//! │ neonstock-   │ [{"Id":1,"name":"Neon Strip",...}]   │ RFC 3339   │
//! │   products   │                                      │            │
//! │ ...:next-id  │ 12                                   │ RFC 3339   │
//! └──────────────┴──────────────────────────────────────┴────────────┘
//! ```
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/sqlite/` with the next sequence number
//! 2. Name format: `NNN_description.sql`
//! 3. **NEVER** modify existing migrations - always add new ones

use sqlx::SqlitePool;
use tracing::info;

use crate::error::StorageResult;

/// Migrations embedded from `migrations/sqlite` at compile time.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending migrations in filename order.
pub async fn run_migrations(pool: &SqlitePool) -> StorageResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

