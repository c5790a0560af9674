//! SQLite-backed slots in the `storage_slots` table.

use chrono::Utc;
use tracing::debug;

use super::SlotStorage;
use crate::error::StorageResult;
use crate::pool::Database;

/// Durable slot storage over a [`Database`] pool.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    db: Database,
}

impl SqliteStorage {
    pub fn new(db: Database) -> Self {
        SqliteStorage { db }
    }
}

impl SlotStorage for SqliteStorage {
    async fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM storage_slots WHERE key = ?")
                .bind(key)
                .fetch_optional(self.db.pool())
                .await?;
        Ok(value)
    }

    async fn write_batch(&self, entries: Vec<(String, String)>) -> StorageResult<()> {
        let now = Utc::now().to_rfc3339();
        let mut tx = self.db.pool().begin().await?;

        for (key, value) in &entries {
            sqlx::query(
                r#"
                INSERT INTO storage_slots (key, value, updated_at)
                VALUES (?, ?, ?)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(key)
            .bind(value)
            .bind(&now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        debug!(slots = entries.len(), "Slots written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;

    async fn storage() -> SqliteStorage {
        SqliteStorage::new(Database::new(DbConfig::in_memory()).await.unwrap())
    }

    #[tokio::test]
    async fn test_upsert_and_read() {
        let storage = storage().await;
        assert_eq!(storage.read("slot").await.unwrap(), None);

        storage
            .write_batch(vec![("slot".to_string(), "[]".to_string())])
            .await
            .unwrap();
        storage
            .write_batch(vec![
                ("slot".to_string(), "[1]".to_string()),
                ("slot:next-id".to_string(), "1".to_string()),
            ])
            .await
            .unwrap();

        assert_eq!(storage.read("slot").await.unwrap().as_deref(), Some("[1]"));
        assert_eq!(
            storage.read("slot:next-id").await.unwrap().as_deref(),
            Some("1")
        );
    }

    #[tokio::test]
    async fn test_closed_pool_fails() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let storage = SqliteStorage::new(db.clone());
        db.close().await;
        assert!(storage.read("slot").await.is_err());
    }
}
