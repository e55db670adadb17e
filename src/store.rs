use std::collections::HashSet;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::dtos::AllocationEntry;
use crate::error::StoreError;

/// SQLite-backed allocation table. Column names follow the original
/// database layout; the UNIQUE constraint on `adresse` is the authoritative
/// duplicate check behind the gate's advisory one.
#[derive(Clone)]
pub struct AllocationStore {
    pool: SqlitePool,
}

impl AllocationStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Single-connection in-memory database, already initialized. SQLite
    /// gives every connection its own `:memory:` instance, so the pool is
    /// capped at one.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        let store = Self::new(pool);
        store.init().await?;
        Ok(store)
    }

    pub async fn init(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS adresse_ip (
                id INTEGER PRIMARY KEY,
                adresse TEXT UNIQUE,
                nombre_hotes INTEGER
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<AllocationEntry>, StoreError> {
        let entries = sqlx::query_as::<_, AllocationEntry>(
            "SELECT adresse AS address, nombre_hotes AS host_count
             FROM adresse_ip ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    /// The current allocation set, re-read on every call.
    pub async fn addresses(&self) -> Result<HashSet<String>, StoreError> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT adresse FROM adresse_ip")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|(adresse,)| adresse).collect())
    }

    pub async fn insert(&self, address: &str, host_count: i64) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO adresse_ip (adresse, nombre_hotes) VALUES (?, ?)")
            .bind(address)
            .bind(host_count)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                if let sqlx::Error::Database(db) = &err {
                    if db.is_unique_violation() {
                        return StoreError::Duplicate;
                    }
                }
                StoreError::Database(err)
            })?;
        Ok(())
    }

    /// Updates the host count for an address. Returns false when no row
    /// matched.
    pub async fn update_host_count(
        &self,
        address: &str,
        host_count: i64,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE adresse_ip SET nombre_hotes = ? WHERE adresse = ?")
            .bind(host_count)
            .bind(address)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deletes by address. Returns false when nothing matched; callers
    /// treat both cases as success, delete is idempotent by convention.
    pub async fn delete(&self, address: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM adresse_ip WHERE adresse = ?")
            .bind(address)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
