//! SQLite store client.
//!
//! Persistent [`StoreClient`] implementation. Each logical table maps to a
//! SQLite table of `(id TEXT PRIMARY KEY, item TEXT NOT NULL)` rows where
//! `item` holds the JSON-encoded record. Tables are provisioned by the host
//! through [`SqliteStoreClient::create_table`]; the trait operations expect
//! them to exist, matching a managed store where tables pre-exist.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::store_client::{Record, StoreClient};

#[derive(Clone)]
pub struct SqliteStoreClient {
    pool: SqlitePool,
}

impl SqliteStoreClient {
    /// Opens the database at `database_path`, creating the file if missing.
    pub async fn new(database_path: &str) -> Result<Self, sqlx::Error> {
        info!("Opening store database: {}", database_path);

        let options = SqliteConnectOptions::new()
            .create_if_missing(true)
            .filename(database_path);
        let pool = SqlitePool::connect_with(options).await?;

        Ok(Self { pool })
    }

    /// Creates the backing table for a logical table if it does not exist.
    ///
    /// Host-side provisioning, not part of [`StoreClient`].
    pub async fn create_table(&self, table: &str) -> Result<(), StoreError> {
        check_table_name(table)?;

        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {} (id TEXT PRIMARY KEY, item TEXT NOT NULL)",
            table
        ))
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(table, e))?;

        info!("Ensured table exists: {}", table);
        Ok(())
    }
}

#[async_trait]
impl StoreClient for SqliteStoreClient {
    async fn put(&self, table: &str, item: Record) -> Result<(), StoreError> {
        check_table_name(table)?;

        let id = match item.get("id").and_then(|v| v.as_str()) {
            Some(id) => id.to_string(),
            None => return Err(StoreError::Rejected("item has no string id".into())),
        };
        let encoded = serde_json::to_string(&Value::Object(item))
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        sqlx::query(&format!(
            "INSERT OR REPLACE INTO {} (id, item) VALUES (?, ?)",
            table
        ))
        .bind(&id)
        .bind(&encoded)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(table, e))?;

        debug!("Put item: table={}, id={}", table, id);
        Ok(())
    }

    async fn scan(&self, table: &str) -> Result<Vec<Record>, StoreError> {
        check_table_name(table)?;

        let rows: Vec<(String,)> = sqlx::query_as(&format!("SELECT item FROM {}", table))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(table, e))?;

        let mut records = Vec::with_capacity(rows.len());
        for (encoded,) in rows {
            match serde_json::from_str(&encoded) {
                Ok(Value::Object(record)) => records.push(record),
                _ => {
                    return Err(StoreError::Backend(format!(
                        "corrupt item in table {}",
                        table
                    )))
                }
            }
        }

        debug!("Scanned {} items from table {}", records.len(), table);
        Ok(records)
    }

    async fn delete(&self, table: &str, key: &str) -> Result<(), StoreError> {
        check_table_name(table)?;

        // Zero rows affected means the key was absent; that is still success.
        sqlx::query(&format!("DELETE FROM {} WHERE id = ?", table))
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(table, e))?;

        debug!("Deleted item: table={}, id={}", table, key);
        Ok(())
    }
}

/// Table names are interpolated into SQL, so only identifier characters are
/// allowed.
fn check_table_name(table: &str) -> Result<(), StoreError> {
    let mut chars = table.chars();
    let head_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if head_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(StoreError::Rejected(format!(
            "invalid table name: {:?}",
            table
        )))
    }
}

fn map_sqlx_error(table: &str, error: sqlx::Error) -> StoreError {
    match &error {
        sqlx::Error::Database(db) if db.message().contains("no such table") => {
            StoreError::MissingTable(table.to_string())
        }
        _ => StoreError::Backend(error.to_string()),
    }
}
