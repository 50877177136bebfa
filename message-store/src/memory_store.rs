//! In-memory store client.
//!
//! Fake [`StoreClient`] for tests and development. Data lives in a
//! `HashMap` behind an async `RwLock`; every request is also appended to a
//! call log so tests can assert the exact requests issued.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store_client::{Record, StoreClient};

/// One request observed by [`InMemoryStoreClient`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    Put { table: String, item: Record },
    Scan { table: String },
    Delete { table: String, key: String },
}

/// In-memory store keyed by table name, then record id.
///
/// Scanning an unknown table yields an empty list; deleting a missing key
/// succeeds; `put` creates the table implicitly. Data is lost on drop.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStoreClient {
    tables: Arc<RwLock<HashMap<String, HashMap<String, Record>>>>,
    calls: Arc<RwLock<Vec<StoreCall>>>,
}

impl InMemoryStoreClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every request issued so far, in order.
    pub async fn calls(&self) -> Vec<StoreCall> {
        self.calls.read().await.clone()
    }

    /// Inserts a raw record without logging a call. Test setup helper.
    pub async fn seed(&self, table: &str, id: &str, record: Record) {
        let mut tables = self.tables.write().await;
        tables
            .entry(table.to_string())
            .or_default()
            .insert(id.to_string(), record);
    }

    /// Number of records in `table` (0 if the table does not exist).
    pub async fn len(&self, table: &str) -> usize {
        let tables = self.tables.read().await;
        tables.get(table).map_or(0, HashMap::len)
    }

    pub async fn is_empty(&self, table: &str) -> bool {
        self.len(table).await == 0
    }

    /// Drops all tables and the call log.
    pub async fn clear(&self) {
        self.tables.write().await.clear();
        self.calls.write().await.clear();
    }
}

#[async_trait]
impl StoreClient for InMemoryStoreClient {
    async fn put(&self, table: &str, item: Record) -> Result<(), StoreError> {
        self.calls.write().await.push(StoreCall::Put {
            table: table.to_string(),
            item: item.clone(),
        });

        let id = match item.get("id").and_then(|v| v.as_str()) {
            Some(id) => id.to_string(),
            None => return Err(StoreError::Rejected("item has no string id".into())),
        };

        let mut tables = self.tables.write().await;
        tables.entry(table.to_string()).or_default().insert(id, item);
        Ok(())
    }

    async fn scan(&self, table: &str) -> Result<Vec<Record>, StoreError> {
        self.calls.write().await.push(StoreCall::Scan {
            table: table.to_string(),
        });

        let tables = self.tables.read().await;
        Ok(tables
            .get(table)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn delete(&self, table: &str, key: &str) -> Result<(), StoreError> {
        self.calls.write().await.push(StoreCall::Delete {
            table: table.to_string(),
            key: key.to_string(),
        });

        let mut tables = self.tables.write().await;
        if let Some(records) = tables.get_mut(table) {
            records.remove(key);
        }
        Ok(())
    }
}
