//! Store client abstraction.
//!
//! The narrow interface between the message table and the external
//! key-value store. Implementations: [`SqliteStoreClient`] (persistent) and
//! [`InMemoryStoreClient`] (fake for tests and development).
//!
//! [`SqliteStoreClient`]: crate::SqliteStoreClient
//! [`InMemoryStoreClient`]: crate::InMemoryStoreClient

use async_trait::async_trait;

use crate::error::StoreError;

/// A flat persisted record, exactly as the store returns it.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Key-value store operations against named tables.
///
/// Each method maps to exactly one request against the store. No method
/// retries, and none follows pagination: `scan` returns whatever the single
/// scan request returned.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Writes `item` to `table`, overwriting any record with the same id.
    async fn put(&self, table: &str, item: Record) -> Result<(), StoreError>;

    /// Returns every record in `table`, in whatever order the store yields.
    async fn scan(&self, table: &str) -> Result<Vec<Record>, StoreError>;

    /// Removes the record whose id equals `key`. Deleting a missing key
    /// succeeds.
    async fn delete(&self, table: &str, key: &str) -> Result<(), StoreError>;
}
