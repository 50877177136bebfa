//! Message table adapter.
//!
//! Translates add/get_all/del onto a [`StoreClient`] and decodes store
//! records back into [`Message`] values. Holds no cache and no mutable
//! state; every operation is a single request against the store.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::TableConfig;
use crate::error::StorageError;
use crate::models::Message;
use crate::store_client::StoreClient;

/// Adapter for one named message table.
///
/// The table name is fixed at construction. Concurrent calls are
/// independent; consistency between them is whatever the store provides.
#[derive(Clone)]
pub struct MessageTable {
    client: Arc<dyn StoreClient>,
    table_name: String,
}

impl MessageTable {
    pub fn new(client: Arc<dyn StoreClient>, config: TableConfig) -> Self {
        Self {
            client,
            table_name: config.table_name,
        }
    }

    /// Persists `message`, overwriting any record with the same id.
    pub async fn add(&self, message: &Message) -> Result<(), StorageError> {
        self.client
            .put(&self.table_name, message.to_record())
            .await
            .map_err(StorageError::Write)?;

        info!("Saved message: id={}", message.id);
        Ok(())
    }

    /// Returns every message in the table.
    ///
    /// Order is whatever the store returns. Fails with
    /// [`StorageError::Decode`] on the first record that does not match the
    /// persisted layout.
    pub async fn get_all(&self) -> Result<Vec<Message>, StorageError> {
        let records = self
            .client
            .scan(&self.table_name)
            .await
            .map_err(StorageError::Read)?;

        let messages = records
            .iter()
            .map(Message::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        info!("Retrieved {} messages", messages.len());
        Ok(messages)
    }

    /// Deletes the message with the given id.
    ///
    /// Succeeds whether or not a record with that id existed.
    pub async fn del(&self, id: &str) -> Result<(), StorageError> {
        self.client
            .delete(&self.table_name, id)
            .await
            .map_err(StorageError::Delete)?;

        debug!("Deleted message: id={}", id);
        Ok(())
    }
}
