//! Message store: message persistence and store-client abstractions.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`config`] – TableConfig
//! - [`models`] – Message, NewMessage, IdPolicy
//! - [`store_client`] – StoreClient trait
//! - [`message_table`] – MessageTable adapter
//! - [`memory_store`] – InMemoryStoreClient (fake for tests)
//! - [`sqlite_store`] – SqliteStoreClient (SQLite)

mod config;
mod error;
mod memory_store;
mod message_table;
mod models;
mod sqlite_store;
mod store_client;


pub use config::{TableConfig, TABLE_NAME_ENV};
pub use error::{ConfigError, DecodeError, StorageError, StoreError};
pub use memory_store::{InMemoryStoreClient, StoreCall};
pub use message_table::MessageTable;
pub use models::{IdPolicy, Message, NewMessage};
pub use sqlite_store::SqliteStoreClient;
pub use store_client::{Record, StoreClient};
