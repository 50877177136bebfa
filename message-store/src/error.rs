//! Storage error types.
//!
//! Used by the store clients, the message table, and callers of both.

use thiserror::Error;

/// Errors surfaced by [`MessageTable`](crate::MessageTable) operations.
///
/// Each variant tags which operation failed and carries the store client's
/// failure unchanged; this layer performs no retry and no recovery.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("write failed: {0}")]
    Write(#[source] StoreError),
    #[error("read failed: {0}")]
    Read(#[source] StoreError),
    #[error("delete failed: {0}")]
    Delete(#[source] StoreError),
    #[error("malformed record: {0}")]
    Decode(#[from] DecodeError),
}

/// Failures reported by a [`StoreClient`](crate::StoreClient) implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The named table does not exist in the store.
    #[error("table not found: {0}")]
    MissingTable(String),
    /// The store rejected the request (invalid table name, item without an id).
    #[error("request rejected: {0}")]
    Rejected(String),
    /// Driver, network, or other backend failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// A scanned record did not match the persisted layout.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("field `{0}` has the wrong type")]
    WrongType(&'static str),
    #[error("field `id` is empty")]
    EmptyId,
}

/// Errors from [`TableConfig::from_env`](crate::TableConfig::from_env).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MESSAGES_TABLE is not set")]
    MissingTableName,
}
