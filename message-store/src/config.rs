//! Table configuration.
//!
//! Resolved once by the host application and passed into
//! [`MessageTable::new`](crate::MessageTable::new); the adapter never reads
//! the environment itself.

use crate::error::ConfigError;

/// Name of the environment variable read by [`TableConfig::from_env`].
pub const TABLE_NAME_ENV: &str = "MESSAGES_TABLE";

/// Configuration for a [`MessageTable`](crate::MessageTable).
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub table_name: String,
}

impl TableConfig {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }

    /// Reads the table name from `MESSAGES_TABLE`.
    ///
    /// Convenience for hosts that configure through the environment; an
    /// unset or empty variable is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(TABLE_NAME_ENV) {
            Ok(name) if !name.is_empty() => Ok(Self::new(name)),
            _ => Err(ConfigError::MissingTableName),
        }
    }
}
