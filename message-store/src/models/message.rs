//! Message model and its persisted-record codec.
//!
//! A `Message` is immutable after construction and maps to a flat record
//! with fields `id`, `text`, `test`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::DecodeError;
use crate::store_client::Record;

/// Controls whether construction mints a fresh id.
///
/// Either policy leaves the message with a non-empty id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Reuse a supplied id; generate one only when the payload has none.
    #[default]
    GenerateIfMissing,
    /// Mint a fresh id even when the payload supplies one.
    AlwaysGenerate,
}

/// Construction payload for [`Message::new`].
#[derive(Debug, Clone, Default)]
pub struct NewMessage {
    pub id: Option<String>,
    pub text: String,
    pub is_test: bool,
}

/// One message record.
///
/// `is_test` is advisory metadata carried through storage (persisted under
/// the field name `test`); the table logic never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    #[serde(rename = "test", default)]
    pub is_test: bool,
}

impl Message {
    /// Creates a message, assigning a UUID per `policy`.
    pub fn new(payload: NewMessage, policy: IdPolicy) -> Self {
        let id = match (policy, payload.id) {
            (IdPolicy::GenerateIfMissing, Some(id)) => id,
            _ => Uuid::new_v4().to_string(),
        };
        Self {
            id,
            text: payload.text,
            is_test: payload.is_test,
        }
    }

    /// Serializes to the flat persisted layout.
    pub fn to_record(&self) -> Record {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // A struct of plain fields always serializes to an object.
            _ => unreachable!("Message serializes to a JSON object"),
        }
    }

    /// Decodes a raw store record, validating its shape.
    ///
    /// `test` is optional and defaults to false; `id` must be a non-empty
    /// string.
    pub fn from_record(record: &Record) -> Result<Self, DecodeError> {
        let id = match record.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(_) => return Err(DecodeError::WrongType("id")),
            None => return Err(DecodeError::MissingField("id")),
        };
        if id.is_empty() {
            return Err(DecodeError::EmptyId);
        }
        let text = match record.get("text") {
            Some(Value::String(text)) => text.clone(),
            Some(_) => return Err(DecodeError::WrongType("text")),
            None => return Err(DecodeError::MissingField("text")),
        };
        let is_test = match record.get("test") {
            Some(Value::Bool(flag)) => *flag,
            Some(_) => return Err(DecodeError::WrongType("test")),
            None => false,
        };
        Ok(Self { id, text, is_test })
    }
}
