//! Record envelope returned by the remote store.

use crate::{Result, StoreError};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One record from a named table: an opaque id, the store-assigned creation
/// instant, and a field map.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRecord {
    pub id: String,

    #[serde(rename = "createdTime")]
    pub created_time: DateTime<Utc>,

    /// Fields with empty values are omitted by the store
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl StoreRecord {
    /// Required string field; `Decode` error when missing or not a string.
    pub fn str_field(&self, name: &str) -> Result<&str> {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                StoreError::decode(format!(
                    "record {} is missing string field {name}",
                    self.id
                ))
            })
    }

    /// Optional string field, empty string when absent.
    pub fn str_field_or_default(&self, name: &str) -> &str {
        self.fields.get(name).and_then(Value::as_str).unwrap_or("")
    }

    /// Checkbox field; the store omits unchecked boxes entirely, so absent
    /// means false.
    pub fn bool_field(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}
