//! Generic record model shared by every record kind.

use crate::error::{KindredError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumString};

/// Numeric identifier assigned by the record service.
pub type RecordId = u64;

/// Field name → value map carried by a record.
pub type Fields = Map<String, Value>;

/// The tables exposed by the record service.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecordKind {
    Profile,
    Match,
    Simulation,
    User,
}

/// A single stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub fields: Fields,
}

impl Record {
    pub fn new(id: RecordId, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Reads and deserializes a field. Missing and `null` fields yield `None`.
    ///
    /// # Errors
    ///
    /// Returns a `Serialization` error if the field holds an incompatible value.
    pub fn field<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        match self.fields.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone()).map(Some).map_err(|e| {
                KindredError::Serialization {
                    format: "JSON".to_string(),
                    message: format!("field '{}' of record {}: {}", name, self.id, e),
                }
            }),
        }
    }

    /// Like [`field`](Self::field) but falls back to `T::default()` when missing.
    pub fn field_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        Ok(self.field(name)?.unwrap_or_default())
    }

    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Overwrites the named fields with those in `partial`, keeping the rest.
    /// A `null` value removes the field.
    pub fn merge(&mut self, partial: Fields) {
        for (name, value) in partial {
            if value.is_null() {
                self.fields.remove(&name);
            } else {
                self.fields.insert(name, value);
            }
        }
    }
}
