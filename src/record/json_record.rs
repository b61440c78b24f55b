//! A record built from any `serde::Serialize` value.
//!
//! This lets plain structs act as records
//! without a hand-written field map.
use serde::Serialize;
use serde_json::{Map, Value};

use super::{Record, Schema};
use crate::error::{Result, TreeError};


/// A record that holds the string fields of a serialized struct.
///
/// ```
/// use serde::Serialize;
/// use simpletree::{JsonRecord, Record};
///
/// #[derive(Serialize)]
/// struct Weather {
///     outlook: String,
///     play: Option<String>,
/// }
///
/// let weather = Weather { outlook: "sunny".into(), play: None, };
/// let record = JsonRecord::from_serialize(&weather).unwrap();
/// assert_eq!(record.value("outlook"), Some("sunny"));
/// assert_eq!(record.value("play"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRecord {
    fields: Map<String, Value>,
}


impl JsonRecord {
    /// Serialize `value` into a record.
    ///
    /// `value` must serialize to a JSON object
    /// whose members are strings or `null`.
    /// A `null` member (e.g., an unset `Option<String>`)
    /// is part of the schema but holds no value.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        let fields = match serde_json::to_value(value)? {
            Value::Object(fields) => fields,
            _ => {
                return Err(TreeError::NonStringValue {
                    field: std::any::type_name::<T>().to_string(),
                });
            },
        };

        let offending = fields.iter()
            .find(|(_, v)| !matches!(v, Value::String(_) | Value::Null));
        if let Some((field, _)) = offending {
            return Err(TreeError::NonStringValue { field: field.clone() });
        }

        Ok(Self { fields })
    }
}


impl Record for JsonRecord {
    fn schema(&self) -> Schema {
        Schema::new(self.fields.keys().cloned())
    }


    fn value(&self, field: &str) -> Option<&str> {
        self.fields.get(field)
            .and_then(|v| v.as_str())
    }
}
