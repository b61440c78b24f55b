//! A row of a [`Sample`](crate::Sample).
use super::{Record, Schema};

use std::fmt;
use std::sync::Arc;


/// A row of categorical values.
/// Rows of the same sample share one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    schema: Arc<Schema>,
    values: Vec<Option<String>>,
}


impl Row {
    /// Construct a row from values given in schema order.
    /// The row may be shorter than the schema;
    /// the trailing fields are then absent
    /// (e.g., a query row without its label).
    pub fn new<I, T>(schema: Arc<Schema>, values: I) -> Self
        where I: IntoIterator<Item = T>,
              T: Into<String>,
    {
        let values = values.into_iter()
            .map(|v| Some(v.into()))
            .collect();
        Self { schema, values, }
    }


    /// Returns the schema shared by this row.
    pub fn shared_schema(&self) -> &Arc<Schema> {
        &self.schema
    }


    /// Move this row under `schema`.
    /// The values keep their positions.
    pub(crate) fn with_schema(mut self, schema: Arc<Schema>) -> Self {
        self.schema = schema;
        self
    }


    /// Returns a copy of this row where `field` is absent.
    pub fn without(&self, field: &str) -> Self {
        let mut row = self.clone();
        if let Some(value) = self.schema.position(field)
            .and_then(|i| row.values.get_mut(i))
        {
            *value = None;
        }
        row
    }
}


impl Record for Row {
    fn schema(&self) -> Schema {
        (*self.schema).clone()
    }


    fn value(&self, field: &str) -> Option<&str> {
        self.schema.position(field)
            .and_then(|i| self.values.get(i))
            .and_then(|v| v.as_deref())
    }
}


impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self.schema.fields()
            .iter()
            .zip(&self.values)
            .filter_map(|(name, value)| {
                value.as_ref().map(|v| format!("{name}='{v}'"))
            })
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{pairs}}}")
    }
}
