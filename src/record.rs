//! Access to the named, string-valued fields of a record.
//!
//! The tree never inspects a record directly.
//! It asks the record for its [`Schema`] once per training run
//! and for single field values through [`Record::value`].

pub mod row;
pub mod json_record;

pub use row::Row;
pub use json_record::JsonRecord;

use crate::error::{Result, TreeError};


/// The field names of a record type
/// and the one designated as the class label, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    fields: Vec<String>,
    label: Option<String>,
}


impl Schema {
    /// Construct a schema from field names given in declaration order.
    /// The returned schema designates no label.
    pub fn new<I, T>(fields: I) -> Self
        where I: IntoIterator<Item = T>,
              T: Into<String>,
    {
        let fields = fields.into_iter()
            .map(|field| field.into())
            .collect();
        Self { fields, label: None, }
    }


    /// Designate `label` as the class field.
    pub fn with_label<T: Into<String>>(mut self, label: T) -> Self {
        self.label = Some(label.into());
        self
    }


    /// Returns all field names in declaration order,
    /// the label included.
    pub fn fields(&self) -> &[String] {
        &self.fields[..]
    }


    /// Returns the designated label field.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }


    /// Returns `true` if `field` is part of this schema.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }


    /// Returns the position of `field` in declaration order.
    pub fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }


    /// Returns the fields that are candidates for splitting,
    /// i.e., every field but `label`.
    pub(crate) fn attributes<'a>(&'a self, label: &str) -> Vec<&'a str> {
        self.fields.iter()
            .map(|f| f.as_str())
            .filter(|&f| f != label)
            .collect()
    }
}


/// A labeled tuple of named string values.
///
/// Implement this for your own record types with a static field map:
/// ```
/// use simpletree::{Record, Schema};
///
/// struct Weather {
///     outlook: String,
///     windy: String,
///     play: String,
/// }
///
/// impl Record for Weather {
///     fn schema(&self) -> Schema {
///         Schema::new(["outlook", "windy", "play"]).with_label("play")
///     }
///
///     fn value(&self, field: &str) -> Option<&str> {
///         match field {
///             "outlook" => Some(&self.outlook),
///             "windy" => Some(&self.windy),
///             "play" => Some(&self.play),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the schema of this record's type.
    fn schema(&self) -> Schema;


    /// Returns the value of `field`,
    /// or `None` if this record does not hold it.
    fn value(&self, field: &str) -> Option<&str>;
}


impl<T: Record + ?Sized> Record for &T {
    fn schema(&self) -> Schema {
        (**self).schema()
    }


    fn value(&self, field: &str) -> Option<&str> {
        (**self).value(field)
    }
}


/// Returns the value of `field` held by `record`,
/// failing if the record cannot resolve it.
#[inline]
pub(crate) fn fetch<'r, R>(record: &'r R, field: &str) -> Result<&'r str>
    where R: Record + ?Sized
{
    record.value(field)
        .ok_or_else(|| TreeError::unknown_field(field))
}
