//! Errors raised while reading records, growing a tree,
//! or walking a tree for a record.
use thiserror::Error;

use std::io;


/// The error type of this crate.
#[derive(Error, Debug)]
pub enum TreeError {
    /// Neither the record type nor the builder designates a label field.
    #[error(
        "record type has no label field. \
        Use `DecisionTreeBuilder::label`"
    )]
    MissingLabel,

    /// The designated label is not a field of the record type.
    #[error("label field `{0}` is not part of the record schema")]
    UnknownLabel(String),

    /// The record type declares no field at all.
    #[error("record type has no attribute schema")]
    EmptySchema,

    /// The record type has no attribute other than the label,
    /// so no root can be chosen.
    #[error("record type has no attribute other than the label `{label}`")]
    NoAttribute {
        /// The label field.
        label: String,
    },

    /// Every branch of the root split was dropped.
    ///
    /// This is the only failure of tree construction itself.
    /// A root without children would classify no record at all,
    /// so `learn` reports it and keeps the previous tree
    /// instead of storing an empty one.
    #[error("splitting on `{attribute}` yields no classifiable branch")]
    Unsplittable {
        /// The attribute chosen for the root.
        attribute: String,
    },

    /// A record cannot resolve the requested field.
    #[error("record has no field named `{field}`")]
    UnknownField {
        /// The requested field.
        field: String,
    },

    /// An attribute holds something other than a string.
    #[error("attribute `{field}` does not hold a string value")]
    NonStringValue {
        /// The offending field.
        field: String,
    },

    /// A dataframe cell is null.
    #[error("column `{field}` has no value at row {row}")]
    MissingValue {
        /// The column name.
        field: String,
        /// The row index.
        row: usize,
    },

    /// A delimited line has more values than the header.
    #[error("line {line}: expected at most {expected} values, got {got}")]
    Malformed {
        /// 1-indexed line number.
        line: usize,
        /// Number of columns in the header.
        expected: usize,
        /// Number of values on the line.
        got: usize,
    },

    /// `SampleReader::read` was called without a file.
    #[error("the file to read is not set. Use `SampleReader::file`")]
    MissingFile,

    /// An I/O failure while reading a sample.
    #[error("I/O error: {context}")]
    Io {
        /// What was being done.
        context: String,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A failure inside `polars`.
    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),

    /// A failure while serializing a value into a record.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}


impl TreeError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }


    /// Create an accessor error for `field`.
    pub(crate) fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField { field: field.into() }
    }
}


/// Result type of this crate.
pub type Result<T> = std::result::Result<T, TreeError>;
