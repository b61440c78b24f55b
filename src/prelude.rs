//! Exports the decision tree, the record types and traits.
//!
pub use crate::tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
};


pub use crate::record::{
    Record,
    Schema,
    Row,
    JsonRecord,
};


pub use crate::sample::{
    Sample,
    SampleReader,
};


pub use crate::hypothesis::Classifier;


pub use crate::error::TreeError;
