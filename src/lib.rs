#![warn(missing_docs)]

//!
//! A crate that grows decision trees over categorical records.
//!
//! The tree is a simplified CART restricted to
//! string-valued, unordered attributes:
//!
//! - Each node splits on the attribute with the maximal
//!     Gini information gain, one branch per observed value.
//!     An attribute is tested at most once per path.
//!
//! - A branch becomes a leaf as soon as its records share one label.
//!     A branch that is still impure but has no attribute left
//!     is dropped, so that value is unclassifiable.
//!
//! Records are anything that implements [`Record`]:
//! rows read from a CSV file ([`SampleReader`]),
//! serialized structs ([`JsonRecord`]),
//! or your own types with a static field map.
//!
//! ```no_run
//! use simpletree::prelude::*;
//!
//! let sample = SampleReader::default()
//!     .file("/path/to/transport.csv")
//!     .has_header(true)
//!     .label_column("transportation")
//!     .read()
//!     .unwrap();
//!
//! let mut tree = DecisionTreeBuilder::new().build();
//! tree.learn(sample.rows()).unwrap();
//!
//! let f = tree.classifier().unwrap();
//! println!("{f}");
//! ```

pub mod error;
pub mod record;
pub mod sample;
pub mod tree;
pub mod hypothesis;
pub mod research;
pub mod prelude;


pub use error::{TreeError, Result};

pub use record::{
    Record,
    Schema,
    Row,
    JsonRecord,
};

pub use sample::{
    Sample,
    SampleReader,
};

pub use tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
};

pub use hypothesis::Classifier;
