//! Defines the decision tree classifier.
use crate::Classifier;
use crate::error::Result;
use crate::record::Record;
use super::node::Node;

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::{self, prelude::*};


/// Decision tree classifier.
/// This struct is a wrapper of the root [`Node`]
/// together with the label field it predicts.
/// It is never modified once grown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTreeClassifier {
    root: Node,
    label: String,
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn from_components<T>(root: Node, label: T) -> Self
        where T: Into<String>
    {
        Self { root, label: label.into(), }
    }


    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the name of the field this tree predicts.
    pub fn label_field(&self) -> &str {
        &self.label
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl Classifier for DecisionTreeClassifier {
    fn outcome<R: Record>(&self, record: &R) -> Result<Option<&str>> {
        self.root.classify(record)
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_indented(f, 0)
    }
}
