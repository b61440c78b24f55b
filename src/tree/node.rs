//! Defines the inner representation
//! of the decision tree classifier.
use std::fmt;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::record::{Record, fetch};


/// Enumeration of branch and leaf nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A node that tests one attribute and
    /// has one child per observed value.
    Branch {
        /// The attribute tested on this node.
        attribute: String,
        /// Observed value -> child node.
        children: BTreeMap<String, Node>,
    },
    /// A node that predicts a label.
    Leaf {
        /// The predicted label.
        label: String,
    },
}


impl Node {
    /// Construct a branch node.
    /// `children` must not be empty.
    pub fn branch<T>(attribute: T, children: BTreeMap<String, Node>) -> Self
        where T: Into<String>
    {
        debug_assert!(!children.is_empty(), "A branch needs a child");
        Self::Branch { attribute: attribute.into(), children, }
    }


    /// Construct a leaf node that predicts `label`.
    pub fn leaf<T: Into<String>>(label: T) -> Self {
        Self::Leaf { label: label.into(), }
    }


    /// Returns `true` if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Walk from this node down to a leaf following `record`.
    /// Returns `None` if `record` holds a value
    /// that was never observed on the way.
    pub fn classify<R>(&self, record: &R) -> Result<Option<&str>>
        where R: Record + ?Sized
    {
        let mut node = self;
        loop {
            match node {
                Self::Leaf { label } => return Ok(Some(label.as_str())),
                Self::Branch { attribute, children } => {
                    let value = fetch(record, attribute)?;
                    match children.get(value) {
                        Some(child) => { node = child; },
                        None => return Ok(None),
                    }
                },
            }
        }
    }


    /// Returns the number of edges on the longest root-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Branch { children, .. } => {
                1 + children.values()
                    .map(|child| child.depth())
                    .max()
                    .unwrap_or(0)
            },
        }
    }


    /// Returns the number of leaves under this node.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Branch { children, .. } => {
                children.values()
                    .map(|child| child.n_leaves())
                    .sum()
            },
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch { attribute, children } => {
                let attribute = escape_dot(attribute);
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{attribute} ?\" ];\n",
                )];

                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);

                    let value = escape_dot(value);
                    let edge = format!(
                        "\tnode_{id} -- node_{child_id} \
                         [ label = \"{value}\" ];\n",
                    );
                    info.push(edge);
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Self::Leaf { label } => {
                let label = escape_dot(label);
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }


    pub(super) fn fmt_indented(
        &self,
        f: &mut fmt::Formatter<'_>,
        indent: usize,
    ) -> fmt::Result
    {
        match self {
            Self::Leaf { label } => writeln!(f, "[{label}]"),
            Self::Branch { attribute, children } => {
                writeln!(f, "{attribute}")?;
                for (value, child) in children {
                    write!(f, "{:indent$}  {attribute} = {value} -> ", "")?;
                    child.fmt_indented(f, indent + 2)?;
                }
                Ok(())
            },
        }
    }
}


/// Escape `text` so that it fits in a quoted DOT string.
fn escape_dot(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
