use colored::Colorize;

use crate::Classifier;
use crate::error::{Result, TreeError};
use crate::record::{Record, fetch};
use super::{
    node::Node,
    gain::{InformationGain, best_split},
    impurity::{is_pure_class, partition},
    classifier::DecisionTreeClassifier,
};

use std::fmt;
use std::collections::BTreeMap;


/// The Decision Tree algorithm for categorical records.
/// Given a set of labeled records,
/// [`DecisionTree`] grows a tree that splits on the attribute
/// with the maximal Gini information gain until every branch is pure,
/// and keeps the resulting [`DecisionTreeClassifier`].
///
/// An attribute is tested at most once per root-leaf path.
/// A branch whose records are impure but have no attribute left
/// is dropped, so its value is unclassifiable.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// `learn` takes `&mut self` and `outcome` takes `&self`,
/// so retraining cannot overlap a query on the same instance.
///
/// # Example
/// ```no_run
/// use simpletree::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/transport.csv")
///     .has_header(true)
///     .label_column("transportation")
///     .read()
///     .unwrap();
///
/// let mut tree = DecisionTreeBuilder::new().build();
/// tree.learn(sample.rows()).unwrap();
///
/// for query in sample.queries() {
///     let label = tree.outcome(&query).unwrap();
///     println!("{query} -> {label:?}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTree {
    label: Option<String>,
    verbose: bool,
    classifier: Option<DecisionTreeClassifier>,
}


impl DecisionTree {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(label: Option<String>, verbose: bool)
        -> Self
    {
        Self { label, verbose, classifier: None, }
    }


    /// Grow a tree from `records`.
    ///
    /// Returns `Ok(false)` without touching the current tree
    /// if `records` is empty.
    /// On success the new tree replaces the current one;
    /// on failure the current tree is kept.
    pub fn learn<R: Record>(&mut self, records: &[R]) -> Result<bool> {
        if records.is_empty() { return Ok(false); }

        let records = records.iter().collect::<Vec<&R>>();
        let classifier = self.produce(&records)?;
        self.classifier = Some(classifier);

        Ok(true)
    }


    /// Returns the trained classifier, if any.
    pub fn classifier(&self) -> Option<&DecisionTreeClassifier> {
        self.classifier.as_ref()
    }


    /// Grow a classifier from non-empty `records`.
    fn produce<R: Record>(&self, records: &[&R])
        -> Result<DecisionTreeClassifier>
    {
        let schema = records[0].schema();
        if schema.fields().is_empty() {
            return Err(TreeError::EmptySchema);
        }

        let label = self.label.as_deref()
            .or(schema.label())
            .ok_or(TreeError::MissingLabel)?;
        if !schema.contains(label) {
            return Err(TreeError::UnknownLabel(label.to_string()));
        }

        let attributes = schema.attributes(label);
        if attributes.is_empty() {
            return Err(TreeError::NoAttribute { label: label.to_string() });
        }

        // A pure sample needs no test at all.
        if is_pure_class(records, label)? {
            let class = fetch(records[0], label)?;
            self.log_leaf(0, None, class);
            let root = Node::leaf(class);
            self.log_summary(&root, records.len());
            return Ok(DecisionTreeClassifier::from_components(root, label));
        }

        let root = best_split(records, label, &attributes)?
            .ok_or_else(|| TreeError::NoAttribute { label: label.to_string() })?;
        self.log_split(0, None, &root);

        let used = [root.attribute];
        let children = self.grow(
            records, label, &attributes, &used, root.attribute, 1
        )?;
        if children.is_empty() {
            return Err(TreeError::Unsplittable {
                attribute: root.attribute.to_string(),
            });
        }

        let root = Node::branch(root.attribute, children);
        self.log_summary(&root, records.len());

        Ok(DecisionTreeClassifier::from_components(root, label))
    }


    /// Partition `records` by `split` and
    /// construct one child per observed value.
    /// `used` holds the attributes tested on the path to here,
    /// `split` included.
    fn grow<'a, R: Record>(
        &self,
        records: &[&R],
        label: &str,
        attributes: &[&'a str],
        used: &[&'a str],
        split: &str,
        depth: usize,
    ) -> Result<BTreeMap<String, Node>>
    {
        let mut children = BTreeMap::new();

        for (value, group) in partition(records, split)? {
            let branch = Some((split, value));

            if is_pure_class(&group, label)? {
                let class = fetch(group[0], label)?;
                self.log_leaf(depth, branch, class);
                children.insert(value.to_string(), Node::leaf(class));
                continue;
            }

            let candidates = attributes.iter()
                .copied()
                .filter(|attribute| !used.contains(attribute))
                .collect::<Vec<_>>();

            let Some(best) = best_split(&group, label, &candidates)? else {
                self.log_drop(depth, branch, "no attribute left");
                continue;
            };
            self.log_split(depth, branch, &best);

            let mut path = used.to_vec();
            path.push(best.attribute);
            let grandchildren = self.grow(
                &group, label, attributes, &path, best.attribute, depth + 1
            )?;

            if grandchildren.is_empty() {
                self.log_drop(depth, branch, "every branch dropped");
                continue;
            }

            let node = Node::branch(best.attribute, grandchildren);
            children.insert(value.to_string(), node);
        }

        Ok(children)
    }


    fn log_split(
        &self,
        depth: usize,
        branch: Option<(&str, &str)>,
        gain: &InformationGain<'_>,
    )
    {
        if !self.verbose { return; }
        println!(
            "{}    {}    {}",
            format!("  [depth {depth: >2}]").bold().red(),
            branch_tag(branch).bold().green(),
            format!("[SPLIT {gain}]").bold().yellow(),
        );
    }


    fn log_leaf(&self, depth: usize, branch: Option<(&str, &str)>, class: &str) {
        if !self.verbose { return; }
        println!(
            "{}    {}    {}",
            format!("  [depth {depth: >2}]").bold().red(),
            branch_tag(branch).bold().green(),
            format!("[LEAF {class}]").bold().cyan(),
        );
    }


    fn log_drop(&self, depth: usize, branch: Option<(&str, &str)>, why: &str) {
        if !self.verbose { return; }
        println!(
            "{}    {}    {}",
            format!("  [depth {depth: >2}]").bold().red(),
            branch_tag(branch).bold().green(),
            format!("[DROP {why}]").bold().magenta(),
        );
    }


    fn log_summary(&self, root: &Node, n_records: usize) {
        if !self.verbose { return; }
        println!(
            "{}    {}    {}",
            format!("  [records {n_records: >5}]").bold().red(),
            format!("[depth {: >3}]", root.depth()).bold().green(),
            format!("[leaves {: >4}]", root.n_leaves()).bold().yellow(),
        );
    }
}


fn branch_tag(branch: Option<(&str, &str)>) -> String {
    match branch {
        Some((attribute, value)) => format!("[{attribute} = {value}]"),
        None => "[root]".to_string(),
    }
}


impl Classifier for DecisionTree {
    /// Returns `None` if the tree was never trained.
    fn outcome<R: Record>(&self, record: &R) -> Result<Option<&str>> {
        match self.classifier.as_ref() {
            Some(classifier) => classifier.outcome(record),
            None => Ok(None),
        }
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label.as_deref()
            .unwrap_or("(designated by the record type)");
        let trained = match self.classifier.as_ref() {
            Some(classifier) => {
                let root = classifier.root();
                format!(
                    "yes ({} leaves, depth {})",
                    root.n_leaves(),
                    root.depth()
                )
            },
            None => "no".to_string(),
        };
        write!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Label: {label}\n\
            - Splitting criterion: Gini index\n\
            - Trained: {trained}\n\
            ----------\
            "
        )
    }
}
