use super::dtree::DecisionTree;


/// A struct that builds [`DecisionTree`].
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```
/// use simpletree::prelude::*;
///
/// let tree = DecisionTreeBuilder::new()
///     .label("transportation")
///     .verbose(false)
///     .build();
/// assert!(tree.classifier().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecisionTreeBuilder {
    label: Option<String>,
    verbose: bool,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// label: the label designated by the record type,
    /// verbose: false,
    /// ```
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the field predicted by the tree.
    /// This overrides the label designated by the record type.
    pub fn label<T: Into<String>>(mut self, label: T) -> Self {
        self.label = Some(label.into());
        self
    }


    /// Set the verbose parameter.
    /// If `true`, the tree prints every split, leaf and
    /// dropped branch while growing.
    /// Default value is `false`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree {
        DecisionTree::from_components(self.label, self.verbose)
    }
}
