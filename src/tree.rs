//! Gini-based decision trees over categorical records.

/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the decision tree algorithm.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod classifier;
/// Defines the nodes of `DecisionTreeClassifier`.
pub mod node;
/// Gini impurity of record sets.
pub mod impurity;
/// Selection of the best splitting attribute.
pub mod gain;


pub use builder::DecisionTreeBuilder;
pub use dtree::DecisionTree;
pub use classifier::DecisionTreeClassifier;
pub use node::Node;
pub use gain::{InformationGain, best_split};
pub use impurity::{gini_index, weighted_split_gini, is_pure_class};
