//! This directory provides some features for evaluating a tree
//! - Train/test splitting for cross validation
//! - Zero-one loss over labeled records

/// Defines cross validation.
pub mod cross_validation;

/// Defines loss functions.
pub mod loss_functions;


pub use cross_validation::CrossValidation;
pub use loss_functions::zero_one_loss;
