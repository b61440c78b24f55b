//! The trait shared by trained trees.
use crate::error::Result;
use crate::record::Record;


/// A trait that defines the behavior of classifier.
/// You only need to implement `outcome` method.
pub trait Classifier {
    /// Predicts the label of `record`.
    /// Returns `Ok(None)` if `record` cannot be classified,
    /// and an error if `record` lacks a field the classifier reads.
    fn outcome<R: Record>(&self, record: &R) -> Result<Option<&str>>;


    /// Predicts the labels of `records`.
    fn predict_all<R: Record>(&self, records: &[R])
        -> Result<Vec<Option<&str>>>
    {
        records.iter()
            .map(|record| self.outcome(record))
            .collect()
    }
}
