use crate::Classifier;
use crate::error::Result;
use crate::record::{Record, fetch};


/// Returns the fraction of `records` whose prediction by `f`
/// differs from their `label` value.
/// An unclassifiable record counts as a mistake.
/// Returns `0` for an empty slice.
pub fn zero_one_loss<R, H>(records: &[R], f: &H, label: &str) -> Result<f64>
    where R: Record,
          H: Classifier,
{
    if records.is_empty() { return Ok(0f64); }

    let mut n_mistakes = 0_usize;
    for record in records {
        let truth = fetch(record, label)?;
        if f.outcome(record)? != Some(truth) {
            n_mistakes += 1;
        }
    }

    Ok(n_mistakes as f64 / records.len() as f64)
}
