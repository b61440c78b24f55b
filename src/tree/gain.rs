//! Selection of the attribute that maximizes information gain.
use std::fmt;
use std::cmp::Ordering;

use crate::error::Result;
use crate::record::Record;
use super::impurity::{gini_index, weighted_split_gini};


/// A pair of an attribute and the information gain
/// obtained by splitting on it.
/// Pairs are ordered by gain.
#[derive(Copy, Clone, Debug)]
pub struct InformationGain<'a> {
    /// The attribute name.
    pub attribute: &'a str,
    /// Baseline impurity minus the impurity after the split.
    pub gain: f64,
}


impl<'a> InformationGain<'a> {
    /// Construct a new pair.
    #[inline]
    pub fn new(attribute: &'a str, gain: f64) -> Self {
        Self { attribute, gain, }
    }
}


impl PartialEq for InformationGain<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.gain.eq(&other.gain)
    }
}


impl PartialOrd for InformationGain<'_> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.gain.partial_cmp(&other.gain)
    }
}


impl fmt::Display for InformationGain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {:.4}}}", self.attribute, self.gain)
    }
}


/// Returns the candidate attribute whose split of `records`
/// yields the maximal information gain over `label`.
///
/// Candidates are evaluated in the given order and
/// an exact tie keeps the one evaluated first.
/// Returns `None` if `candidates` is empty.
pub fn best_split<'a, R>(
    records: &[&R],
    label: &str,
    candidates: &[&'a str],
) -> Result<Option<InformationGain<'a>>>
    where R: Record + ?Sized
{
    let baseline = gini_index(records, label)?;

    let mut best: Option<InformationGain<'a>> = None;
    for &attribute in candidates {
        let impurity = weighted_split_gini(records, attribute, label)?;
        let candidate = InformationGain::new(attribute, baseline - impurity);

        // Strict comparison, so that the earlier one survives a tie.
        let improves = best.map_or(true, |current| candidate > current);
        if improves {
            best = Some(candidate);
        }
    }

    Ok(best)
}
