//! Gini impurity of record sets over categorical fields.
//!
//! Every count is kept in an ordered map
//! so that floating sums do not depend on hash iteration order.
use std::collections::BTreeMap;

use crate::error::Result;
use crate::record::{Record, fetch};


/// Returns the Gini index of `records` with respect to `field`,
/// i.e., `1 - Σ p_v²` where `p_v` is the proportion of records
/// whose `field` takes value `v`.
///
/// An empty record set or an empty field name yields `0`.
/// This is "nothing to compute", not "pure".
pub fn gini_index<R>(records: &[&R], field: &str) -> Result<f64>
    where R: Record + ?Sized
{
    if records.is_empty() || field.is_empty() { return Ok(0f64); }

    let counter = count_values(records, field)?;
    Ok(gini_from_counts(&counter, records.len()))
}


/// Returns the impurity left after splitting `records` by `split`,
/// measured over `label`.
///
/// Each group of records sharing a `split` value contributes
/// its own Gini index over `label`, weighted by the group size.
/// Groups whose records share one label are skipped entirely.
/// Lower is better.
pub fn weighted_split_gini<R>(records: &[&R], split: &str, label: &str)
    -> Result<f64>
    where R: Record + ?Sized
{
    if records.is_empty() || split.is_empty() || label.is_empty() {
        return Ok(0f64);
    }

    // split value -> label value -> count
    let mut table: BTreeMap<&str, BTreeMap<&str, usize>> = BTreeMap::new();
    for &record in records {
        let value = fetch(record, split)?;
        let class = fetch(record, label)?;
        *table.entry(value)
            .or_default()
            .entry(class)
            .or_insert(0) += 1;
    }

    let n_records = records.len() as f64;
    let impurity = table.values()
        .filter(|labels| labels.len() > 1)
        .map(|labels| {
            let size = labels.values().sum::<usize>();
            let weight = size as f64 / n_records;
            weight * gini_from_counts(labels, size)
        })
        .sum::<f64>();

    Ok(impurity)
}


/// Returns `true` if every record holds the same `label` value.
/// An empty record set is not pure.
pub fn is_pure_class<R>(records: &[&R], label: &str) -> Result<bool>
    where R: Record + ?Sized
{
    let Some((&first, rest)) = records.split_first() else {
        return Ok(false);
    };
    if label.is_empty() { return Ok(false); }

    let class = fetch(first, label)?;
    for &record in rest {
        if fetch(record, label)? != class {
            return Ok(false);
        }
    }
    Ok(true)
}


/// Groups `records` by their value of `field`.
/// Records keep their relative order inside each group.
pub(crate) fn partition<'r, R>(records: &[&'r R], field: &str)
    -> Result<BTreeMap<&'r str, Vec<&'r R>>>
    where R: Record + ?Sized
{
    let mut groups: BTreeMap<&str, Vec<&R>> = BTreeMap::new();
    for &record in records {
        let value = fetch(record, field)?;
        groups.entry(value).or_default().push(record);
    }
    Ok(groups)
}


fn count_values<'r, R>(records: &[&'r R], field: &str)
    -> Result<BTreeMap<&'r str, usize>>
    where R: Record + ?Sized
{
    let mut counter = BTreeMap::new();
    for &record in records {
        let value = fetch(record, field)?;
        *counter.entry(value).or_insert(0_usize) += 1;
    }
    Ok(counter)
}


#[inline]
fn gini_from_counts(counter: &BTreeMap<&str, usize>, total: usize) -> f64 {
    let total = total as f64;
    let correct = counter.values()
        .map(|&n| (n as f64 / total).powi(2))
        .sum::<f64>();

    (1f64 - correct).max(0f64)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Row, Schema};
    use crate::error::TreeError;
    use std::sync::Arc;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn rows(table: &[[&str; 3]]) -> Vec<Row> {
        let schema = Schema::new(["color", "size", "class"])
            .with_label("class");
        let schema = Arc::new(schema);
        table.iter()
            .map(|values| Row::new(Arc::clone(&schema), *values))
            .collect()
    }

    fn refs(rows: &[Row]) -> Vec<&Row> {
        rows.iter().collect()
    }

    #[test]
    fn gini_of_ten_records_with_three_classes() {
        // 4 `B`, 3 `C` and 3 `T`.
        let table = [
            ["x", "s", "B"], ["x", "s", "B"], ["x", "s", "B"], ["x", "s", "B"],
            ["x", "s", "C"], ["x", "s", "C"], ["x", "s", "C"],
            ["x", "s", "T"], ["x", "s", "T"], ["x", "s", "T"],
        ];
        let rows = rows(&table);
        let gini = gini_index(&refs(&rows), "class").unwrap();
        let expected = 1.0 - (0.4_f64.powi(2) + 0.3_f64.powi(2) * 2.0);
        assert!((gini - expected).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn gini_is_zero_for_a_pure_set() {
        let rows = rows(&[["x", "s", "B"], ["y", "m", "B"]]);
        let gini = gini_index(&refs(&rows), "class").unwrap();
        assert!(gini.abs() < TEST_TOLERANCE);
    }

    #[test]
    fn gini_stays_below_one_minus_inverse_classes() {
        let rows = rows(&[
            ["x", "s", "A"], ["x", "s", "B"], ["x", "s", "C"],
            ["x", "s", "A"], ["x", "s", "A"],
        ]);
        let gini = gini_index(&refs(&rows), "class").unwrap();
        assert!(gini >= 0.0);
        assert!(gini <= 1.0 - 1.0 / 3.0 + TEST_TOLERANCE);
    }

    #[test]
    fn degenerate_inputs_yield_zero() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(gini_index(&refs(&rows), "class").unwrap(), 0.0);

        let rows = rows_with_one();
        assert_eq!(gini_index(&refs(&rows), "").unwrap(), 0.0);
        assert_eq!(weighted_split_gini(&refs(&rows), "", "class").unwrap(), 0.0);
    }

    fn rows_with_one() -> Vec<Row> {
        rows(&[["x", "s", "A"]])
    }

    #[test]
    fn pure_groups_do_not_contribute() {
        // `color = x` is pure, `color = y` holds one `A` and one `B`.
        let rows = rows(&[
            ["x", "s", "A"], ["x", "m", "A"],
            ["y", "s", "A"], ["y", "m", "B"],
        ]);
        let impurity = weighted_split_gini(&refs(&rows), "color", "class")
            .unwrap();
        // weight 2/4, gini 1/2
        assert!((impurity - 0.25).abs() < TEST_TOLERANCE);

        let impurity = weighted_split_gini(&refs(&rows), "size", "class")
            .unwrap();
        // `size = s` is pure, `size = m` holds one `A` and one `B`.
        assert!((impurity - 0.25).abs() < TEST_TOLERANCE);
    }

    #[test]
    fn purity() {
        let rows = rows(&[["x", "s", "A"], ["y", "m", "A"]]);
        assert!(is_pure_class(&refs(&rows), "class").unwrap());

        let rows = rows_with_one();
        assert!(!is_pure_class(&refs(&rows), "").unwrap());

        let rows: Vec<Row> = Vec::new();
        assert!(!is_pure_class(&refs(&rows), "class").unwrap());
    }

    #[test]
    fn partition_keeps_order_inside_groups() {
        let rows = rows(&[
            ["y", "s", "A"], ["x", "m", "B"], ["y", "l", "C"],
        ]);
        let groups = partition(&refs(&rows), "color").unwrap();
        assert_eq!(groups.len(), 2);
        let sizes = groups["y"].iter()
            .map(|r| r.value("size").unwrap())
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec!["s", "l"]);
    }

    #[test]
    fn unknown_fields_propagate() {
        let rows = rows_with_one();
        let err = gini_index(&refs(&rows), "weight").unwrap_err();
        assert!(matches!(
            err,
            TreeError::UnknownField { ref field } if field == "weight"
        ));
        assert!(weighted_split_gini(&refs(&rows), "weight", "class").is_err());
    }
}
