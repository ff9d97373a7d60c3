//! Merging normalized datasets into one time-sorted table.

use std::collections::HashMap;

use crate::data::dataset::Dataset;

/// One row of the merged table: a distinct time value plus every namespaced
/// series value recorded at exactly that time.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub time: f64,
    /// `dataset__column` → value. Only keys whose source dataset had a row
    /// at exactly this time are present.
    pub values: HashMap<String, f64>,
}

/// Rebuild the merged table from scratch for the given dataset set.
///
/// Rows are bucketed by exact time value (bit-pattern equality, no epsilon
/// tolerance): two datasets sampled at the same timestamp share one merged
/// row, otherwise each keeps its own. Each dataset's columns enter under
/// their namespaced key, so no key collisions are possible and the result
/// does not depend on dataset order. Output is sorted ascending by time.
pub fn merge_datasets(datasets: &[Dataset]) -> Vec<MergedRow> {
    let mut buckets: HashMap<u64, MergedRow> = HashMap::new();
    for ds in datasets {
        for row in &ds.rows {
            // -0.0 compares equal to 0.0 but has a different bit pattern;
            // both must land in the same bucket.
            let time = if row.time == 0.0 { 0.0 } else { row.time };
            let bucket = buckets.entry(time.to_bits()).or_insert_with(|| MergedRow {
                time,
                values: HashMap::new(),
            });
            for col in &ds.columns {
                if let Some(v) = row.values.get(col) {
                    bucket.values.insert(ds.key(col), *v);
                }
            }
        }
    }
    let mut merged: Vec<MergedRow> = buckets.into_values().collect();
    merged.sort_by(|a, b| {
        a.time
            .partial_cmp(&b.time)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    merged
}
