//! (day, hour) bucket aggregation for the insight generator

use std::collections::BTreeMap;

use crate::models::{AggregatedBucket, FeatureRow};

/// Sum characters added per (day, hour) bucket.
///
/// Output is ordered by day ascending then hour ascending regardless of
/// input order; summation makes the result permutation-invariant.
pub fn aggregate(rows: &[FeatureRow]) -> Vec<AggregatedBucket> {
    let mut buckets: BTreeMap<(u32, u32), i64> = BTreeMap::new();
    for row in rows {
        *buckets.entry((row.day, row.hour)).or_insert(0) += row.chars_added;
    }
    buckets
        .into_iter()
        .map(|((day, hour), chars_added)| AggregatedBucket {
            day,
            hour,
            chars_added,
        })
        .collect()
}
