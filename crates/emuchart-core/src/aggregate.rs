// File: crates/emuchart-core/src/aggregate.rs
// Summary: Synthetic "sum across runs" series for the throughput metric.

use std::collections::BTreeMap;

use crate::series::{PointXy, Series, SeriesKey};

/// Legend label of the synthetic series.
pub const AGGREGATE_LABEL: &str = "sum Mbps";

/// Sum every series' y at each x bucket, with x rounded to 3 decimal places
/// so near-simultaneous samples across runs land in the same bucket.
/// Returns `None` when no input point exists.
pub fn sum_series(series: &[Series], color: &'static str) -> Option<Series> {
    // milli-unit integer keys keep the map ordered without float keys
    let mut buckets: BTreeMap<i64, f64> = BTreeMap::new();
    for s in series {
        for p in &s.points {
            let key = (p.x * 1000.0).round() as i64;
            *buckets.entry(key).or_insert(0.0) += p.y;
        }
    }
    if buckets.is_empty() {
        return None;
    }
    let points = buckets
        .into_iter()
        .map(|(k, y)| PointXy { x: k as f64 / 1000.0, y })
        .collect();
    Some(Series {
        key: SeriesKey::Aggregate,
        label: AGGREGATE_LABEL.to_string(),
        color,
        points,
    })
}
