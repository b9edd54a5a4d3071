// File: crates/emuchart-core/src/series.rs
// Summary: Series normalization: raw stat points -> clean per-run (x, y)
// lists for one metric.

use crate::metric::Metric;
use crate::model::{Dataset, StatPoint};

/// A clean, finite data point in domain units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointXy {
    pub x: f64,
    pub y: f64,
}

/// Identity of a series: a real run, or the synthetic cross-run aggregate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKey {
    Run(i64),
    Aggregate,
}

/// One renderable series: identity, legend label, stroke color, points.
#[derive(Clone, Debug)]
pub struct Series {
    pub key: SeriesKey,
    pub label: String,
    pub color: &'static str,
    pub points: Vec<PointXy>,
}

/// Normalize one run's (already sorted) stat points for a metric accessor.
///
/// X falls back from elapsed seconds to snapshot index to array position;
/// a pair is dropped when either coordinate is non-finite.
pub fn normalize_run(points: &[StatPoint], accessor: fn(&StatPoint) -> Option<f64>) -> Vec<PointXy> {
    let mut out = Vec::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        let x = p
            .elapsed_seconds
            .or_else(|| p.snapshot_index.map(|v| v as f64))
            .unwrap_or(i as f64);
        let Some(y) = (accessor)(p) else { continue };
        if !x.is_finite() || !y.is_finite() {
            continue;
        }
        out.push(PointXy { x, y });
    }
    out
}

/// Build the real (per-run) series for one parent run and metric. Runs with
/// zero valid points are excluded entirely; palette colors are assigned by
/// child-run order, cycling.
pub fn build_series(
    dataset: &Dataset,
    parent_id: i64,
    metric: &Metric,
    palette: &'static [&'static str],
) -> Vec<Series> {
    let mut out = Vec::new();
    for run in dataset.runs_of(parent_id) {
        let points = normalize_run(dataset.points_of(run.id), metric.accessor);
        if points.is_empty() {
            continue;
        }
        let color = palette[out.len() % palette.len()];
        out.push(Series { key: SeriesKey::Run(run.id), label: run.label(), color, points });
    }
    out
}

/// Largest x across all series, floored at 0 (the x domain is `[0, this]`).
pub fn max_x(series: &[Series]) -> f64 {
    let mut max = 0.0f64;
    for s in series {
        for p in &s.points {
            if p.x > max {
                max = p.x;
            }
        }
    }
    max
}

/// Observed y extent across all series, if any point exists.
pub fn y_extent(series: &[Series]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for s in series {
        for p in &s.points {
            min = min.min(p.y);
            max = max.max(p.y);
            any = true;
        }
    }
    if any {
        Some((min, max))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(id: i64, idx: Option<i64>, el: Option<f64>, mbps: Option<f64>) -> StatPoint {
        StatPoint {
            id,
            run_id: 1,
            snapshot_index: idx,
            elapsed_seconds: el,
            megabits_per_second: mbps,
            round_trip_time_ms: None,
            bottleneck_queuing_delay_ms: None,
            in_flight_packets: None,
            congestion_window_bytes: None,
        }
    }

    #[test]
    fn x_falls_back_elapsed_then_index_then_position() {
        let pts = vec![
            pt(1, Some(5), Some(2.5), Some(1.0)),
            pt(2, Some(7), None, Some(2.0)),
            pt(3, None, None, Some(3.0)),
        ];
        let out = normalize_run(&pts, |p| p.megabits_per_second);
        assert_eq!(out[0].x, 2.5);
        assert_eq!(out[1].x, 7.0);
        assert_eq!(out[2].x, 2.0); // array position
    }

    #[test]
    fn non_finite_pairs_are_dropped() {
        let pts = vec![
            pt(1, None, Some(0.0), Some(f64::NAN)),
            pt(2, None, Some(f64::INFINITY), Some(1.0)),
            pt(3, None, Some(1.0), None),
            pt(4, None, Some(2.0), Some(4.0)),
        ];
        let out = normalize_run(&pts, |p| p.megabits_per_second);
        assert_eq!(out, vec![PointXy { x: 2.0, y: 4.0 }]);
    }
}
