// File: crates/emuchart-core/src/model.rs
// Summary: Experiment data model (parent runs, runs, per-second stat points)
// plus the ordering and grouping rules the charts rely on.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Root grouping entity: one emulation experiment spawning child runs.
#[derive(Clone, Debug, PartialEq)]
pub struct ParentRun {
    pub id: i64,
    pub created_at: Option<DateTime<Utc>>,
}

/// One client/congestion-control configuration inside a parent run.
#[derive(Clone, Debug, PartialEq)]
pub struct Run {
    pub id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub parent_run_id: Option<i64>,
    pub client_number: Option<i64>,
    pub delay_added_ms: Option<f64>,
    pub congestion_control_algorithm_id: Option<i64>,
    pub congestion_control_algorithm_name: Option<String>,
}

impl Run {
    /// Legend label, built from whatever identifying fields are present.
    /// Falls back to the run id when nothing else is known.
    pub fn label(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(n) = self.client_number {
            parts.push(format!("client {}", n));
        }
        if let Some(name) = &self.congestion_control_algorithm_name {
            if !name.is_empty() {
                parts.push(name.clone());
            }
        }
        if let Some(d) = self.delay_added_ms {
            if d.is_finite() && d > 0.0 {
                parts.push(format!("+{}ms", trim_float(d)));
            }
        }
        if parts.is_empty() {
            format!("run {}", self.id)
        } else {
            parts.join(" · ")
        }
    }
}

/// One per-second network performance sample.
#[derive(Clone, Debug, PartialEq)]
pub struct StatPoint {
    pub id: i64,
    pub run_id: i64,
    pub snapshot_index: Option<i64>,
    pub elapsed_seconds: Option<f64>,
    pub megabits_per_second: Option<f64>,
    pub round_trip_time_ms: Option<f64>,
    pub bottleneck_queuing_delay_ms: Option<f64>,
    pub in_flight_packets: Option<i64>,
    pub congestion_window_bytes: Option<f64>,
}

/// Sort parent runs newest first: created-at descending with nulls last,
/// then id descending as the final tie-break.
pub fn sort_parent_runs(parents: &mut [ParentRun]) {
    parents.sort_by(|a, b| {
        match (&a.created_at, &b.created_at) {
            (Some(ta), Some(tb)) => tb.cmp(ta).then(b.id.cmp(&a.id)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => b.id.cmp(&a.id),
        }
    });
}

/// Sort stat points by snapshot index ascending, tie-broken by elapsed
/// seconds ascending. Null index/elapsed sorts last (treated as +infinity).
pub fn sort_stat_points(points: &mut [StatPoint]) {
    points.sort_by(|a, b| {
        cmp_opt_i64(a.snapshot_index, b.snapshot_index)
            .then_with(|| cmp_opt_f64(a.elapsed_seconds, b.elapsed_seconds))
    });
}

fn cmp_opt_i64(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn cmp_opt_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The three input collections grouped for chart consumption.
///
/// Runs without a parent reference are excluded from grouping; stat points
/// whose run is not in the loaded set are dropped. Points are stored sorted.
pub struct Dataset {
    parents: Vec<ParentRun>,
    runs_by_parent: HashMap<i64, Vec<Run>>,
    points_by_run: HashMap<i64, Vec<StatPoint>>,
}

impl Dataset {
    pub fn new(mut parents: Vec<ParentRun>, runs: Vec<Run>, points: Vec<StatPoint>) -> Self {
        sort_parent_runs(&mut parents);

        let mut runs_by_parent: HashMap<i64, Vec<Run>> = HashMap::new();
        let mut run_ids: std::collections::HashSet<i64> = std::collections::HashSet::new();
        for run in runs {
            let Some(parent_id) = run.parent_run_id else {
                continue; // orphaned
            };
            run_ids.insert(run.id);
            runs_by_parent.entry(parent_id).or_default().push(run);
        }
        for siblings in runs_by_parent.values_mut() {
            siblings.sort_by_key(|r| r.id);
        }

        let mut points_by_run: HashMap<i64, Vec<StatPoint>> = HashMap::new();
        for p in points {
            if run_ids.contains(&p.run_id) {
                points_by_run.entry(p.run_id).or_default().push(p);
            }
        }
        for pts in points_by_run.values_mut() {
            sort_stat_points(pts);
        }

        Self { parents, runs_by_parent, points_by_run }
    }

    /// Parent runs, newest first.
    pub fn parents(&self) -> &[ParentRun] {
        &self.parents
    }

    /// Child runs of one parent, in id order. Empty when unknown.
    pub fn runs_of(&self, parent_id: i64) -> &[Run] {
        self.runs_by_parent.get(&parent_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sorted stat points of one run. Empty when unknown.
    pub fn points_of(&self, run_id: i64) -> &[StatPoint] {
        self.points_by_run.get(&run_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn child_run_count(&self, parent_id: i64) -> usize {
        self.runs_of(parent_id).len()
    }
}

/// Format a float without trailing zeros (for labels like "+50ms").
pub(crate) fn trim_float(v: f64) -> String {
    let mut s = format!("{:.6}", v);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
