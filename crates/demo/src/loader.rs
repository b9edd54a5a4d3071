// File: crates/demo/src/loader.rs
// Summary: CSV ingest for parent runs, runs and stat points. This is the
// "collaborator" side of the engine contract: all numeric coercion happens
// here, so the engine only ever sees numbers or nulls.

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use emuchart_core::{ParentRun, Run, StatPoint};
use thiserror::Error;

/// Pagination caps the UI imposes on one page load.
pub const MAX_PARENT_RUNS: usize = 100;
pub const MAX_RUNS: usize = 400;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("{file}: missing required column '{column}'")]
    MissingColumn { file: String, column: &'static str },
}

/// Coerce a CSV cell to a finite float. Empty, non-parsable or non-finite
/// values become None.
fn coerce_f64(cell: Option<&str>) -> Option<f64> {
    let v: f64 = cell?.trim().parse().ok()?;
    v.is_finite().then_some(v)
}

/// Coerce a CSV cell to an integer, tolerating large-integer columns that
/// arrive in float notation ("42.0").
fn coerce_i64(cell: Option<&str>) -> Option<i64> {
    let s = cell?.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let f: f64 = s.parse().ok()?;
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

/// Parse a timestamp cell: RFC 3339 first, then epoch seconds/milliseconds.
fn coerce_timestamp(cell: Option<&str>) -> Option<DateTime<Utc>> {
    let s = cell?.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    let n: i64 = s.parse().ok()?;
    let secs = if n.abs() > 10_i64.pow(12) { n / 1000 } else { n };
    Utc.timestamp_opt(secs, 0).single()
}

/// Column lookup over lowercased headers, first match wins.
struct Columns {
    headers: Vec<String>,
}

impl Columns {
    fn from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> Result<Self, LoadError> {
        let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect();
        Ok(Self { headers })
    }

    fn find(&self, names: &[&str]) -> Option<usize> {
        self.headers.iter().position(|h| names.contains(&h.as_str()))
    }

    fn require(
        &self,
        file: &Path,
        column: &'static str,
        names: &[&str],
    ) -> Result<usize, LoadError> {
        self.find(names).ok_or_else(|| LoadError::MissingColumn {
            file: file.display().to_string(),
            column,
        })
    }
}

pub fn load_parent_runs(path: &Path) -> Result<Vec<ParentRun>, LoadError> {
    let mut rdr = csv::Reader::from_path(path)?;
    let cols = Columns::from_reader(&mut rdr)?;
    let i_id = cols.require(path, "id", &["id", "parent_run_id"])?;
    let i_created = cols.find(&["created_at", "createdat", "created"]);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let Some(id) = coerce_i64(rec.get(i_id)) else { continue };
        out.push(ParentRun {
            id,
            created_at: i_created.and_then(|i| coerce_timestamp(rec.get(i))),
        });
        if out.len() >= MAX_PARENT_RUNS {
            break;
        }
    }
    Ok(out)
}

pub fn load_runs(path: &Path) -> Result<Vec<Run>, LoadError> {
    let mut rdr = csv::Reader::from_path(path)?;
    let cols = Columns::from_reader(&mut rdr)?;
    let i_id = cols.require(path, "id", &["id", "run_id"])?;
    let i_created = cols.find(&["created_at", "createdat", "created"]);
    let i_parent = cols.find(&["parent_run_id", "parentrunid", "parent_id"]);
    let i_client = cols.find(&["client_number", "clientnumber", "client"]);
    let i_delay = cols.find(&["delay_added_ms", "delayaddedms", "delay_ms"]);
    let i_cca_id = cols.find(&["congestion_control_algorithm_id", "cca_id", "algorithm_id"]);
    let i_cca_name = cols.find(&["congestion_control_algorithm_name", "cca_name", "algorithm"]);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let Some(id) = coerce_i64(rec.get(i_id)) else { continue };
        out.push(Run {
            id,
            created_at: i_created.and_then(|i| coerce_timestamp(rec.get(i))),
            parent_run_id: i_parent.and_then(|i| coerce_i64(rec.get(i))),
            client_number: i_client.and_then(|i| coerce_i64(rec.get(i))),
            delay_added_ms: i_delay.and_then(|i| coerce_f64(rec.get(i))),
            congestion_control_algorithm_id: i_cca_id.and_then(|i| coerce_i64(rec.get(i))),
            congestion_control_algorithm_name: i_cca_name
                .and_then(|i| rec.get(i))
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from),
        });
        if out.len() >= MAX_RUNS {
            break;
        }
    }
    Ok(out)
}

pub fn load_stat_points(path: &Path) -> Result<Vec<StatPoint>, LoadError> {
    let mut rdr = csv::Reader::from_path(path)?;
    let cols = Columns::from_reader(&mut rdr)?;
    let i_id = cols.require(path, "id", &["id", "stat_id"])?;
    let i_run = cols.require(path, "run_id", &["run_id", "runid"])?;
    let i_snap = cols.find(&["snapshot_index", "snapshotindex", "snapshot"]);
    let i_elapsed = cols.find(&["elapsed_seconds", "elapsedseconds", "elapsed"]);
    let i_mbps = cols.find(&["megabits_per_second", "mbps", "throughput_mbps"]);
    let i_rtt = cols.find(&["round_trip_time_ms", "rtt_ms", "rtt"]);
    let i_queue = cols.find(&["bottleneck_queuing_delay_ms", "queuing_delay_ms", "queue_delay_ms"]);
    let i_inflight = cols.find(&["in_flight_packets", "inflight", "in_flight"]);
    let i_cwnd = cols.find(&["congestion_window_bytes", "cwnd_bytes", "cwnd"]);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let (Some(id), Some(run_id)) = (coerce_i64(rec.get(i_id)), coerce_i64(rec.get(i_run)))
        else {
            continue;
        };
        out.push(StatPoint {
            id,
            run_id,
            snapshot_index: i_snap.and_then(|i| coerce_i64(rec.get(i))),
            elapsed_seconds: i_elapsed.and_then(|i| coerce_f64(rec.get(i))),
            megabits_per_second: i_mbps.and_then(|i| coerce_f64(rec.get(i))),
            round_trip_time_ms: i_rtt.and_then(|i| coerce_f64(rec.get(i))),
            bottleneck_queuing_delay_ms: i_queue.and_then(|i| coerce_f64(rec.get(i))),
            in_flight_packets: i_inflight.and_then(|i| coerce_i64(rec.get(i))),
            congestion_window_bytes: i_cwnd.and_then(|i| coerce_f64(rec.get(i))),
        });
    }
    Ok(out)
}
