// File: crates/demo/src/sample.rs
// Summary: Built-in sample experiment: one parent run, two clients (cubic and
// bbr) sharing a 40 Mbps bottleneck for 60 seconds.

use chrono::{TimeZone, Utc};
use emuchart_core::{Dataset, ParentRun, Run, StatPoint};

pub fn dataset() -> Dataset {
    let parent = ParentRun {
        id: 1,
        created_at: Utc.timestamp_opt(1_756_000_000, 0).single(),
    };

    let runs = vec![
        Run {
            id: 10,
            created_at: parent.created_at,
            parent_run_id: Some(1),
            client_number: Some(1),
            delay_added_ms: Some(50.0),
            congestion_control_algorithm_id: Some(1),
            congestion_control_algorithm_name: Some("cubic".to_string()),
        },
        Run {
            id: 11,
            created_at: parent.created_at,
            parent_run_id: Some(1),
            client_number: Some(2),
            delay_added_ms: Some(50.0),
            congestion_control_algorithm_id: Some(2),
            congestion_control_algorithm_name: Some("bbr".to_string()),
        },
    ];

    let mut points = Vec::new();
    let mut id = 100;
    for second in 0..60 {
        let t = second as f64;
        // cubic ramps with sawtooth backoff; bbr holds near its fair share
        let cubic = 8.0 + 14.0 * (1.0 - ((t % 20.0) / 20.0 - 1.0).powi(2));
        let bbr = 18.0 + 2.0 * (t / 9.0).sin();
        for (run_id, mbps, base_rtt) in [(10, cubic, 62.0), (11, bbr, 55.0)] {
            points.push(StatPoint {
                id,
                run_id,
                snapshot_index: Some(second),
                elapsed_seconds: Some(t),
                megabits_per_second: Some(mbps),
                round_trip_time_ms: Some(base_rtt + mbps * 0.8),
                bottleneck_queuing_delay_ms: Some((mbps - 12.0).max(0.0) * 0.6),
                in_flight_packets: Some((mbps * 4.0) as i64),
                congestion_window_bytes: Some(mbps * 1500.0),
            });
            id += 1;
        }
    }

    Dataset::new(vec![parent], runs, points)
}
