// File: crates/emuchart-core/src/metric.rs
// Summary: Static metric registry (throughput, RTT, queueing delay) with
// per-metric axis policy.

use crate::model::StatPoint;

/// How a metric's Y axis range is chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisPolicy {
    /// Nice-number axis derived from observed data.
    Auto,
    /// Fixed `[0, max]` axis stepped by `step`, independent of data.
    Fixed { max: f64, step: f64 },
}

/// One chartable metric: a stat-point field with display metadata.
#[derive(Clone, Copy)]
pub struct Metric {
    pub id: &'static str,
    pub title: &'static str,
    pub unit: &'static str,
    pub accessor: fn(&StatPoint) -> Option<f64>,
    pub axis: AxisPolicy,
}

impl Metric {
    /// Only throughput gets the synthetic cross-run sum series.
    pub fn aggregates(&self) -> bool {
        self.id == "throughput"
    }
}

impl std::fmt::Debug for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metric")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("unit", &self.unit)
            .field("axis", &self.axis)
            .finish()
    }
}

/// Fixed registry, in display order.
pub const METRICS: [Metric; 3] = [
    Metric {
        id: "throughput",
        title: "Throughput",
        unit: "Mbps",
        accessor: |p| p.megabits_per_second,
        axis: AxisPolicy::Fixed { max: 120.0, step: 40.0 },
    },
    Metric {
        id: "rtt",
        title: "Round-trip time",
        unit: "ms",
        accessor: |p| p.round_trip_time_ms,
        axis: AxisPolicy::Auto,
    },
    Metric {
        id: "queue-delay",
        title: "Bottleneck queueing delay",
        unit: "ms",
        accessor: |p| p.bottleneck_queuing_delay_ms,
        axis: AxisPolicy::Auto,
    },
];

/// Find a metric by id, if registered.
pub fn find(id: &str) -> Option<Metric> {
    METRICS.iter().find(|m| m.id == id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_three_entries_in_display_order() {
        let ids: Vec<&str> = METRICS.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["throughput", "rtt", "queue-delay"]);
    }

    #[test]
    fn only_throughput_aggregates_and_is_fixed() {
        assert!(find("throughput").unwrap().aggregates());
        assert!(!find("rtt").unwrap().aggregates());
        assert_eq!(
            find("throughput").unwrap().axis,
            AxisPolicy::Fixed { max: 120.0, step: 40.0 }
        );
        assert_eq!(find("queue-delay").unwrap().axis, AxisPolicy::Auto);
    }
}
