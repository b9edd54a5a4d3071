// File: crates/emuchart-core/tests/end_to_end.rs
// Purpose: Full pipeline over a two-client experiment: series building,
// aggregate synthesis, SVG composition, and pin clearing through the router.

use std::cell::RefCell;
use std::rc::Rc;

use emuchart_core::{
    metric, theme, Chart, ChartState, Dataset, ParentRun, PointerRouter, Run, SeriesKey, StatPoint,
};

fn stat(id: i64, run_id: i64, second: i64, mbps: f64) -> StatPoint {
    StatPoint {
        id,
        run_id,
        snapshot_index: Some(second),
        elapsed_seconds: Some(second as f64),
        megabits_per_second: Some(mbps),
        round_trip_time_ms: Some(50.0 + mbps),
        bottleneck_queuing_delay_ms: Some(2.0),
        in_flight_packets: Some(100),
        congestion_window_bytes: Some(mbps * 1500.0),
    }
}

fn run(id: i64, client: i64, algo: &str) -> Run {
    Run {
        id,
        created_at: None,
        parent_run_id: Some(1),
        client_number: Some(client),
        delay_added_ms: Some(50.0),
        congestion_control_algorithm_id: Some(id),
        congestion_control_algorithm_name: Some(algo.to_string()),
    }
}

fn two_client_dataset() -> Dataset {
    Dataset::new(
        vec![ParentRun { id: 1, created_at: None }],
        vec![run(10, 1, "cubic"), run(11, 2, "bbr")],
        vec![
            stat(1, 10, 0, 10.0),
            stat(2, 10, 1, 12.0),
            stat(3, 11, 0, 8.0),
            stat(4, 11, 1, 9.0),
        ],
    )
}

#[test]
fn throughput_chart_has_two_runs_plus_sum_series() {
    let ds = two_client_dataset();
    assert_eq!(ds.child_run_count(1), 2);

    let chart = Chart::build(&ds, 1, metric::find("throughput").unwrap(), theme::find("dark"));
    assert_eq!(chart.series.len(), 3);
    assert_eq!(chart.series[0].key, SeriesKey::Run(10));
    assert_eq!(chart.series[1].key, SeriesKey::Run(11));
    assert_eq!(chart.series[2].key, SeriesKey::Aggregate);
    assert_eq!(chart.series[2].label, "sum Mbps");

    let sum = &chart.series[2].points;
    assert_eq!(sum.len(), 2);
    assert_eq!((sum[0].x, sum[0].y), (0.0, 18.0));
    assert_eq!((sum[1].x, sum[1].y), (1.0, 21.0));
}

#[test]
fn rendered_svg_shows_exactly_three_legend_chips() {
    let ds = two_client_dataset();
    let chart = Chart::build(&ds, 1, metric::find("throughput").unwrap(), theme::find("dark"));
    let svg = chart.render(&ChartState::new());
    assert_eq!(svg.matches(r#"class="legend-chip""#).count(), 3);
    assert!(svg.contains("client 1 · cubic · +50ms"));
    assert!(svg.contains("client 2 · bbr · +50ms"));
    assert!(svg.contains("sum Mbps"));
}

#[test]
fn non_aggregating_metric_gets_no_sum_series() {
    let ds = two_client_dataset();
    let chart = Chart::build(&ds, 1, metric::find("rtt").unwrap(), theme::find("dark"));
    assert_eq!(chart.series.len(), 2);
    assert!(chart.series.iter().all(|s| s.key != SeriesKey::Aggregate));
}

#[test]
fn pin_then_outside_pointer_down_resets_interaction() {
    let ds = two_client_dataset();
    let chart = Chart::build(&ds, 1, metric::find("throughput").unwrap(), theme::find("dark"));

    let state = Rc::new(RefCell::new(ChartState::new()));
    let mut router = PointerRouter::new();
    let surface = state.borrow().geometry().surface_rect();
    router.register(surface, state.clone());

    let projector = chart.projector(state.borrow().geometry());
    let projected = chart.project_all(&projector);

    // pin the first run's first point
    let p = projected[0][0];
    state.borrow_mut().pointer_down(p.x, p.y, &projected);
    assert_eq!(state.borrow().pin().map(|p| p.series), Some(0));

    // a pointer-down outside the chart's surface clears pin and hover
    router.pointer_down(surface.right + 10.0, surface.top);
    assert_eq!(state.borrow().pin(), None);
    assert_eq!(state.borrow().active_series(), None);
}

#[test]
fn selecting_a_chart_with_no_valid_points_renders_empty_state() {
    let ds = Dataset::new(
        vec![ParentRun { id: 1, created_at: None }],
        vec![run(10, 1, "cubic")],
        vec![StatPoint {
            megabits_per_second: None,
            ..stat(1, 10, 0, 0.0)
        }],
    );
    let chart = Chart::build(&ds, 1, metric::find("throughput").unwrap(), theme::find("dark"));
    assert!(chart.is_empty());
    let svg = chart.render(&ChartState::new());
    assert!(svg.contains("No points available"));
}
