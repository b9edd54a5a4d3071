// File: crates/emuchart-core/benches/slice_bench.rs
// Summary: Criterion bench for the cross-series slice lookup at pointer rate.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use emuchart_core::hit::slice_at;
use emuchart_core::{PointXy, Series, SeriesKey};

fn make_series(count: usize, points: usize) -> Vec<Series> {
    (0..count)
        .map(|si| Series {
            key: SeriesKey::Run(si as i64),
            label: format!("run {}", si),
            color: "#4ea1ff",
            points: (0..points)
                .map(|pi| PointXy {
                    x: pi as f64 + si as f64 * 0.001,
                    y: (pi as f64 * 0.1).sin() * 20.0 + 30.0,
                })
                .collect(),
        })
        .collect()
}

fn bench_slice_at(c: &mut Criterion) {
    // pagination cap worth of series, a minute of per-second samples each
    let series = make_series(8, 600);
    c.bench_function("slice_at_8x600", |b| {
        b.iter(|| {
            for i in 0..60 {
                black_box(slice_at(black_box(i as f64 * 9.7), &series));
            }
        })
    });
}

criterion_group!(benches, bench_slice_at);
criterion_main!(benches);
