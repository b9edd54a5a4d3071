// File: crates/emuchart-core/benches/scale_bench.rs
// Summary: Criterion bench for nice-axis computation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use emuchart_core::build_axis_ticks;

fn bench_build_axis_ticks(c: &mut Criterion) {
    let ranges: Vec<(f64, f64)> = (0..256)
        .map(|i| {
            let f = i as f64;
            (f * 0.37 - 20.0, f * 1.91 + 0.001)
        })
        .collect();

    c.bench_function("build_axis_ticks_256_ranges", |b| {
        b.iter(|| {
            for &(min, max) in &ranges {
                black_box(build_axis_ticks(black_box(min), black_box(max), 6));
            }
        })
    });
}

criterion_group!(benches, bench_build_axis_ticks);
criterion_main!(benches);
