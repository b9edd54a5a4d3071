// File: crates/demo/src/main.rs
// Summary: Demo loads experiment CSVs (or a built-in sample), renders one SVG
// per metric and theme for the newest parent run, and walks a scripted
// hover/pin interaction.

mod loader;
mod sample;

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use emuchart_core::{hit, theme, Chart, ChartState, Dataset, Hover, PointerRouter, METRICS};

fn main() -> Result<()> {
    // Accept a data directory holding parent_runs.csv / runs.csv / stats.csv,
    // or fall back to the built-in sample experiment.
    let dataset = match std::env::args().nth(1) {
        Some(dir) => load_dataset(Path::new(&dir))?,
        None => {
            println!("No data directory given; using built-in sample experiment.");
            sample::dataset()
        }
    };

    let Some(parent) = dataset.parents().first() else {
        anyhow::bail!("no parent runs loaded");
    };
    println!(
        "Parent run {} ({} child runs)",
        parent.id,
        dataset.child_run_count(parent.id)
    );

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).context("creating output directory")?;

    for theme_name in ["dark", "light"] {
        let theme = theme::find(theme_name);
        for metric in METRICS {
            let chart = Chart::build(&dataset, parent.id, metric, theme);
            let svg = chart.render(&ChartState::new());
            let path = out_dir.join(format!("{}_{}.svg", metric.id, theme_name));
            std::fs::write(&path, svg)
                .with_context(|| format!("writing {}", path.display()))?;
            println!(
                "Wrote {} ({} series{})",
                path.display(),
                chart.series.len(),
                if chart.is_empty() { ", empty" } else { "" }
            );
        }
    }

    walkthrough(&dataset, parent.id);
    Ok(())
}

fn load_dataset(dir: &Path) -> Result<Dataset> {
    let parents = loader::load_parent_runs(&dir.join("parent_runs.csv"))
        .context("loading parent_runs.csv")?;
    let runs = loader::load_runs(&dir.join("runs.csv")).context("loading runs.csv")?;
    let points =
        loader::load_stat_points(&dir.join("stats.csv")).context("loading stats.csv")?;
    println!(
        "Loaded {} parent runs, {} runs, {} stat points",
        parents.len(),
        runs.len(),
        points.len()
    );
    Ok(Dataset::new(parents, runs, points))
}

/// Drive the throughput chart through a hover -> slice -> pin -> outside
/// click session and print what the tooltip would show at each step.
fn walkthrough(dataset: &Dataset, parent_id: i64) {
    let chart = Chart::build(dataset, parent_id, METRICS[0], theme::find("dark"));
    if chart.is_empty() {
        println!("Throughput chart is empty; skipping interaction walkthrough.");
        return;
    }

    let state = Rc::new(RefCell::new(ChartState::new()));
    let mut router = PointerRouter::new();
    let surface = state.borrow().geometry().surface_rect();
    let listener = router.register(surface, state.clone());

    let projector = chart.projector(state.borrow().geometry());
    let projected = chart.project_all(&projector);
    let rect = projector.geometry().plot_rect();

    // slice readout mid-plot
    let mid_x = rect.left + rect.width() / 2.0;
    state
        .borrow_mut()
        .pointer_move(mid_x, rect.top + 4.0, &projected, &projector);
    if let Hover::Slice { domain_x } = state.borrow().hover() {
        println!("Slice at t = {:.1}s:", domain_x);
        for row in hit::slice_at(domain_x, &chart.series) {
            let s = &chart.series[row.series_index];
            let p = s.points[row.point_index];
            println!("  {:<24} {:>8.2} {}", s.label, p.y, chart.metric.unit);
        }
    }

    // pin the first series at its first point, then click elsewhere
    let first = projected[0][0];
    state.borrow_mut().pointer_down(first.x, first.y, &projected);
    println!(
        "Pinned: {:?}",
        state.borrow().pin().map(|p| chart.series[p.series].label.clone())
    );
    router.pointer_down(surface.right + 50.0, surface.bottom + 50.0);
    println!("After outside pointer-down, pin = {:?}", state.borrow().pin());

    router.unregister(listener);
}
