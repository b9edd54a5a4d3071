// File: crates/emuchart-core/src/lib.rs
// Summary: Core library entry point; exports the chart engine API.

pub mod aggregate;
pub mod chart;
pub mod geometry;
pub mod hit;
pub mod metric;
pub mod model;
pub mod project;
pub mod router;
pub mod scale;
pub mod series;
pub mod state;
pub mod theme;

pub use chart::Chart;
pub use geometry::{Insets, PlotGeometry, Rect};
pub use hit::{SliceRow, MARKER_HIT_RADIUS, PATH_HIT_STROKE};
pub use metric::{AxisPolicy, Metric, METRICS};
pub use model::{Dataset, ParentRun, Run, StatPoint};
pub use project::Projector;
pub use router::{ListenerId, PointerRouter};
pub use scale::{build_axis_ticks, fixed_axis_ticks, AxisTicks};
pub use series::{PointXy, Series, SeriesKey};
pub use state::{ChartState, DimState, Hover};
pub use theme::Theme;
