// File: crates/emuchart-core/src/chart.rs
// Summary: Render composer: assembles axes, gridlines, series paths, markers,
// crosshair, tooltips and legend into one SVG drawing.

use emuchart_svg::{polyline_d, SvgDoc};

use crate::aggregate;
use crate::geometry::{clamp, PlotGeometry};
use crate::hit;
use crate::metric::{AxisPolicy, Metric};
use crate::model::{trim_float, Dataset};
use crate::project::{ProjectedPoint, Projector};
use crate::scale::{build_axis_ticks, fixed_axis_ticks, AxisTicks};
use crate::series::{self, Series};
use crate::state::{ChartState, DimState, Hover};
use crate::theme::Theme;

const STROKE_NORMAL: f64 = 2.0;
const STROKE_ACTIVE: f64 = 3.5;
const MARKER_RADIUS: f64 = 3.0;
const MARKER_RADIUS_ACTIVE: f64 = 4.5;
const DIM_OPACITY: f64 = 0.35;
const DESIRED_TICKS: usize = 6;

// tooltip text is approximated with a fixed per-character advance
const CHAR_W: f64 = 7.2;
const ROW_H: f64 = 16.0;
const TIP_PAD: f64 = 8.0;
const TIP_OFFSET: f64 = 12.0;

/// One chart instance: a metric drawn for the child runs of one parent run,
/// plus the synthetic sum series where the metric calls for it.
pub struct Chart {
    pub title: String,
    pub metric: Metric,
    pub series: Vec<Series>,
    pub theme: Theme,
}

impl Chart {
    /// Build the chart for one parent run: normalized per-run series in
    /// child-run order, then the aggregate when the metric aggregates.
    pub fn build(dataset: &Dataset, parent_id: i64, metric: Metric, theme: Theme) -> Self {
        let mut series = series::build_series(dataset, parent_id, &metric, theme.palette);
        if metric.aggregates() {
            if let Some(sum) = aggregate::sum_series(&series, theme.aggregate) {
                series.push(sum);
            }
        }
        let title = format!("{} ({})", metric.title, metric.unit);
        Self { title, metric, series, theme }
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }

    /// Y axis per the metric's policy: fixed for throughput, nice-number
    /// otherwise.
    pub fn y_axis(&self) -> AxisTicks {
        match self.metric.axis {
            AxisPolicy::Fixed { max, step } => fixed_axis_ticks(max, step),
            AxisPolicy::Auto => match series::y_extent(&self.series) {
                Some((min, max)) => build_axis_ticks(min, max, DESIRED_TICKS),
                None => build_axis_ticks(0.0, 1.0, DESIRED_TICKS),
            },
        }
    }

    /// Projector for a geometry preset. The x domain is `[0, max observed x]`.
    pub fn projector(&self, geometry: PlotGeometry) -> Projector {
        let y = self.y_axis();
        Projector::new(geometry, (0.0, series::max_x(&self.series)), (y.min, y.max))
    }

    /// Project every series for hit-testing and drawing.
    pub fn project_all(&self, projector: &Projector) -> Vec<Vec<ProjectedPoint>> {
        self.series.iter().map(|s| projector.project_series(s)).collect()
    }

    /// Compose the full SVG document for the current interaction state.
    /// Never fails: empty charts render the placeholder instead of axes.
    pub fn render(&self, state: &ChartState) -> String {
        let geometry = state.geometry();
        let mut doc = SvgDoc::new(geometry.width, geometry.height);
        doc.rect(
            0.0,
            0.0,
            geometry.width,
            geometry.height,
            &format!(r#"fill="{}""#, self.theme.background),
        );
        doc.text(
            geometry.insets.left,
            16.0,
            &self.title,
            &format!(r#"fill="{}" font-size="14" class="chart-title""#, self.theme.axis_label),
        );

        if self.is_empty() {
            doc.text(
                geometry.width / 2.0,
                geometry.height / 2.0,
                "No points available",
                &format!(
                    r#"fill="{}" font-size="14" text-anchor="middle" class="empty-state""#,
                    self.theme.empty_text
                ),
            );
            return doc.finish();
        }

        let projector = self.projector(geometry);
        let projected = self.project_all(&projector);
        let y_axis = self.y_axis();

        self.draw_grid(&mut doc, &projector, &y_axis);
        self.draw_series(&mut doc, state, &projected);
        self.draw_crosshair(&mut doc, state, &projector, &projected);
        self.draw_legend(&mut doc, state, geometry);
        self.draw_tooltip(&mut doc, state, &projector, &projected);

        doc.finish()
    }

    fn draw_grid(&self, doc: &mut SvgDoc, projector: &Projector, y_axis: &AxisTicks) {
        let geometry = *projector.geometry();
        let rect = geometry.plot_rect();
        let grid = format!(r#"stroke="{}" stroke-width="1""#, self.theme.grid);
        let label = format!(r#"fill="{}" font-size="11""#, self.theme.axis_label);

        doc.open_group(r#"class="grid""#);
        for &t in &y_axis.ticks {
            let y = projector.y_px(t);
            doc.line(rect.left, y, rect.right, y, &grid);
            doc.text(
                rect.left - 6.0,
                y + 4.0,
                &trim_float(t),
                &format!(r#"{} text-anchor="end""#, label),
            );
        }
        let (x_min, x_max) = projector.x_range();
        let x_ticks = build_axis_ticks(x_min, x_max, DESIRED_TICKS);
        for &t in &x_ticks.ticks {
            if t < x_min || t > x_max {
                continue; // nice range may extend past the clamped domain
            }
            let x = projector.x_px(t);
            doc.line(x, rect.top, x, rect.bottom, &grid);
            doc.text(
                x,
                rect.bottom + 16.0,
                &trim_float(t),
                &format!(r#"{} text-anchor="middle""#, label),
            );
        }
        doc.close_group();

        let axis = format!(r#"stroke="{}" stroke-width="1.5""#, self.theme.axis_line);
        doc.line(rect.left, rect.bottom, rect.right, rect.bottom, &axis);
        doc.line(rect.left, rect.top, rect.left, rect.bottom, &axis);
        doc.text(
            rect.right,
            rect.bottom + 32.0,
            "seconds",
            &format!(r#"fill="{}" font-size="11" text-anchor="end""#, self.theme.axis_label),
        );
    }

    fn draw_series(&self, doc: &mut SvgDoc, state: &ChartState, projected: &[Vec<ProjectedPoint>]) {
        let focus = state.focus_point();
        for (si, points) in projected.iter().enumerate() {
            if points.is_empty() {
                continue;
            }
            let s = &self.series[si];
            let dim = state.dim_state(si);
            let (stroke_w, marker_r, opacity) = match dim {
                DimState::Active => (STROKE_ACTIVE, MARKER_RADIUS_ACTIVE, 1.0),
                DimState::Dimmed => (STROKE_NORMAL, MARKER_RADIUS, DIM_OPACITY),
                DimState::Normal | DimState::LegendActive => (STROKE_NORMAL, MARKER_RADIUS, 1.0),
            };
            let px: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
            let d = polyline_d(&px);

            doc.open_group(&format!(r#"class="series" data-series="{}" opacity="{}""#, si, opacity));
            if points.len() > 1 {
                doc.path(
                    &d,
                    &format!(
                        r#"fill="none" stroke="{}" stroke-width="{}""#,
                        s.color,
                        trim_float(stroke_w)
                    ),
                );
                // invisible wide stroke mirroring the hit engine's path test
                doc.path(
                    &d,
                    &format!(
                        r#"fill="none" stroke="{}" stroke-width="{}" stroke-opacity="0" pointer-events="stroke" class="hit""#,
                        s.color,
                        trim_float(hit::PATH_HIT_STROKE)
                    ),
                );
            }
            for (pi, p) in points.iter().enumerate() {
                let r = if focus == Some((si, pi)) { MARKER_RADIUS_ACTIVE + 1.5 } else { marker_r };
                doc.circle(p.x, p.y, r, &format!(r#"fill="{}""#, s.color));
            }
            doc.close_group();
        }
    }

    fn draw_crosshair(
        &self,
        doc: &mut SvgDoc,
        state: &ChartState,
        projector: &Projector,
        projected: &[Vec<ProjectedPoint>],
    ) {
        let rect = projector.geometry().plot_rect();
        let x = match crosshair_x(state, projected, projector) {
            Some(x) => x,
            None => return,
        };
        doc.line(
            x,
            rect.top,
            x,
            rect.bottom,
            &format!(
                r#"stroke="{}" stroke-width="1" stroke-dasharray="3 3" class="crosshair""#,
                self.theme.crosshair
            ),
        );
    }

    fn draw_legend(&self, doc: &mut SvgDoc, state: &ChartState, geometry: PlotGeometry) {
        let mut x = geometry.insets.left;
        let y = geometry.height - 10.0;
        doc.open_group(r#"class="legend""#);
        for (si, s) in self.series.iter().enumerate() {
            let opacity = match state.dim_state(si) {
                DimState::Dimmed => DIM_OPACITY,
                _ => 1.0,
            };
            doc.open_group(&format!(
                r#"class="legend-chip" data-series="{}" opacity="{}""#,
                si, opacity
            ));
            doc.rect(x, y - 9.0, 10.0, 10.0, &format!(r#"fill="{}" rx="2""#, s.color));
            doc.text(
                x + 14.0,
                y,
                &s.label,
                &format!(r#"fill="{}" font-size="11""#, self.theme.axis_label),
            );
            doc.close_group();
            x += 14.0 + s.label.chars().count() as f64 * CHAR_W + 16.0;
        }
        doc.close_group();
    }

    fn draw_tooltip(
        &self,
        doc: &mut SvgDoc,
        state: &ChartState,
        projector: &Projector,
        projected: &[Vec<ProjectedPoint>],
    ) {
        // pin takes precedence; slice rows only when nothing is pinned
        if let Some((si, pi)) = state.focus_point() {
            let Some(p) = projected.get(si).and_then(|pts| pts.get(pi)) else { return };
            let s = &self.series[si];
            let rows = vec![format!(
                "{}: {} {}",
                s.label,
                trim_float(p.y_value),
                self.metric.unit
            )];
            let header = format!("t = {} s", trim_float(p.x_value));
            self.tooltip_box(doc, projector, p.x, p.y, &header, &rows);
            return;
        }
        if let Hover::Slice { domain_x } = state.hover() {
            let slice = hit::slice_at(domain_x, &self.series);
            if slice.is_empty() {
                return;
            }
            let rows: Vec<String> = slice
                .iter()
                .map(|row| {
                    let s = &self.series[row.series_index];
                    let p = s.points[row.point_index];
                    format!("{}: {} {}", s.label, trim_float(p.y), self.metric.unit)
                })
                .collect();
            let header = format!("t = {} s", trim_float(domain_x));
            let x = projector.x_px(domain_x);
            let y = projector.geometry().plot_rect().top + 20.0;
            self.tooltip_box(doc, projector, x, y, &header, &rows);
        }
    }

    /// Draw a tooltip anchored at a pixel position: to the right of the
    /// anchor, flipped left when it would overflow the right plot edge, and
    /// clamped vertically into the plot.
    fn tooltip_box(
        &self,
        doc: &mut SvgDoc,
        projector: &Projector,
        anchor_x: f64,
        anchor_y: f64,
        header: &str,
        rows: &[String],
    ) {
        let rect = projector.geometry().plot_rect();
        let widest = rows
            .iter()
            .map(|r| r.chars().count())
            .chain(std::iter::once(header.chars().count()))
            .max()
            .unwrap_or(0) as f64;
        let w = widest * CHAR_W + TIP_PAD * 2.0;
        let h = (rows.len() as f64 + 1.0) * ROW_H + TIP_PAD * 2.0 - 4.0;

        let mut x = anchor_x + TIP_OFFSET;
        if x + w > rect.right {
            x = anchor_x - TIP_OFFSET - w;
        }
        let y = clamp(anchor_y - h / 2.0, rect.top, (rect.bottom - h).max(rect.top));

        doc.open_group(r#"class="tooltip""#);
        doc.rect(
            x,
            y,
            w,
            h,
            &format!(
                r#"fill="{}" stroke="{}" rx="4""#,
                self.theme.tooltip_fill, self.theme.tooltip_border
            ),
        );
        let text_attrs = format!(r#"fill="{}" font-size="11""#, self.theme.tooltip_text);
        let mut ty = y + TIP_PAD + 10.0;
        doc.text(x + TIP_PAD, ty, header, &text_attrs);
        for row in rows {
            ty += ROW_H;
            doc.text(x + TIP_PAD, ty, row, &text_attrs);
        }
        doc.close_group();
    }
}

/// The crosshair pixel x for the current state, if any: the focused point's
/// x under pin/single hover, the pointer's domain x in slice mode.
fn crosshair_x(
    state: &ChartState,
    projected: &[Vec<ProjectedPoint>],
    projector: &Projector,
) -> Option<f64> {
    if let Some((si, pi)) = state.focus_point() {
        return projected.get(si).and_then(|pts| pts.get(pi)).map(|p| p.x);
    }
    match state.hover() {
        Hover::Slice { domain_x } => Some(projector.x_px(domain_x)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric;
    use crate::series::{PointXy, SeriesKey};

    fn chart_with(points: Vec<PointXy>) -> Chart {
        Chart {
            title: "Throughput (Mbps)".into(),
            metric: metric::find("throughput").unwrap(),
            series: vec![Series {
                key: SeriesKey::Run(1),
                label: "client 1".into(),
                color: "#4ea1ff",
                points,
            }],
            theme: Theme::dark(),
        }
    }

    #[test]
    fn empty_chart_renders_placeholder_without_axes() {
        let chart = chart_with(vec![]);
        let svg = chart.render(&ChartState::new());
        assert!(svg.contains("No points available"));
        assert!(!svg.contains(r#"class="grid""#));
    }

    #[test]
    fn populated_chart_renders_grid_path_and_legend() {
        let chart = chart_with(vec![PointXy { x: 0.0, y: 10.0 }, PointXy { x: 1.0, y: 12.0 }]);
        let svg = chart.render(&ChartState::new());
        assert!(svg.contains(r#"class="grid""#));
        assert!(svg.contains(r#"class="series""#));
        assert!(svg.contains(r#"class="legend-chip""#));
        assert!(svg.contains("client 1"));
        // fixed throughput axis
        assert!(svg.contains(">120<") && svg.contains(">40<") && svg.contains(">80<"));
    }

    #[test]
    fn slice_hover_renders_crosshair_and_tooltip() {
        let chart = chart_with(vec![PointXy { x: 0.0, y: 10.0 }, PointXy { x: 2.0, y: 12.0 }]);
        let mut state = ChartState::new();
        let projector = chart.projector(state.geometry());
        let projected = chart.project_all(&projector);
        let rect = projector.geometry().plot_rect();
        // mid-plot, far from the path vertically
        state.pointer_move(rect.left + rect.width() / 2.0, rect.top + 5.0, &projected, &projector);
        assert!(matches!(state.hover(), Hover::Slice { .. }));
        let svg = chart.render(&state);
        assert!(svg.contains(r#"class="crosshair""#));
        assert!(svg.contains(r#"class="tooltip""#));
    }
}
