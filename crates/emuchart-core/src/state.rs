// File: crates/emuchart-core/src/state.rs
// Summary: Per-chart interaction state machine: hover (single series or
// cross-series slice), pinning, legend emphasis, expanded toggle.

use crate::geometry::PlotGeometry;
use crate::hit;
use crate::project::{ProjectedPoint, Projector};

/// Current hover mode. Single-series hover (pointer on a path or marker)
/// and the cross-series slice readout are mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Hover {
    #[default]
    None,
    Single { series: usize, point: usize },
    Slice { domain_x: f64 },
}

/// A pinned point: locked until an outside pointer-down clears it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinnedPoint {
    pub series: usize,
    pub point: usize,
}

/// How one series should be drawn given the current interaction state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DimState {
    Normal,
    /// Opacity-reduced because some other series is emphasized.
    Dimmed,
    /// Path/marker hover or pin: widened stroke and larger markers.
    Active,
    /// Matching series under legend-chip hover: full opacity, normal stroke.
    LegendActive,
}

/// Interaction state for one chart instance. All event methods are
/// synchronous and idempotent; the most recent pointer event wins.
#[derive(Clone, Debug, Default)]
pub struct ChartState {
    hover: Hover,
    pin: Option<PinnedPoint>,
    legend_hover: Option<usize>,
    expanded: bool,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(&self) -> Hover {
        self.hover
    }

    pub fn pin(&self) -> Option<PinnedPoint> {
        self.pin
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// The geometry preset this chart currently renders with.
    pub fn geometry(&self) -> PlotGeometry {
        if self.expanded {
            PlotGeometry::expanded()
        } else {
            PlotGeometry::default_view()
        }
    }

    /// Pointer moved over the drawing surface.
    ///
    /// While pinned, only moves over the pinned series' own path update the
    /// pinned point; everything else is ignored. Otherwise a path/marker hit
    /// narrows to single-series hover and any other in-plot position drives
    /// the slice readout.
    pub fn pointer_move(
        &mut self,
        px: f64,
        py: f64,
        projected: &[Vec<ProjectedPoint>],
        projector: &Projector,
    ) {
        if let Some(pin) = self.pin {
            if let Some((series, point)) = hit::hit_test(projected, px, py) {
                if series == pin.series {
                    self.pin = Some(PinnedPoint { series, point });
                }
            }
            return;
        }
        if let Some((series, point)) = hit::hit_test(projected, px, py) {
            self.hover = Hover::Single { series, point };
        } else if projector.geometry().plot_rect().contains(px, py) {
            self.hover = Hover::Slice { domain_x: projector.x_at_px(px) };
        } else {
            self.hover = Hover::None;
        }
    }

    /// Pointer left the drawing surface: hover clears, pin survives.
    pub fn pointer_leave(&mut self) {
        self.hover = Hover::None;
    }

    /// Pointer-down on the drawing surface. A hit on a series path or
    /// marker pins it; clicking while already pinned is a no-op.
    pub fn pointer_down(&mut self, px: f64, py: f64, projected: &[Vec<ProjectedPoint>]) {
        if self.pin.is_some() {
            return;
        }
        if let Some((series, point)) = hit::hit_test(projected, px, py) {
            self.pin = Some(PinnedPoint { series, point });
            self.hover = Hover::None;
        }
    }

    /// Legend-chip hover: emphasize one series without touching stroke width.
    pub fn legend_hover(&mut self, series: usize) {
        self.legend_hover = Some(series);
    }

    pub fn legend_leave(&mut self) {
        self.legend_hover = None;
    }

    /// Legend-chip click pins the series at its most recent point.
    pub fn legend_click(&mut self, series: usize, projected: &[Vec<ProjectedPoint>]) {
        if self.pin.is_some() {
            return;
        }
        let Some(points) = projected.get(series) else { return };
        if points.is_empty() {
            return;
        }
        self.pin = Some(PinnedPoint { series, point: points.len() - 1 });
        self.hover = Hover::None;
    }

    /// An interaction outside this chart's surface: clear pin and hover.
    pub fn clear_all(&mut self) {
        self.pin = None;
        self.hover = Hover::None;
        self.legend_hover = None;
    }

    /// Toggle the expanded (modal) view. Expanding or collapsing resets all
    /// interaction state.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
        self.clear_all();
    }

    /// The series supplying the "active" emphasis, pin taking precedence
    /// over hover. Slice hover emphasizes no single series.
    pub fn active_series(&self) -> Option<usize> {
        if let Some(pin) = self.pin {
            return Some(pin.series);
        }
        match self.hover {
            Hover::Single { series, .. } => Some(series),
            _ => None,
        }
    }

    /// The highlighted point (pin first, then single-series hover).
    pub fn focus_point(&self) -> Option<(usize, usize)> {
        if let Some(pin) = self.pin {
            return Some((pin.series, pin.point));
        }
        match self.hover {
            Hover::Single { series, point } => Some((series, point)),
            _ => None,
        }
    }

    /// Drawing emphasis for one series index.
    pub fn dim_state(&self, series: usize) -> DimState {
        if let Some(active) = self.active_series() {
            return if series == active { DimState::Active } else { DimState::Dimmed };
        }
        if let Some(hovered) = self.legend_hover {
            return if series == hovered { DimState::LegendActive } else { DimState::Dimmed };
        }
        DimState::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PlotGeometry;
    use crate::project::Projector;

    fn pp(x: f64, y: f64) -> ProjectedPoint {
        ProjectedPoint { x_value: x, y_value: y, x, y }
    }

    fn projector() -> Projector {
        Projector::new(PlotGeometry::default_view(), (0.0, 10.0), (0.0, 100.0))
    }

    #[test]
    fn move_inside_plot_enters_slice_mode() {
        let mut st = ChartState::new();
        let proj = projector();
        let rect = proj.geometry().plot_rect();
        st.pointer_move(rect.left + 10.0, rect.top + 10.0, &[], &proj);
        assert!(matches!(st.hover(), Hover::Slice { .. }));
        st.pointer_leave();
        assert_eq!(st.hover(), Hover::None);
    }

    #[test]
    fn hit_narrows_to_single_series_hover() {
        let mut st = ChartState::new();
        let proj = projector();
        let rect = proj.geometry().plot_rect();
        let series = vec![vec![pp(rect.left + 5.0, rect.top + 5.0)]];
        st.pointer_move(rect.left + 5.0, rect.top + 5.0, &series, &proj);
        assert_eq!(st.hover(), Hover::Single { series: 0, point: 0 });
        assert_eq!(st.dim_state(0), DimState::Active);
    }

    #[test]
    fn pin_is_sticky_and_click_while_pinned_is_noop() {
        let mut st = ChartState::new();
        let a = vec![pp(100.0, 100.0)];
        let b = vec![pp(300.0, 300.0)];
        let projected = vec![a, b];
        st.pointer_down(100.0, 100.0, &projected);
        assert_eq!(st.pin(), Some(PinnedPoint { series: 0, point: 0 }));
        // clicking series 1 while pinned changes nothing
        st.pointer_down(300.0, 300.0, &projected);
        assert_eq!(st.pin(), Some(PinnedPoint { series: 0, point: 0 }));
        // hover clears on leave, pin does not
        st.pointer_leave();
        assert_eq!(st.pin(), Some(PinnedPoint { series: 0, point: 0 }));
        st.clear_all();
        assert_eq!(st.pin(), None);
        assert_eq!(st.hover(), Hover::None);
    }

    #[test]
    fn moves_over_other_series_are_ignored_while_pinned() {
        let mut st = ChartState::new();
        let proj = projector();
        let a = vec![pp(100.0, 100.0), pp(200.0, 100.0)];
        let b = vec![pp(100.0, 300.0)];
        let projected = vec![a, b];
        st.pointer_down(100.0, 100.0, &projected);
        st.pointer_move(100.0, 300.0, &projected, &proj);
        assert_eq!(st.pin(), Some(PinnedPoint { series: 0, point: 0 }));
        // moving along the pinned series updates the pinned point
        st.pointer_move(200.0, 100.0, &projected, &proj);
        assert_eq!(st.pin(), Some(PinnedPoint { series: 0, point: 1 }));
    }

    #[test]
    fn legend_hover_dims_without_active() {
        let mut st = ChartState::new();
        st.legend_hover(1);
        assert_eq!(st.dim_state(0), DimState::Dimmed);
        assert_eq!(st.dim_state(1), DimState::LegendActive);
        st.legend_leave();
        assert_eq!(st.dim_state(0), DimState::Normal);
    }

    #[test]
    fn expand_resets_interaction_and_swaps_geometry() {
        let mut st = ChartState::new();
        let projected = vec![vec![pp(100.0, 100.0)]];
        st.pointer_down(100.0, 100.0, &projected);
        st.set_expanded(true);
        assert_eq!(st.pin(), None);
        assert_eq!(st.geometry(), PlotGeometry::expanded());
        st.set_expanded(false);
        assert_eq!(st.geometry(), PlotGeometry::default_view());
    }
}
