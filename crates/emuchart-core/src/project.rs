// File: crates/emuchart-core/src/project.rs
// Summary: Domain (time, value) -> pixel mapping over a plot geometry.

use crate::geometry::{clamp, PlotGeometry};
use crate::series::{PointXy, Series};

/// A point carried in both domain and pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x_value: f64,
    pub y_value: f64,
    pub x: f64,
    pub y: f64,
}

/// Maps domain coordinates into the plot rect of a geometry. Out-of-domain
/// values clamp to the plot edge rather than being dropped; degenerate
/// ranges use a denominator of 1 so nothing divides by zero.
#[derive(Clone, Copy, Debug)]
pub struct Projector {
    geometry: PlotGeometry,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Projector {
    pub fn new(geometry: PlotGeometry, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            geometry,
            x_min: x_range.0,
            x_max: x_range.1,
            y_min: y_range.0,
            y_max: y_range.1,
        }
    }

    fn x_span(&self) -> f64 {
        let span = self.x_max - self.x_min;
        if span == 0.0 {
            1.0
        } else {
            span
        }
    }

    fn y_span(&self) -> f64 {
        let span = self.y_max - self.y_min;
        if span == 0.0 {
            1.0
        } else {
            span
        }
    }

    pub fn x_px(&self, x_value: f64) -> f64 {
        let v = clamp(x_value, self.x_min, self.x_max);
        self.geometry.insets.left + (v - self.x_min) / self.x_span() * self.geometry.plot_width()
    }

    pub fn y_px(&self, y_value: f64) -> f64 {
        let v = clamp(y_value, self.y_min, self.y_max);
        self.geometry.height
            - self.geometry.insets.bottom
            - (v - self.y_min) / self.y_span() * self.geometry.plot_height()
    }

    pub fn project(&self, p: PointXy) -> ProjectedPoint {
        ProjectedPoint { x_value: p.x, y_value: p.y, x: self.x_px(p.x), y: self.y_px(p.y) }
    }

    pub fn project_series(&self, series: &Series) -> Vec<ProjectedPoint> {
        series.points.iter().map(|&p| self.project(p)).collect()
    }

    /// Inverse X mapping: the domain value under a pixel, clamped to the
    /// x range. Used by the slice engine.
    pub fn x_at_px(&self, px: f64) -> f64 {
        let rect = self.geometry.plot_rect();
        let frac = if rect.width() == 0.0 {
            0.0
        } else {
            (clamp(px, rect.left, rect.right) - rect.left) / rect.width()
        };
        self.x_min + frac * (self.x_max - self.x_min)
    }

    pub fn geometry(&self) -> &PlotGeometry {
        &self.geometry
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    pub fn y_range(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }
}
