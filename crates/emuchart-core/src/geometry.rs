// File: crates/emuchart-core/src/geometry.rs
// Summary: Plot-area geometry: insets, presets, and pixel rects.

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(56.0, 24.0, 20.0, 40.0)
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Overall drawing-surface geometry. Two presets exist, differing only in
/// absolute pixel dimensions: the inline view and the expanded (modal) view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotGeometry {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
}

impl PlotGeometry {
    pub fn default_view() -> Self {
        Self { width: 960.0, height: 540.0, insets: Insets::default() }
    }

    pub fn expanded() -> Self {
        Self { width: 1440.0, height: 810.0, insets: Insets::default() }
    }

    /// The inner plot rect the series are drawn into.
    pub fn plot_rect(&self) -> Rect {
        Rect::from_ltrb(
            self.insets.left,
            self.insets.top,
            self.width - self.insets.right,
            self.height - self.insets.bottom,
        )
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.insets.left - self.insets.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.insets.top - self.insets.bottom).max(0.0)
    }

    /// The full drawing surface as a rect (for outside-click testing).
    pub fn surface_rect(&self) -> Rect {
        Rect::from_ltrb(0.0, 0.0, self.width, self.height)
    }
}

#[inline]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_share_insets_and_differ_in_size() {
        let d = PlotGeometry::default_view();
        let e = PlotGeometry::expanded();
        assert_eq!(d.insets, e.insets);
        assert!(e.width > d.width && e.height > d.height);
    }

    #[test]
    fn plot_rect_is_inset() {
        let g = PlotGeometry::default_view();
        let r = g.plot_rect();
        assert_eq!(r.left, g.insets.left);
        assert_eq!(r.right, g.width - g.insets.right);
        assert!(r.contains(r.left, r.top));
        assert!(!r.contains(r.left - 1.0, r.top));
    }
}
