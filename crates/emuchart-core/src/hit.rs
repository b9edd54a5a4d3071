// File: crates/emuchart-core/src/hit.rs
// Summary: Pointer hit-testing against projected series, and the cross-series
// slice lookup (domain-nearest point per series at a shared x).

use crate::project::ProjectedPoint;
use crate::series::Series;

/// Radius around a rendered point marker that counts as a hit, in pixels.
pub const MARKER_HIT_RADIUS: f64 = 10.0;

/// Width of the invisible hit stroke along each series path, in pixels.
pub const PATH_HIT_STROKE: f64 = 20.0;

/// One row of the cross-series slice readout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceRow {
    pub series_index: usize,
    pub point_index: usize,
}

/// Index of the point nearest to `pointer_x` by pixel-x distance, for
/// single-series hover. `None` on an empty series.
pub fn nearest_index_by_px(points: &[ProjectedPoint], pointer_x: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = (p.x - pointer_x).abs();
        match best {
            Some((_, bd)) if bd <= d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Distance from a point to a line segment, all in pixels.
fn segment_distance(px: f64, py: f64, a: &ProjectedPoint, b: &ProjectedPoint) -> f64 {
    let (ax, ay) = (a.x, a.y);
    let (bx, by) = (b.x, b.y);
    let (dx, dy) = (bx - ax, by - ay);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((px - ax) * dx + (py - ay) * dy) / len2).clamp(0.0, 1.0)
    };
    let (cx, cy) = (ax + t * dx, ay + t * dy);
    ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt()
}

/// Test the pointer against every series: markers first (radius
/// `MARKER_HIT_RADIUS`), then the invisible wide path stroke. Returns the
/// hit series and its pixel-x-nearest point index.
pub fn hit_test(
    projected: &[Vec<ProjectedPoint>],
    pointer_x: f64,
    pointer_y: f64,
) -> Option<(usize, usize)> {
    // markers: nearest marker across all series wins
    let mut best_marker: Option<(usize, usize, f64)> = None;
    for (si, points) in projected.iter().enumerate() {
        for (pi, p) in points.iter().enumerate() {
            let d = ((p.x - pointer_x).powi(2) + (p.y - pointer_y).powi(2)).sqrt();
            if d <= MARKER_HIT_RADIUS {
                match best_marker {
                    Some((_, _, bd)) if bd <= d => {}
                    _ => best_marker = Some((si, pi, d)),
                }
            }
        }
    }
    if let Some((si, pi, _)) = best_marker {
        return Some((si, pi));
    }

    // path stroke: first series whose path passes within half the hit stroke
    let half = PATH_HIT_STROKE / 2.0;
    let mut best_path: Option<(usize, f64)> = None;
    for (si, points) in projected.iter().enumerate() {
        for pair in points.windows(2) {
            let d = segment_distance(pointer_x, pointer_y, &pair[0], &pair[1]);
            if d <= half {
                match best_path {
                    Some((_, bd)) if bd <= d => {}
                    _ => best_path = Some((si, d)),
                }
            }
        }
        // single-point series have no segments; fall back to the marker test
        if points.len() == 1 {
            let p = &points[0];
            let d = ((p.x - pointer_x).powi(2) + (p.y - pointer_y).powi(2)).sqrt();
            if d <= half {
                match best_path {
                    Some((_, bd)) if bd <= d => {}
                    _ => best_path = Some((si, d)),
                }
            }
        }
    }
    best_path.and_then(|(si, _)| {
        nearest_index_by_px(&projected[si], pointer_x).map(|pi| (si, pi))
    })
}

/// For every series independently, the point whose x value is nearest
/// `domain_x` in DOMAIN units (not pixels), so series with different
/// sampling grids still align. Ties keep the first-encountered point.
/// Series with no points produce no row; rows come out in series order.
pub fn slice_at(domain_x: f64, series: &[Series]) -> Vec<SliceRow> {
    let mut rows = Vec::with_capacity(series.len());
    for (si, s) in series.iter().enumerate() {
        let mut best: Option<(usize, f64)> = None;
        for (pi, p) in s.points.iter().enumerate() {
            let d = (p.x - domain_x).abs();
            match best {
                Some((_, bd)) if bd <= d => {}
                _ => best = Some((pi, d)),
            }
        }
        if let Some((pi, _)) = best {
            rows.push(SliceRow { series_index: si, point_index: pi });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{PointXy, SeriesKey};

    fn pp(x: f64, y: f64) -> ProjectedPoint {
        ProjectedPoint { x_value: x, y_value: y, x, y }
    }

    #[test]
    fn nearest_by_px_prefers_first_on_tie() {
        let pts = vec![pp(10.0, 0.0), pp(30.0, 0.0)];
        assert_eq!(nearest_index_by_px(&pts, 20.0), Some(0));
        assert_eq!(nearest_index_by_px(&[], 20.0), None);
    }

    #[test]
    fn marker_hit_beats_path_hit() {
        let a = vec![pp(0.0, 0.0), pp(100.0, 0.0)];
        let b = vec![pp(50.0, 5.0)];
        // pointer sits on series a's path but within b's marker radius
        let hit = hit_test(&[a, b], 50.0, 0.0);
        assert_eq!(hit, Some((1, 0)));
    }

    #[test]
    fn path_hit_within_half_stroke() {
        let a = vec![pp(0.0, 0.0), pp(100.0, 0.0)];
        assert_eq!(hit_test(&[a.clone()], 50.0, 9.0), Some((0, 0)));
        assert_eq!(hit_test(&[a], 50.0, 30.0), None);
    }

    #[test]
    fn slice_rows_follow_series_order() {
        let s1 = Series {
            key: SeriesKey::Run(1),
            label: "a".into(),
            color: "#000",
            points: vec![PointXy { x: 0.0, y: 1.0 }, PointXy { x: 2.0, y: 2.0 }],
        };
        let s2 = Series {
            key: SeriesKey::Run(2),
            label: "b".into(),
            color: "#000",
            points: vec![PointXy { x: 1.4, y: 3.0 }],
        };
        let rows = slice_at(1.9, &[s1, s2]);
        assert_eq!(
            rows,
            vec![
                SliceRow { series_index: 0, point_index: 1 },
                SliceRow { series_index: 1, point_index: 0 },
            ]
        );
    }
}
