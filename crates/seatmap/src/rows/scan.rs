//! Horizontal scan lines (default strategy).
//!
//! Model
//! - Usable height = height minus `row_margin` on top and bottom; rows sit at
//!   `min_y + margin + spacing * (j + 1)` with `spacing = usable / (rows + 1)`.
//! - A row's extent runs from the leftmost to the rightmost crossing of its
//!   scan line with the outline. With fewer than 2 crossings the row falls
//!   back to the bounding box inset by `fallback_inset` (flagged on the row).
//!
//! Works on raw vertex slices so `aligned` can call it in a rotated frame.

use nalgebra::Vector2;

use super::RowExtent;
use crate::geom2::{edge_list, polygon_bounds, Bounds2};
use crate::layout::LayoutCfg;

/// X coordinates where the line `y = const` meets the outline, sorted ascending.
///
/// Horizontal edges are skipped; an edge counts when `y` lies within its
/// closed y-span, so a vertex on the line contributes once per incident edge.
pub fn crossings(verts: &[Vector2<f64>], y: f64, eps: f64) -> Vec<f64> {
    let mut xs: Vec<f64> = edge_list(verts)
        .into_iter()
        .filter(|(a, b)| (b.y - a.y).abs() > eps)
        .filter(|(a, b)| a.y.min(b.y) <= y && y <= a.y.max(b.y))
        .map(|(a, b)| {
            let t = (y - a.y) / (b.y - a.y);
            a.x + t * (b.x - a.x)
        })
        .collect();
    xs.sort_by(|a, b| a.total_cmp(b));
    xs
}

/// Extent of the row on scan line `y`.
pub fn row_at(verts: &[Vector2<f64>], bounds: &Bounds2, y: f64, cfg: &LayoutCfg) -> RowExtent {
    let xs = crossings(verts, y, cfg.eps);
    match (xs.first(), xs.last()) {
        (Some(&lo), Some(&hi)) if xs.len() >= 2 => {
            RowExtent::new(Vector2::new(lo, y), Vector2::new(hi, y))
        }
        _ => {
            let (lo, hi) = bounds.inset_x(cfg.fallback_inset);
            RowExtent {
                start: Vector2::new(lo, y),
                end: Vector2::new(hi, y),
                fallback: Some(xs.len()),
            }
        }
    }
}

/// Scan-line y coordinates for `rows` rows, top to bottom, plus their spacing.
pub fn row_lines(bounds: &Bounds2, rows: usize, row_margin: f64) -> (Vec<f64>, f64) {
    let margin = bounds.height() * row_margin;
    let usable = bounds.height() - 2.0 * margin;
    let spacing = usable / (rows as f64 + 1.0);
    let ys = (0..rows)
        .map(|j| bounds.min_y + margin + spacing * (j as f64 + 1.0))
        .collect();
    (ys, spacing)
}

/// Locate all rows (before the end margin).
pub fn locate(verts: &[Vector2<f64>], rows: usize, cfg: &LayoutCfg) -> (Vec<RowExtent>, f64) {
    let bounds = polygon_bounds(verts);
    let (ys, spacing) = row_lines(&bounds, rows, cfg.row_margin);
    let extents = ys
        .into_iter()
        .map(|y| row_at(verts, &bounds, y, cfg))
        .collect();
    (extents, spacing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn trapezoid() -> Vec<Vector2<f64>> {
        // Wide at the bottom, slanted sides.
        vec![
            vector![20.0, 0.0],
            vector![80.0, 0.0],
            vector![100.0, 100.0],
            vector![0.0, 100.0],
        ]
    }

    #[test]
    fn crossings_follow_slanted_sides() {
        let xs = crossings(&trapezoid(), 50.0, 1e-9);
        assert_eq!(xs.len(), 2);
        assert!((xs[0] - 10.0).abs() < 1e-12);
        assert!((xs[1] - 90.0).abs() < 1e-12);
    }

    #[test]
    fn crossings_skip_horizontal_edges() {
        // Line through the top edge: only the two slanted sides count.
        let xs = crossings(&trapezoid(), 0.0, 1e-9);
        assert_eq!(xs, vec![20.0, 80.0]);
    }

    #[test]
    fn notch_extent_spans_the_notch() {
        let notched = vec![
            vector![0.0, 0.0],
            vector![40.0, 0.0],
            vector![40.0, 30.0],
            vector![60.0, 30.0],
            vector![60.0, 0.0],
            vector![100.0, 0.0],
            vector![100.0, 100.0],
            vector![0.0, 100.0],
        ];
        let xs = crossings(&notched, 10.0, 1e-9);
        assert_eq!(xs, vec![0.0, 40.0, 60.0, 100.0]);
        let cfg = LayoutCfg::default();
        let row = row_at(&notched, &polygon_bounds(&notched), 10.0, &cfg);
        assert_eq!(row.start.x, 0.0);
        assert_eq!(row.end.x, 100.0);
    }

    #[test]
    fn missed_scan_line_falls_back_to_inset_bounds() {
        let verts = trapezoid();
        let bounds = polygon_bounds(&verts);
        let cfg = LayoutCfg::default();
        let row = row_at(&verts, &bounds, 150.0, &cfg);
        assert_eq!(row.fallback, Some(0));
        assert!((row.start.x - 10.0).abs() < 1e-12);
        assert!((row.end.x - 90.0).abs() < 1e-12);
        assert_eq!(row.start.y, 150.0);
    }

    #[test]
    fn row_lines_are_evenly_spaced_inside_margins() {
        let bounds = polygon_bounds(&trapezoid());
        let (ys, spacing) = row_lines(&bounds, 4, 0.05);
        assert!((spacing - 18.0).abs() < 1e-12);
        assert!((ys[0] - 23.0).abs() < 1e-12);
        assert!((ys[3] - 77.0).abs() < 1e-12);
    }
}
