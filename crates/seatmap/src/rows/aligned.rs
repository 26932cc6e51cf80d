//! Rows parallel to a reference edge (slanted side sections).
//!
//! Model
//! - `d` = unit direction of outline edge `edge` (flipped so it points right),
//!   `n` = `d` rotated by +90° (points "down" on the canvas).
//! - Vertices are expressed in the frame `(u, v) = (d·p, n·p)`, the horizontal
//!   scan runs there, and row endpoints are mapped back with the transpose.

use nalgebra::{Matrix2, Vector2};

use super::{scan, RowExtent};
use crate::error::LayoutError;
use crate::geom2::Polygon;
use crate::layout::LayoutCfg;

/// Orthonormal frame whose first axis runs along edge `edge` of `poly`.
pub fn edge_frame(poly: &Polygon, edge: usize, eps: f64) -> Result<Matrix2<f64>, LayoutError> {
    let edges = poly.edges();
    let Some(&(a, b)) = edges.get(edge) else {
        return Err(LayoutError::invalid(format!(
            "reference edge {edge} out of range for {} vertices",
            edges.len()
        )));
    };
    let len = (b - a).norm();
    if len <= eps {
        return Err(LayoutError::invalid(format!(
            "reference edge {edge} has zero length"
        )));
    }
    let mut d = (b - a) / len;
    if d.x < 0.0 {
        d = -d;
    }
    let n = Vector2::new(-d.y, d.x);
    Ok(Matrix2::new(d.x, d.y, n.x, n.y))
}

/// Row extents (before the end margin) and row spacing along the frame normal.
pub fn locate(
    poly: &Polygon,
    edge: usize,
    rows: usize,
    cfg: &LayoutCfg,
) -> Result<(Vec<RowExtent>, f64), LayoutError> {
    let to_frame = edge_frame(poly, edge, cfg.eps)?;
    let from_frame = to_frame.transpose();
    let local = poly.transformed(&to_frame);
    let (extents, spacing) = scan::locate(&local, rows, cfg);
    let extents = extents
        .into_iter()
        .map(|e| RowExtent {
            start: from_frame * e.start,
            end: from_frame * e.end,
            fallback: e.fallback,
        })
        .collect();
    Ok((extents, spacing))
}
