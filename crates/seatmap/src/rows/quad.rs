//! Edge-interpolated rows for quadrilateral sections.
//!
//! Model
//! - Classify the 4 sides by aspect `|dx| / (|dy| + ε)`: the two most
//!   horizontal are top/bottom (split by mean y), the other two left/right
//!   (split by mean x). Top and bottom endpoints are ordered by x.
//! - Row `j` of `n` uses `t = m + (1 - 2m)(j + 0.5)/n` and runs from
//!   `lerp(top_left, bottom_left, t)` to `lerp(top_right, bottom_right, t)`.

use nalgebra::Vector2;

use super::RowExtent;
use crate::geom2::{edge_list, mix};

/// Keeps the aspect finite for vertical sides.
const ASPECT_EPS: f64 = 1e-3;

type Side = (Vector2<f64>, Vector2<f64>);

/// Sides of a quadrilateral; `top`/`bottom` are ordered left to right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSides {
    pub top: Side,
    pub bottom: Side,
    pub left: Side,
    pub right: Side,
}

#[inline]
fn aspect(e: &Side) -> f64 {
    let d = e.1 - e.0;
    d.x.abs() / (d.y.abs() + ASPECT_EPS)
}

#[inline]
fn left_to_right(e: Side) -> Side {
    if e.0.x <= e.1.x {
        e
    } else {
        (e.1, e.0)
    }
}

/// Classify the sides of a 4-vertex outline; `None` for any other count.
pub fn classify(verts: &[Vector2<f64>]) -> Option<QuadSides> {
    if verts.len() != 4 {
        return None;
    }
    let mut edges = edge_list(verts);
    // Most horizontal first; stable so ties keep outline order.
    edges.sort_by(|a, b| aspect(b).total_cmp(&aspect(a)));
    let mean_y = |e: &Side| 0.5 * (e.0.y + e.1.y);
    let mean_x = |e: &Side| 0.5 * (e.0.x + e.1.x);
    let (top, bottom) = if mean_y(&edges[0]) <= mean_y(&edges[1]) {
        (edges[0], edges[1])
    } else {
        (edges[1], edges[0])
    };
    let (left, right) = if mean_x(&edges[2]) <= mean_x(&edges[3]) {
        (edges[2], edges[3])
    } else {
        (edges[3], edges[2])
    };
    Some(QuadSides {
        top: left_to_right(top),
        bottom: left_to_right(bottom),
        left,
        right,
    })
}

/// Row extents (before the end margin) and the spacing between rows.
pub fn locate(sides: &QuadSides, rows: usize, margin: f64) -> (Vec<RowExtent>, f64) {
    if rows == 0 {
        return (Vec::new(), 0.0);
    }
    let (top_left, top_right) = sides.top;
    let (bottom_left, bottom_right) = sides.bottom;
    let n = rows as f64;
    let extents = (0..rows)
        .map(|j| {
            let t = margin + (1.0 - 2.0 * margin) * (j as f64 + 0.5) / n;
            RowExtent::new(
                mix(top_left, bottom_left, t),
                mix(top_right, bottom_right, t),
            )
        })
        .collect();
    let side_len = 0.5 * ((bottom_left - top_left).norm() + (bottom_right - top_right).norm());
    let spacing = (1.0 - 2.0 * margin) * side_len / n;
    (extents, spacing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    /// Slanted parallelogram, vertices deliberately not starting at top-left.
    fn parallelogram() -> Vec<Vector2<f64>> {
        vec![
            vector![120.0, 100.0],
            vector![20.0, 100.0],
            vector![0.0, 0.0],
            vector![100.0, 0.0],
        ]
    }

    #[test]
    fn classify_parallelogram() {
        let s = classify(&parallelogram()).unwrap();
        assert_eq!(s.top, (vector![0.0, 0.0], vector![100.0, 0.0]));
        assert_eq!(s.bottom, (vector![20.0, 100.0], vector![120.0, 100.0]));
        assert!(0.5 * (s.left.0.x + s.left.1.x) < 0.5 * (s.right.0.x + s.right.1.x));
    }

    #[test]
    fn classify_requires_four_sides() {
        let tri = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
        assert!(classify(&tri).is_none());
    }

    #[test]
    fn rows_follow_the_slant() {
        let s = classify(&parallelogram()).unwrap();
        let (rows, spacing) = locate(&s, 2, 0.0);
        // t = 0.25 and 0.75
        assert!((rows[0].start - vector![5.0, 25.0]).norm() < 1e-12);
        assert!((rows[0].end - vector![105.0, 25.0]).norm() < 1e-12);
        assert!((rows[1].start - vector![15.0, 75.0]).norm() < 1e-12);
        let side = (20.0f64 * 20.0 + 100.0 * 100.0).sqrt();
        assert!((spacing - side / 2.0).abs() < 1e-9);
    }

    #[test]
    fn margin_pulls_rows_inwards() {
        let s = classify(&parallelogram()).unwrap();
        let (rows, _) = locate(&s, 1, 0.1);
        assert!((rows[0].start.y - 50.0).abs() < 1e-12);
        let (rows, _) = locate(&s, 4, 0.1);
        assert!((rows[0].start.y - 20.0).abs() < 1e-12);
        assert!((rows[3].start.y - 80.0).abs() < 1e-12);
    }
}
