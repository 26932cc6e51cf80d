//! Simple polygons as ordered vertex lists.
//!
//! Invariants (`Polygon`)
//! - At least 3 vertices, all finite.
//! - Non-zero area. Self-intersection is not checked (assumed absent).
//! - Implicitly closed: the last vertex connects back to the first.

use nalgebra::{Matrix2, Vector2};

use super::types::{Bounds2, CanvasPoint};
use crate::error::LayoutError;

/// Areas at or below this are treated as degenerate.
const AREA_EPS: f64 = 1e-9;

/// Validated simple polygon (immutable once built).
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    verts: Vec<Vector2<f64>>,
}

impl Polygon {
    /// Build from vertices, rejecting short, non-finite or zero-area input.
    pub fn new(verts: Vec<Vector2<f64>>) -> Result<Self, LayoutError> {
        if verts.len() < 3 {
            return Err(LayoutError::malformed(format!(
                "need at least 3 points, got {}",
                verts.len()
            )));
        }
        if let Some(i) = verts.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(LayoutError::malformed(format!("point {i} is not finite")));
        }
        let area = signed_area(&verts);
        if area.abs() <= AREA_EPS {
            return Err(LayoutError::malformed(format!(
                "degenerate outline (area {area:e})"
            )));
        }
        Ok(Self { verts })
    }

    pub fn from_canvas(points: &[CanvasPoint]) -> Result<Self, LayoutError> {
        Self::new(points.iter().map(|&p| p.into()).collect())
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.verts
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds2 {
        polygon_bounds(&self.verts)
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        point_in_polygon(p, &self.verts)
    }

    #[inline]
    pub fn edges(&self) -> Vec<(Vector2<f64>, Vector2<f64>)> {
        edge_list(&self.verts)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        signed_area(&self.verts).abs()
    }

    #[inline]
    pub fn is_convex(&self) -> bool {
        is_convex(&self.verts)
    }

    /// Vertices mapped through `m` (no re-validation; callers pass rotations).
    pub(crate) fn transformed(&self, m: &Matrix2<f64>) -> Vec<Vector2<f64>> {
        self.verts.iter().map(|p| m * p).collect()
    }
}

/// Ray casting (even-odd). Points exactly on an edge may land either way.
pub fn point_in_polygon(p: Vector2<f64>, verts: &[Vector2<f64>]) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (verts[i], verts[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Axis-aligned bounds. An empty slice yields inverted (infinite) bounds.
pub fn polygon_bounds(verts: &[Vector2<f64>]) -> Bounds2 {
    verts.iter().fold(
        Bounds2 {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        },
        |b, p| Bounds2 {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        },
    )
}

/// Linear interpolation `p1 + t (p2 - p1)`.
///
/// Fails with `InvalidArgument` for `t` outside `[0, 1]` (no clamping).
pub fn lerp(p1: Vector2<f64>, p2: Vector2<f64>, t: f64) -> Result<Vector2<f64>, LayoutError> {
    if !(0.0..=1.0).contains(&t) {
        return Err(LayoutError::invalid(format!(
            "interpolation parameter {t} outside [0, 1]"
        )));
    }
    Ok(mix(p1, p2, t))
}

/// Unchecked interpolation for callers that construct `t` in range.
#[inline]
pub(crate) fn mix(p1: Vector2<f64>, p2: Vector2<f64>, t: f64) -> Vector2<f64> {
    p1 + (p2 - p1) * t
}

/// Consecutive vertex pairs including the closing edge (last → first).
pub fn edge_list(verts: &[Vector2<f64>]) -> Vec<(Vector2<f64>, Vector2<f64>)> {
    let n = verts.len();
    (0..n).map(|i| (verts[i], verts[(i + 1) % n])).collect()
}

/// Shoelace area; sign follows vertex winding.
pub fn signed_area(verts: &[Vector2<f64>]) -> f64 {
    let n = verts.len();
    let mut acc = 0.0;
    for i in 0..n {
        let p = verts[i];
        let q = verts[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

/// True when all turns share one orientation (collinear turns ignored).
pub fn is_convex(verts: &[Vector2<f64>]) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0f64;
    for i in 0..n {
        let a = verts[i];
        let b = verts[(i + 1) % n];
        let c = verts[(i + 2) % n];
        let z = super::util::cross(a, b, c);
        if z.abs() <= AREA_EPS {
            continue;
        }
        if sign == 0.0 {
            sign = z.signum();
        } else if z.signum() != sign {
            return false;
        }
    }
    sign != 0.0
}
