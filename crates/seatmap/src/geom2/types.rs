//! Plain value types shared by the geometry code.
//!
//! - `CanvasPoint`: serde form of a point (`{"x": .., "y": ..}`).
//! - `Bounds2`: axis-aligned bounds `(min_x, max_x, min_y, max_y)`.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Canvas coordinate as it appears in layout JSON.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round both coordinates to `decimals` places (half away from zero).
    pub fn rounded(self, decimals: u32) -> Self {
        let scale = 10f64.powi(decimals as i32);
        Self {
            x: (self.x * scale).round() / scale,
            y: (self.y * scale).round() / scale,
        }
    }
}

impl From<Vector2<f64>> for CanvasPoint {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<CanvasPoint> for Vector2<f64> {
    #[inline]
    fn from(p: CanvasPoint) -> Self {
        Vector2::new(p.x, p.y)
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds2 {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds2 {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Shrink horizontally by `frac * width` on each side.
    pub fn inset_x(&self, frac: f64) -> (f64, f64) {
        let d = self.width() * frac;
        (self.min_x + d, self.max_x - d)
    }
}
