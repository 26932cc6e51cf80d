//! 2D geometry primitives on canvas coordinates.
//!
//! Purpose
//! - Point-in-polygon, bounds, interpolation and edge lists for simple polygons
//!   given as an ordered, implicitly closed vertex list.
//! - `Polygon` wraps a validated vertex list; the free functions work on raw
//!   slices so the row locator can run them in rotated frames.
//!
//! Conventions
//! - Canvas coordinates: x grows to the right, y grows downwards.
//! - Points are `nalgebra::Vector2<f64>`; `CanvasPoint` is the `{x, y}` wire form.
//!
//! Code cross-refs: `rows::scan`, `place::place_row`

mod polygon;
pub mod rand;
mod types;
mod util;

pub use polygon::{
    edge_list, is_convex, lerp, point_in_polygon, polygon_bounds, signed_area, Polygon,
};
pub use types::{Bounds2, CanvasPoint};
pub use util::convex_hull;

pub(crate) use polygon::mix;

#[cfg(test)]
mod tests;
