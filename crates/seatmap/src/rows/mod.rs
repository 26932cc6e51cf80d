//! Row-boundary locator.
//!
//! Purpose
//! - For a section outline and a row count, find each row's seatable extent:
//!   two endpoints ordered left to right, already shrunk by the end margin.
//!
//! Strategies
//! - `HorizontalScan` (default policy): horizontal scan lines, leftmost and
//!   rightmost edge crossings. Works for any simple polygon; in a notched
//!   (non-convex) outline the extent spans the notch.
//! - `EdgeInterpolated`: quadrilaterals only. Rows interpolate between the
//!   classified left and right sides, so they follow the outline's slant.
//!   Other vertex counts fall back to `HorizontalScan`.
//! - `EdgeAligned { edge }`: rows run parallel to outline edge `edge`;
//!   `HorizontalScan` runs in that edge's rotated frame.
//!
//! Rows are returned in canvas order: index 0 is the row nearest minimum y
//! (for `EdgeAligned`, nearest the reference edge's "up" side).
//!
//! Code cross-refs: `geom2::Polygon`, `layout::LayoutCfg`, `place::place_row`

pub mod aligned;
pub mod quad;
pub mod scan;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geom2::{mix, Polygon};
use crate::layout::LayoutCfg;

/// Row-boundary strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    HorizontalScan,
    EdgeInterpolated,
    EdgeAligned {
        edge: usize,
    },
}

/// Seatable extent of one row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowExtent {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
    /// `Some(crossings)` when the scan line found fewer than 2 crossings and
    /// the bounding-box fallback was used.
    pub fallback: Option<usize>,
}

impl RowExtent {
    #[inline]
    pub fn new(start: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self {
            start,
            end,
            fallback: None,
        }
    }

    /// Move both ends inwards by `frac` of the length.
    fn shrink(self, frac: f64) -> Self {
        Self {
            start: mix(self.start, self.end, frac),
            end: mix(self.start, self.end, 1.0 - frac),
            fallback: self.fallback,
        }
    }
}

/// All rows of one section.
#[derive(Clone, Debug, PartialEq)]
pub struct RowFrame {
    /// Extents in canvas order (see module docs).
    pub extents: Vec<RowExtent>,
    /// Distance between adjacent rows; drives the seat radius.
    pub row_spacing: f64,
    /// Strategy actually applied (after any fallback).
    pub strategy: Strategy,
}

/// Locate `rows` row extents inside `poly`.
pub fn locate_rows(
    poly: &Polygon,
    rows: usize,
    strategy: Strategy,
    cfg: &LayoutCfg,
) -> Result<RowFrame, LayoutError> {
    let (extents, row_spacing, used) = match strategy {
        Strategy::HorizontalScan => {
            let (e, s) = scan::locate(poly.vertices(), rows, cfg);
            (e, s, strategy)
        }
        Strategy::EdgeInterpolated => match quad::classify(poly.vertices()) {
            Some(sides) => {
                let (e, s) = quad::locate(&sides, rows, cfg.quad_margin);
                (e, s, strategy)
            }
            None => {
                tracing::debug!(
                    vertices = poly.len(),
                    "edge-interpolated rows need 4 sides; using horizontal scan"
                );
                let (e, s) = scan::locate(poly.vertices(), rows, cfg);
                (e, s, Strategy::HorizontalScan)
            }
        },
        Strategy::EdgeAligned { edge } => {
            let (e, s) = aligned::locate(poly, edge, rows, cfg)?;
            (e, s, strategy)
        }
    };
    Ok(RowFrame {
        extents: extents
            .into_iter()
            .map(|e| e.shrink(cfg.end_margin))
            .collect(),
        row_spacing,
        strategy: used,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn rect(w: f64, h: f64) -> Polygon {
        Polygon::new(vec![
            vector![0.0, 0.0],
            vector![w, 0.0],
            vector![w, h],
            vector![0.0, h],
        ])
        .unwrap()
    }

    #[test]
    fn scan_rows_on_rectangle_apply_end_margin() {
        let cfg = LayoutCfg::default();
        let frame = locate_rows(&rect(200.0, 100.0), 3, Strategy::HorizontalScan, &cfg).unwrap();
        assert_eq!(frame.extents.len(), 3);
        // usable height 90, spacing 22.5, first row at 5 + 22.5
        assert!((frame.row_spacing - 22.5).abs() < 1e-12);
        let first = frame.extents[0];
        assert!((first.start.y - 27.5).abs() < 1e-12);
        assert!((first.start.x - 10.0).abs() < 1e-9);
        assert!((first.end.x - 190.0).abs() < 1e-9);
        assert!(first.fallback.is_none());
        assert!(frame.extents[2].start.y > frame.extents[1].start.y);
    }

    #[test]
    fn edge_interpolated_falls_back_for_pentagon() {
        let poly = Polygon::new(vec![
            vector![0.0, 0.0],
            vector![50.0, -20.0],
            vector![100.0, 0.0],
            vector![100.0, 80.0],
            vector![0.0, 80.0],
        ])
        .unwrap();
        let frame =
            locate_rows(&poly, 4, Strategy::EdgeInterpolated, &LayoutCfg::default()).unwrap();
        assert_eq!(frame.strategy, Strategy::HorizontalScan);
        assert_eq!(frame.extents.len(), 4);
    }

    #[test]
    fn zero_rows_is_empty_frame() {
        let frame =
            locate_rows(&rect(10.0, 10.0), 0, Strategy::EdgeInterpolated, &LayoutCfg::default())
                .unwrap();
        assert!(frame.extents.is_empty());
    }

    #[test]
    fn strategy_serde_tags() {
        let s: Strategy = serde_json::from_str(r#"{"kind":"edge_aligned","edge":2}"#).unwrap();
        assert_eq!(s, Strategy::EdgeAligned { edge: 2 });
        let s: Strategy = serde_json::from_str(r#"{"kind":"horizontal_scan"}"#).unwrap();
        assert_eq!(s, Strategy::HorizontalScan);
    }
}
