//! Seat placer: evenly spaced seats along a row extent.
//!
//! Model
//! - One seat sits at the midpoint. Otherwise seats are spread over the whole
//!   extent, `spacing = length / (count - 1)`.
//! - Spacing never drops below `min_spacing`. When it would, seats are laid out
//!   at `min_spacing` from `start` (the centered span would begin before
//!   `start`), so the row runs past `end`; the overflow is reported.
//!
//! Code cross-refs: `rows::RowExtent`, `layout::LayoutCfg`

use nalgebra::Vector2;

use crate::error::LayoutError;
use crate::geom2::lerp;
use crate::layout::LayoutCfg;

/// Radius for rows `row_spacing` apart: `min(max_seat_radius, row_spacing * radius_factor)`.
#[inline]
pub fn seat_radius(row_spacing: f64, cfg: &LayoutCfg) -> f64 {
    (row_spacing * cfg.radius_factor).min(cfg.max_seat_radius).max(0.0)
}

#[inline]
pub fn min_spacing(radius: f64, cfg: &LayoutCfg) -> f64 {
    radius * cfg.min_spacing_factor
}

/// Row that did not fit at the minimum spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overflow {
    /// Span the seats occupy at `min_spacing`.
    pub needed: f64,
    /// Length of the row extent.
    pub available: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowPlacement {
    /// Seat centers, left to right.
    pub positions: Vec<Vector2<f64>>,
    /// Distance between consecutive seats (0 for fewer than 2 seats).
    pub spacing: f64,
    pub overflow: Option<Overflow>,
}

/// Place `count` seats between `start` and `end`.
pub fn place_row(
    start: Vector2<f64>,
    end: Vector2<f64>,
    count: usize,
    min_spacing: f64,
) -> Result<RowPlacement, LayoutError> {
    if !(min_spacing.is_finite() && min_spacing >= 0.0) {
        return Err(LayoutError::invalid(format!(
            "minimum spacing must be finite and >= 0, got {min_spacing}"
        )));
    }
    match count {
        0 => Ok(RowPlacement {
            positions: Vec::new(),
            spacing: 0.0,
            overflow: None,
        }),
        1 => Ok(RowPlacement {
            positions: vec![(start + end) * 0.5],
            spacing: 0.0,
            overflow: None,
        }),
        _ => {
            let length = (end - start).norm();
            let gaps = (count - 1) as f64;
            let spacing = length / gaps;
            if spacing >= min_spacing {
                let positions = (0..count)
                    .map(|i| lerp(start, end, i as f64 / gaps))
                    .collect::<Result<Vec<_>, _>>()?;
                return Ok(RowPlacement {
                    positions,
                    spacing,
                    overflow: None,
                });
            }
            let dir = if length > 0.0 {
                (end - start) / length
            } else {
                Vector2::new(1.0, 0.0)
            };
            let needed = min_spacing * gaps;
            let offset = ((length - needed) * 0.5).max(0.0);
            let origin = start + dir * offset;
            let positions = (0..count)
                .map(|i| origin + dir * (min_spacing * i as f64))
                .collect();
            Ok(RowPlacement {
                positions,
                spacing: min_spacing,
                overflow: (needed > length).then_some(Overflow {
                    needed,
                    available: length,
                }),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn single_seat_at_exact_midpoint() {
        let a = vector![10.0, 20.0];
        let b = vector![31.0, 45.0];
        let p = place_row(a, b, 1, 5.0).unwrap();
        assert_eq!(p.positions, vec![vector![20.5, 32.5]]);
        assert!(p.overflow.is_none());
    }

    #[test]
    fn even_spacing_hits_both_ends() {
        let p = place_row(vector![0.0, 0.0], vector![90.0, 0.0], 10, 5.0).unwrap();
        assert_eq!(p.positions.len(), 10);
        assert_eq!(p.positions[0], vector![0.0, 0.0]);
        assert_eq!(p.positions[9], vector![90.0, 0.0]);
        assert!((p.spacing - 10.0).abs() < 1e-12);
        for w in p.positions.windows(2) {
            assert!(((w[1] - w[0]).norm() - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn spacing_floor_starts_at_row_start_and_reports_overflow() {
        let p = place_row(vector![0.0, 0.0], vector![20.0, 0.0], 5, 11.0).unwrap();
        assert_eq!(p.positions[0], vector![0.0, 0.0]);
        assert!((p.positions[4].x - 44.0).abs() < 1e-12);
        assert_eq!(
            p.overflow,
            Some(Overflow {
                needed: 44.0,
                available: 20.0
            })
        );
        for w in p.positions.windows(2) {
            assert!((w[1] - w[0]).norm() >= 11.0 - 1e-9);
        }
    }

    #[test]
    fn slanted_row_keeps_direction_under_floor() {
        let a = vector![0.0, 0.0];
        let b = vector![3.0, 4.0];
        let p = place_row(a, b, 3, 5.0).unwrap();
        assert!((p.positions[1] - vector![3.0, 4.0]).norm() < 1e-12);
        assert!((p.positions[2] - vector![6.0, 8.0]).norm() < 1e-12);
    }

    #[test]
    fn zero_length_row_still_spreads_seats() {
        let a = vector![5.0, 5.0];
        let p = place_row(a, a, 3, 2.0).unwrap();
        assert_eq!(p.positions[2], vector![9.0, 5.0]);
        assert!(p.overflow.is_some());
    }

    #[test]
    fn radius_is_capped() {
        let cfg = LayoutCfg::default();
        assert_eq!(seat_radius(100.0, &cfg), 10.0);
        assert!((seat_radius(20.0, &cfg) - 7.0).abs() < 1e-12);
        assert!((min_spacing(5.0, &cfg) - 11.0).abs() < 1e-12);
    }

    #[test]
    fn negative_min_spacing_is_invalid() {
        assert!(place_row(vector![0.0, 0.0], vector![1.0, 0.0], 2, -1.0).is_err());
    }
}
