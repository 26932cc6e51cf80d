//! Layout tunables.
//!
//! Policy
//! - Every knob the generator uses lives here; the generator itself holds no
//!   venue-specific constants. Sections may override `strategy` and color.
//! - Deserializes with `#[serde(default)]`, so a config file only needs the
//!   fields it changes.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::rows::Strategy;

/// Which side of the canvas is nearest the stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageSide {
    /// Stage at minimum y.
    #[default]
    Top,
    /// Stage at maximum y.
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutCfg {
    /// Default row-boundary strategy.
    pub strategy: Strategy,
    pub stage: StageSide,
    /// Vertical inset (fraction of polygon height) for scan strategies.
    pub row_margin: f64,
    /// Margin along the left/right sides for the edge-interpolated strategy.
    pub quad_margin: f64,
    /// Inward margin (fraction of row length) applied at both row ends.
    pub end_margin: f64,
    /// Bounding-box inset used when a scan line misses the outline.
    pub fallback_inset: f64,
    pub max_seat_radius: f64,
    /// Seat radius as a fraction of row spacing (before the cap).
    pub radius_factor: f64,
    /// Minimum seat spacing as a multiple of the seat radius.
    pub min_spacing_factor: f64,
    pub eps: f64,
    /// Decimal places kept in output positions.
    pub position_decimals: u32,
}

impl Default for LayoutCfg {
    fn default() -> Self {
        Self {
            strategy: Strategy::HorizontalScan,
            stage: StageSide::Top,
            row_margin: 0.05,
            quad_margin: 0.08,
            end_margin: 0.05,
            fallback_inset: 0.10,
            max_seat_radius: 10.0,
            radius_factor: 0.35,
            min_spacing_factor: 2.2,
            eps: 1e-9,
            position_decimals: 2,
        }
    }
}

impl LayoutCfg {
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fractions = [
            ("row_margin", self.row_margin),
            ("quad_margin", self.quad_margin),
            ("end_margin", self.end_margin),
            ("fallback_inset", self.fallback_inset),
        ];
        for (name, v) in fractions {
            if !(0.0..0.5).contains(&v) {
                return Err(LayoutError::config(format!("{name} must be in [0, 0.5), got {v}")));
            }
        }
        let positives = [
            ("max_seat_radius", self.max_seat_radius),
            ("radius_factor", self.radius_factor),
            ("min_spacing_factor", self.min_spacing_factor),
            ("eps", self.eps),
        ];
        for (name, v) in positives {
            if !(v.is_finite() && v > 0.0) {
                return Err(LayoutError::config(format!("{name} must be > 0, got {v}")));
            }
        }
        if self.position_decimals > 9 {
            return Err(LayoutError::config("position_decimals must be <= 9"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(LayoutCfg::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_values() {
        let cfg = LayoutCfg {
            end_margin: 0.5,
            ..LayoutCfg::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(LayoutError::InvalidConfig { .. })
        ));
        let cfg = LayoutCfg {
            radius_factor: 0.0,
            ..LayoutCfg::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = LayoutCfg {
            row_margin: f64::NAN,
            ..LayoutCfg::default()
        };
        assert!(cfg.validate().is_err());
    }
}
