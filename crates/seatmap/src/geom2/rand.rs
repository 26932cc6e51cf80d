//! Random convex section outlines for property tests and benchmarks.
//!
//! Corners sit on an ellipse around `center` at jittered angles, pushed in or
//! out radially, and are wrapped in their convex hull. A `(seed, index)` draw
//! key makes every outline reproducible on its own.

use super::{util::convex_hull, Polygon};
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug)]
pub struct OutlineCfg {
    /// Inclusive corner-count range; values below 3 are raised to 3.
    pub corners: (usize, usize),
    pub half_width: f64,
    pub half_height: f64,
    pub center: Vector2<f64>,
    /// Max angular offset of a corner as a fraction of the even spacing (≤ 0.49).
    pub angle_jitter: f64,
    /// Max relative radial offset (≤ 0.9).
    pub radial_jitter: f64,
}

impl Default for OutlineCfg {
    fn default() -> Self {
        Self {
            corners: (4, 8),
            half_width: 240.0,
            half_height: 120.0,
            center: Vector2::new(500.0, 400.0),
            angle_jitter: 0.3,
            radial_jitter: 0.2,
        }
    }
}

/// Identifies one draw: same key, same outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawKey {
    pub seed: u64,
    pub index: u64,
}

impl DrawKey {
    fn rng(self) -> StdRng {
        let mut h = self.seed.rotate_left(17) ^ self.index.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        h ^= h >> 33;
        h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
        h ^= h >> 33;
        StdRng::seed_from_u64(h)
    }
}

/// `None` only if the hull degenerates.
pub fn draw_convex_outline(cfg: &OutlineCfg, key: DrawKey) -> Option<Polygon> {
    let mut rng = key.rng();
    let lo = cfg.corners.0.max(3);
    let n = rng.gen_range(lo..=cfg.corners.1.max(lo));
    let step = TAU / n as f64;
    let spin = rng.gen_range(0.0..TAU);
    let aj = cfg.angle_jitter.clamp(0.0, 0.49) * step;
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let corners: Vec<Vector2<f64>> = (0..n)
        .map(|k| {
            let th = spin + k as f64 * step + rng.gen_range(-aj..=aj);
            let r = 1.0 + rng.gen_range(-rj..=rj);
            let offset = Vector2::new(cfg.half_width * th.cos(), cfg.half_height * th.sin());
            cfg.center + offset * r
        })
        .collect();
    Polygon::new(convex_hull(&corners)?).ok()
}
