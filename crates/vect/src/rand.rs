//! Random convex vertex chains (jittered circle + linear stretch + replay tokens).
//!
//! Purpose
//! - Deterministic sampler of strictly convex closed chains for the
//!   antipodal search: tests, benches and the CLI `sample` command.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular
//!   jitter and sort. Points on a circle in angle order are strictly convex
//!   and counter-clockwise.
//! - Apply an invertible linear map (convexity survives), fix the winding if
//!   the map reflects, then translate.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::{Matrix2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Rotational sense of the produced chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Ccw,
    Cw,
}

/// Chain sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ChainCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    pub radius: f64,
    /// Linear map applied to the circle points (must be invertible).
    pub linear: Matrix2<f64>,
    pub center: Point,
    pub winding: Winding,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for ChainCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radius: 1.0,
            linear: Matrix2::identity(),
            center: Point::origin(),
            winding: Winding::Ccw,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a strictly convex closed chain with the configured winding.
///
/// Returns `None` if the linear map is singular or the radius is not positive.
pub fn draw_convex_chain(cfg: ChainCfg, tok: ReplayToken) -> Option<Vec<Point>> {
    let det = cfg.linear.determinant();
    if !det.is_finite() || det.abs() < 1e-12 || !(cfg.radius > 0.0) {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            (k as f64) * delta + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let c = cfg.center.coords();
    let mut pts: Vec<Point> = angles
        .into_iter()
        .map(|th| {
            let th = th + phase;
            let q = cfg.linear * Vector2::new(th.cos(), th.sin()) * cfg.radius;
            Point::from(q + c)
        })
        .collect();
    // reflection flips the circle's CCW order
    let ccw = det > 0.0;
    if ccw != (cfg.winding == Winding::Ccw) {
        pts.reverse();
    }
    Some(pts)
}
