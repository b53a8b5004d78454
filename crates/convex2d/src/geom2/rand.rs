//! Random convex polygons and point clouds (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for property tests and benchmarks. Every draw is
//!   keyed by a replay token `(seed, index)` so a failing case can be replayed.
//!
//! Model
//! - Polygons: `n` equally spaced angles on [0, 2π) with bounded angular and
//!   radial jitter around `center`, then hull-normalized by `Polygon::new`.
//! - Point clouds: uniform samples in an axis-aligned box.

use super::polygon::Polygon;
use super::types::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

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

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Point::default(),
            random_phase: true,
        }
    }
}

/// Axis-aligned sampling box for point clouds.
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            min: Point::new(-1.0, -1.0),
            max: Point::new(1.0, 1.0),
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

/// Draw a random convex polygon via radial jitter + convex hull.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let pts: Vec<Point> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj).max(1e-6) * r0;
            Point::new(cfg.center.x + th.cos() * r, cfg.center.y + th.sin() * r)
        })
        .collect();
    Polygon::new(&pts)
}

/// Draw `n` points uniformly from `bounds`.
pub fn draw_point_cloud(n: usize, bounds: Bounds2, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = (bounds.min, bounds.max);
    (0..n)
        .map(|_| {
            Point::new(
                lo.x + rng.gen::<f64>() * (hi.x - lo.x),
                lo.y + rng.gen::<f64>() * (hi.y - lo.y),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            ..RadialCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_radial(cfg, tok);
        let p2 = draw_polygon_radial(cfg, tok);
        assert_eq!(p1.vertices(), p2.vertices());
        let p3 = draw_polygon_radial(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(p1.vertices(), p3.vertices());
    }

    #[test]
    fn radial_polygon_surrounds_center() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 9 },
            center: Point::new(3.0, -2.0),
            ..RadialCfg::default()
        };
        let p = draw_polygon_radial(cfg, ReplayToken { seed: 1, index: 123 });
        assert!(p.vertex_count() >= 3);
        assert!(crate::geom2::point_in_convex_polygon(cfg.center, p.vertices()));
    }

    #[test]
    fn cloud_stays_in_bounds() {
        let b = Bounds2 {
            min: Point::new(-5.0, 0.0),
            max: Point::new(5.0, 1.0),
        };
        let pts = draw_point_cloud(200, b, ReplayToken { seed: 3, index: 0 });
        assert_eq!(pts.len(), 200);
        assert!(pts
            .iter()
            .all(|p| (-5.0..=5.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)));
    }
}
