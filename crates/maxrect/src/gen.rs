//! Obstacle generators.
//!
//! - `SquaringGen` is the reproducible reference source: `state = state² mod p`.
//!   A given `GridCfg` always yields the same obstacles, which the regression
//!   goldens rely on.
//! - `uniform_obstacles` draws from a seeded `StdRng` for benchmarks and tests
//!   that want point sets unrelated to the recurrence.

use crate::cfg::GridCfg;
use crate::point::{Coord, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Squaring congruential sequence. Yields the state after each step.
#[derive(Clone, Debug)]
pub struct SquaringGen {
    state: u64,
    modulus: u64,
}

impl SquaringGen {
    /// Pre: `modulus` in `[2, 2^32]` (see `GridCfg::validate`).
    pub fn new(seed: u64, modulus: u64) -> Self {
        Self {
            state: seed % modulus,
            modulus,
        }
    }

    pub fn from_cfg(cfg: &GridCfg) -> Self {
        Self::new(cfg.seed, cfg.modulus)
    }

    #[inline]
    pub fn next_value(&mut self) -> u64 {
        self.state = (self.state * self.state) % self.modulus;
        self.state
    }

    /// Next obstacle inside `[0, size)²`; x is drawn before y.
    #[inline]
    pub fn next_point(&mut self, size: usize) -> Point {
        let n = size as u64;
        let x = (self.next_value() % n) as Coord;
        let y = (self.next_value() % n) as Coord;
        Point::new(x, y)
    }
}

impl Iterator for SquaringGen {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        Some(self.next_value())
    }
}

/// The `N` obstacles of the reference point set.
///
/// Pre: `cfg` passed `GridCfg::validate`.
pub fn squaring_obstacles(cfg: &GridCfg) -> Vec<Point> {
    let mut gen = SquaringGen::from_cfg(cfg);
    (0..cfg.size).map(|_| gen.next_point(cfg.size)).collect()
}

/// `count` obstacles uniform in `[0, size)²` from a seeded `StdRng`.
pub fn uniform_obstacles(size: usize, count: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = size.max(1) as Coord;
    (0..count)
        .map(|_| Point::new(rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squaring_sequence_matches_reference_constants() {
        let g = SquaringGen::from_cfg(&GridCfg::default());
        let first: Vec<u64> = g.take(4).collect();
        assert_eq!(first, vec![33_042_957, 31_013_583, 24_796_205, 2_648_498]);
    }

    #[test]
    fn obstacles_draw_x_then_y() {
        let pts = squaring_obstacles(&GridCfg::with_size(10));
        assert_eq!(pts.len(), 10);
        assert_eq!(&pts[..3], &[Point::new(7, 3), Point::new(5, 8), Point::new(3, 7)]);
        assert!(pts.iter().all(|p| (0..10).contains(&p.x) && (0..10).contains(&p.y)));
    }

    #[test]
    fn generators_are_deterministic() {
        let cfg = GridCfg::with_size(257);
        assert_eq!(squaring_obstacles(&cfg), squaring_obstacles(&cfg));
        let a = uniform_obstacles(64, 100, 7);
        let b = uniform_obstacles(64, 100, 7);
        assert_eq!(a, b);
        assert!(a.iter().all(|p| (0..64).contains(&p.x) && (0..64).contains(&p.y)));
        assert_ne!(a, uniform_obstacles(64, 100, 8));
    }
}
