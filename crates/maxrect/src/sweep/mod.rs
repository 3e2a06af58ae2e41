//! Left/right-edge sweep for the largest empty rectangle.
//!
//! Model
//! - Every sorted point `p[i]` proposes a left edge at `x0 = p[i].x + 1`.
//!   Scanning right edges `p[j]` in x order, the vertical window `[y_min, y_max)`
//!   is the tallest band around `p[i].y` that no point between `i` and `j`
//!   enters. Each `j` closes one candidate `[x0, p[j].x) × [y_min, y_max)`.
//! - A point at the height of `p[i]` closes every wider candidate, so the
//!   scan for that left edge stops there.
//! - Pruning: after the window narrows, `(N - x0) * (y_max - y_min)` bounds
//!   every remaining candidate of this left edge; once it cannot beat the
//!   best, the scan stops. Disabling it (`SweepCfg::prune`) only costs time.
//!
//! Parallelism
//! - Left edges are independent readers of the sorted buffer.
//!   `sweep_parallel` hands contiguous left-edge ranges to rayon workers and
//!   reduces their `Best`s in range order, which reproduces the sequential
//!   answer exactly (same area, same corners).

use crate::cfg::SweepCfg;
use crate::point::{Area, Best, Coord, Point, Rect};
use crate::points::SortedPoints;
use rayon::prelude::*;
use std::ops::Range;

/// Left edges handed to one rayon task, at minimum.
const MIN_CHUNK: usize = 256;

/// Sequential sweep over all left edges.
pub fn sweep(sorted: &SortedPoints, cfg: SweepCfg) -> Best {
    sweep_range(sorted, 0..sorted.len(), cfg)
}

/// Sweep restricted to left edges `lefts`; right edges still range over the
/// whole buffer. The accumulator is private to the call.
pub fn sweep_range(sorted: &SortedPoints, lefts: Range<usize>, cfg: SweepCfg) -> Best {
    let pts = sorted.as_slice();
    let lefts = lefts.start.min(pts.len())..lefts.end.min(pts.len());
    let mut best = Best::default();
    for i in lefts {
        scan_left_edge(pts, i, sorted.size(), cfg, &mut best);
    }
    best
}

/// Parallel sweep; equal to `sweep` in area and rectangle.
pub fn sweep_parallel(sorted: &SortedPoints, cfg: SweepCfg) -> Best {
    let m = sorted.len();
    let chunk = (m / (rayon::current_num_threads() * 8)).max(MIN_CHUNK);
    let ranges: Vec<Range<usize>> = (0..m)
        .step_by(chunk)
        .map(|start| start..(start + chunk).min(m))
        .collect();
    ranges
        .into_par_iter()
        .map(|r| sweep_range(sorted, r, cfg))
        .reduce(Best::default, Best::merge)
}

fn scan_left_edge(pts: &[Point], i: usize, size: Coord, cfg: SweepCfg, best: &mut Best) {
    let left = pts[i];
    let x0 = left.x + 1;
    let mut y_min: Coord = 0;
    let mut y_max: Coord = size;
    // Widest rectangle this left edge could still produce.
    let reach = Area::from(size) - Area::from(x0);

    // Points in the same column as `left` span no width with it.
    let mut j = i + 1;
    while j < pts.len() && pts[j].x == left.x {
        j += 1;
    }

    for &right in &pts[j..] {
        let area = (Area::from(right.x) - Area::from(x0)) * window(y_min, y_max);
        best.offer(area, Rect::new(x0, y_min, right.x, y_max));

        if right.y == left.y {
            break;
        }
        let narrowed = if right.y < left.y {
            if y_min < right.y + 1 {
                y_min = right.y + 1;
                true
            } else {
                false
            }
        } else if y_max > right.y {
            y_max = right.y;
            true
        } else {
            false
        };
        if narrowed && cfg.prune && reach * window(y_min, y_max) <= best.area {
            break;
        }
    }
}

#[inline]
fn window(y_min: Coord, y_max: Coord) -> Area {
    Area::from(y_max) - Area::from(y_min)
}
