//! Exhaustive reference solver for small grids.
//!
//! Enumerates every integer left edge, right edge and top edge inside the
//! grid; the bottom edge is then forced by the nearest point in the column
//! band at or below the top. O(N³·M), so keep `N` around 50 or less.

use crate::point::{Area, Best, Coord, Rect};
use crate::points::PointSet;

pub fn brute_force(set: &PointSet) -> Best {
    let n = set.size();
    let obstacles: Vec<_> = set.obstacles().collect();
    let mut best = Best::default();
    for x0 in 0..n {
        for x1 in (x0 + 1)..=n {
            for y0 in 0..n {
                let y1 = obstacles
                    .iter()
                    .filter(|p| x0 <= p.x && p.x < x1 && p.y >= y0)
                    .map(|p| p.y)
                    .min()
                    .unwrap_or(n);
                if y1 > y0 {
                    best.offer(extent(x0, x1) * extent(y0, y1), Rect::new(x0, y0, x1, y1));
                }
            }
        }
    }
    best
}

#[inline]
fn extent(lo: Coord, hi: Coord) -> Area {
    Area::from(hi) - Area::from(lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    #[test]
    fn empty_grid_is_one_rectangle() {
        let set = PointSet::with_obstacles(5, vec![]).unwrap();
        let best = brute_force(&set);
        assert_eq!(best.area, 25);
        assert_eq!(best.rect, Some(Rect::new(0, 0, 5, 5)));
    }

    #[test]
    fn center_obstacle() {
        // 3x3 grid, blocked center: best is a 3x1 strip.
        let set = PointSet::with_obstacles(3, vec![Point::new(1, 1)]).unwrap();
        assert_eq!(brute_force(&set).area, 3);
    }

    #[test]
    fn full_grid_has_no_rectangle() {
        let all: Vec<Point> = (0..3)
            .flat_map(|x| (0..3).map(move |y| Point::new(x, y)))
            .collect();
        let set = PointSet::with_obstacles(3, all).unwrap();
        let best = brute_force(&set);
        assert_eq!(best.area, 0);
        assert!(best.rect.is_none());
    }
}
