//! Points, half-open rectangles and the best-rectangle accumulator.

use std::cmp::Ordering;
use std::fmt;

/// Grid coordinate. Covers `[-1, N]` for every supported grid size.
pub type Coord = i32;
/// Rectangle area; products of two grid extents.
pub type Area = i64;

/// Immutable obstacle or guard point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    #[inline]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Sweep order: x ascending, ties broken by y ascending.
#[inline]
pub fn point_order(a: &Point, b: &Point) -> Ordering {
    a.x.cmp(&b.x).then(a.y.cmp(&b.y))
}

impl Ord for Point {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        point_order(self, other)
    }
}

impl PartialOrd for Point {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Half-open rectangle `[x0, x1) × [y0, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: Coord,
    pub y0: Coord,
    pub x1: Coord,
    pub y1: Coord,
}

impl Rect {
    #[inline]
    pub const fn new(x0: Coord, y0: Coord, x1: Coord, y1: Coord) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[inline]
    pub fn width(&self) -> Area {
        Area::from(self.x1) - Area::from(self.x0)
    }

    #[inline]
    pub fn height(&self) -> Area {
        Area::from(self.y1) - Area::from(self.y0)
    }

    /// Zero for degenerate (or inverted) rectangles.
    #[inline]
    pub fn area(&self) -> Area {
        let (w, h) = (self.width(), self.height());
        if w <= 0 || h <= 0 {
            0
        } else {
            w * h
        }
    }

    /// `x0 <= p.x < x1 && y0 <= p.y < y1`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.x0 <= p.x && p.x < self.x1 && self.y0 <= p.y && p.y < self.y1
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {})",
            self.x0, self.x1, self.y0, self.y1
        )
    }
}

/// Largest rectangle seen so far. The area only ever grows.
///
/// `rect` stays `None` while no rectangle of positive area has been offered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Best {
    pub area: Area,
    pub rect: Option<Rect>,
}

impl Best {
    /// Record `rect` if its area is strictly larger than the current best.
    #[inline]
    pub fn offer(&mut self, area: Area, rect: Rect) -> bool {
        if area > self.area {
            self.area = area;
            self.rect = Some(rect);
            true
        } else {
            false
        }
    }

    /// Reduction step for partial sweeps. `self` must come from the lower
    /// left-edge range; it wins ties, which keeps the sequential answer.
    #[inline]
    pub fn merge(self, later: Best) -> Best {
        if later.area > self.area {
            later
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_open_containment() {
        let r = Rect::new(1, 2, 4, 5);
        assert!(r.contains(Point::new(1, 2)));
        assert!(r.contains(Point::new(3, 4)));
        assert!(!r.contains(Point::new(4, 3)));
        assert!(!r.contains(Point::new(2, 5)));
        assert!(!r.contains(Point::new(0, 3)));
        assert_eq!(r.area(), 9);
        assert_eq!(Rect::new(3, 0, 3, 7).area(), 0);
    }

    #[test]
    fn order_is_x_then_y() {
        let mut pts = vec![
            Point::new(2, 0),
            Point::new(-1, 5),
            Point::new(2, -1),
            Point::new(0, 0),
            Point::new(-1, 1),
        ];
        pts.sort_by(point_order);
        assert_eq!(
            pts,
            vec![
                Point::new(-1, 1),
                Point::new(-1, 5),
                Point::new(0, 0),
                Point::new(2, -1),
                Point::new(2, 0),
            ]
        );
    }

    #[test]
    fn best_is_monotone_and_merge_keeps_earlier_on_ties() {
        let mut b = Best::default();
        assert!(!b.offer(0, Rect::new(0, 0, 0, 0)));
        assert!(b.rect.is_none());
        assert!(b.offer(6, Rect::new(0, 0, 2, 3)));
        assert!(!b.offer(6, Rect::new(0, 0, 3, 2)));
        assert!(!b.offer(4, Rect::new(0, 0, 2, 2)));
        assert_eq!(b.rect, Some(Rect::new(0, 0, 2, 3)));

        let mut other = Best::default();
        other.offer(6, Rect::new(5, 5, 8, 7));
        assert_eq!(b.merge(other).rect, Some(Rect::new(0, 0, 2, 3)));
        assert_eq!(other.merge(b).rect, Some(Rect::new(5, 5, 8, 7)));
        let mut bigger = Best::default();
        bigger.offer(7, Rect::new(0, 0, 7, 1));
        assert_eq!(b.merge(bigger).area, 7);
    }
}
