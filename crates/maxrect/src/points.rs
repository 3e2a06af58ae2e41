//! Owned point buffers: the guarded input set and its sweep-ordered copy.
//!
//! `PointSet` always holds both guard bands (`x = -1` and `x = N`, every
//! `y in 0..N`). Every constructor checks this, and `SortedPoints` can only be
//! obtained from a `PointSet`, so the sweep never sees an unguarded set.

use crate::cfg::{GridCfg, MAX_GRID_SIZE};
use crate::error::{GuardSide, SolveError};
use crate::gen::squaring_obstacles;
use crate::point::{point_order, Coord, Point};

/// Input points in generation order: left band, obstacles, right band.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet {
    size: Coord,
    points: Vec<Point>,
}

impl PointSet {
    /// Reference set: `N` squaring-generator obstacles between the guard bands.
    pub fn generate(cfg: &GridCfg) -> Result<Self, SolveError> {
        cfg.validate()?;
        Self::with_obstacles(cfg.size, squaring_obstacles(cfg))
    }

    /// Guard bands around caller-supplied obstacles. Any count, duplicates allowed.
    pub fn with_obstacles(size: usize, obstacles: Vec<Point>) -> Result<Self, SolveError> {
        let n = grid_side(size)?;
        if let Some(&point) = obstacles.iter().find(|p| !in_grid(**p, n)) {
            return Err(SolveError::OutOfGrid { point, size: n });
        }
        let mut points = Vec::with_capacity(obstacles.len() + 2 * size);
        points.extend((0..n).map(|y| Point::new(-1, y)));
        points.extend(obstacles);
        points.extend((0..n).map(|y| Point::new(n, y)));
        Ok(Self { size: n, points })
    }

    /// Pre-assembled points in any order. Rejected unless both guard bands
    /// are complete.
    pub fn from_raw(size: usize, points: Vec<Point>) -> Result<Self, SolveError> {
        let n = grid_side(size)?;
        check_guard_bands(n, &points)?;
        Ok(Self { size: n, points })
    }

    #[inline]
    pub fn size(&self) -> Coord {
        self.size
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points strictly inside the grid columns `0..N`.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        let n = self.size;
        self.points.iter().copied().filter(move |p| (0..n).contains(&p.x))
    }

    /// Sorter: copy ordered by `point_order`. Duplicates are kept.
    pub fn sorted(&self) -> SortedPoints {
        let mut points = self.points.clone();
        points.sort_unstable_by(point_order);
        SortedPoints {
            size: self.size,
            points,
        }
    }
}

/// Points ascending by x, then y.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortedPoints {
    size: Coord,
    points: Vec<Point>,
}

impl SortedPoints {
    #[inline]
    pub fn size(&self) -> Coord {
        self.size
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Every point must lie in `[-1, N] × [0, N)` and both bands must cover
/// every row. Reports the lowest missing row, left band first.
pub fn check_guard_bands(size: Coord, points: &[Point]) -> Result<(), SolveError> {
    let rows = size as usize;
    let mut left = vec![false; rows];
    let mut right = vec![false; rows];
    for &p in points {
        if p.x < -1 || p.x > size || p.y < 0 || p.y >= size {
            return Err(SolveError::OutOfGrid { point: p, size });
        }
        if p.x == -1 {
            left[p.y as usize] = true;
        } else if p.x == size {
            right[p.y as usize] = true;
        }
    }
    for (side, band) in [(GuardSide::Left, &left), (GuardSide::Right, &right)] {
        if let Some(y) = band.iter().position(|seen| !seen) {
            return Err(SolveError::MissingGuardBand {
                side,
                y: y as Coord,
            });
        }
    }
    Ok(())
}

fn grid_side(size: usize) -> Result<Coord, SolveError> {
    if size == 0 {
        return Err(SolveError::invalid("grid size must be > 0"));
    }
    if size > MAX_GRID_SIZE {
        return Err(SolveError::invalid(format!(
            "grid size {size} exceeds {MAX_GRID_SIZE}"
        )));
    }
    Ok(size as Coord)
}

#[inline]
fn in_grid(p: Point, n: Coord) -> bool {
    (0..n).contains(&p.x) && (0..n).contains(&p.y)
}
