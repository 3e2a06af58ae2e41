//! Largest empty axis-aligned rectangle on a bounded integer grid.
//!
//! Pipeline
//! - `gen` produces the obstacle set from a fixed squaring recurrence,
//!   `points` wraps it with the two guard bands and sorts it,
//!   `sweep` runs the left/right-edge sweep, `validate` re-checks the answer.
//! - `solve` chains the stages and times the sweep.
//!
//! Conventions
//! - Rectangles are half-open: `(x0, y0)` inclusive, `(x1, y1)` exclusive.
//! - Areas are `i64` so grids in the tens of thousands never overflow.

pub mod brute;
pub mod cfg;
pub mod error;
pub mod gen;
pub mod point;
pub mod points;
pub mod solve;
pub mod sweep;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{GridCfg, SolveCfg, SweepCfg, MAX_GRID_SIZE};
pub use error::{GuardSide, SolveError};
pub use point::{point_order, Area, Best, Coord, Point, Rect};
pub use points::{PointSet, SortedPoints};
pub use solve::{solve, solve_points, Solution};
pub use sweep::{sweep, sweep_parallel, sweep_range};
pub use validate::validate;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::brute::brute_force;
    pub use crate::gen::{uniform_obstacles, SquaringGen};
    pub use crate::{
        solve, solve_points, sweep, sweep_parallel, validate, Best, GridCfg, Point, PointSet,
        Rect, Solution, SolveCfg, SolveError, SortedPoints, SweepCfg,
    };
}
