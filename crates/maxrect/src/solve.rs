//! End-to-end pipeline: generate → sort → sweep (timed) → validate.

use crate::cfg::{SolveCfg, SweepCfg};
use crate::error::SolveError;
use crate::point::{Area, Best, Coord, Rect};
use crate::points::PointSet;
use crate::sweep::{sweep, sweep_parallel};
use crate::validate::validate;
use std::fmt;
use std::time::{Duration, Instant};

/// Validated answer plus the wall-clock time of the sweep alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solution {
    pub size: Coord,
    pub area: Area,
    /// `None` iff `area == 0`.
    pub rect: Option<Rect>,
    pub elapsed: Duration,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.elapsed.as_secs_f64() * 1e3;
        match self.rect {
            Some(r) => write!(
                f,
                "Best area: {}, ul={}x{}, br={}x{}, w*h={}x{}. Calculated in {ms:.3} msecs.",
                self.area,
                r.x0,
                r.y0,
                r.x1,
                r.y1,
                r.width(),
                r.height()
            ),
            None => write!(
                f,
                "Best area: 0, no empty rectangle. Calculated in {ms:.3} msecs."
            ),
        }
    }
}

/// Solve the reference point set described by `cfg.grid`.
pub fn solve(cfg: &SolveCfg) -> Result<Solution, SolveError> {
    let set = PointSet::generate(&cfg.grid)?;
    tracing::debug!(
        size = cfg.grid.size,
        points = set.len(),
        "generated point set"
    );
    solve_points(&set, cfg.sweep, cfg.parallel)
}

/// Solve a caller-supplied (already guarded) point set.
pub fn solve_points(
    set: &PointSet,
    sweep_cfg: SweepCfg,
    parallel: bool,
) -> Result<Solution, SolveError> {
    let sorted = set.sorted();
    let start = Instant::now();
    let best: Best = if parallel {
        sweep_parallel(&sorted, sweep_cfg)
    } else {
        sweep(&sorted, sweep_cfg)
    };
    let elapsed = start.elapsed();
    tracing::debug!(
        area = best.area,
        rect = ?best.rect,
        prune = sweep_cfg.prune,
        parallel,
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        "sweep finished"
    );
    validate(set, &best)?;
    Ok(Solution {
        size: set.size(),
        area: best.area,
        rect: best.rect,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::GridCfg;
    use crate::point::Point;

    #[test]
    fn solve_reports_validated_answer() {
        let cfg = SolveCfg {
            grid: GridCfg::with_size(100),
            ..SolveCfg::default()
        };
        let sol = solve(&cfg).unwrap();
        assert_eq!(sol.size, 100);
        assert_eq!(sol.area, 704);
        assert_eq!(sol.rect, Some(Rect::new(11, 47, 99, 55)));
        let line = sol.to_string();
        assert!(line.starts_with("Best area: 704, ul=11x47, br=99x55, w*h=88x8."));
    }

    #[test]
    fn parallel_and_unpruned_agree() {
        let grid = GridCfg::with_size(300);
        let base = solve(&SolveCfg {
            grid,
            ..SolveCfg::default()
        })
        .unwrap();
        for (prune, parallel) in [(false, false), (true, true), (false, true)] {
            let sol = solve(&SolveCfg {
                grid,
                sweep: SweepCfg { prune },
                parallel,
            })
            .unwrap();
            assert_eq!((sol.area, sol.rect), (base.area, base.rect));
        }
    }

    #[test]
    fn precondition_errors_surface_before_sweep() {
        let err = solve(&SolveCfg {
            grid: GridCfg::with_size(0),
            ..SolveCfg::default()
        })
        .unwrap_err();
        assert!(matches!(err, SolveError::InvalidParams { .. }));
        assert!(!err.is_internal());
    }

    #[test]
    fn no_room_reports_zero() {
        let set = PointSet::with_obstacles(1, vec![Point::new(0, 0)]).unwrap();
        let sol = solve_points(&set, SweepCfg::default(), false).unwrap();
        assert_eq!(sol.area, 0);
        assert!(sol.rect.is_none());
        assert!(sol.to_string().starts_with("Best area: 0, no empty rectangle."));
    }
}
