//! Serializable run parameters and results written by `cli run --out`.

use maxrect::{Area, Coord, Rect, Solution, SolveCfg};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunParams {
    pub size: usize,
    pub seed: u64,
    pub modulus: u64,
    pub prune: bool,
    pub parallel: bool,
}

impl From<&SolveCfg> for RunParams {
    fn from(cfg: &SolveCfg) -> Self {
        Self {
            size: cfg.grid.size,
            seed: cfg.grid.seed,
            modulus: cfg.grid.modulus,
            prune: cfg.sweep.prune,
            parallel: cfg.parallel,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RectRecord {
    pub x0: Coord,
    pub y0: Coord,
    pub x1: Coord,
    pub y1: Coord,
    pub width: Area,
    pub height: Area,
}

impl From<Rect> for RectRecord {
    fn from(r: Rect) -> Self {
        Self {
            x0: r.x0,
            y0: r.y0,
            x1: r.x1,
            y1: r.y1,
            width: r.width(),
            height: r.height(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunRecord {
    pub params: RunParams,
    pub area: Area,
    pub rect: Option<RectRecord>,
    pub elapsed_ms: f64,
}

impl RunRecord {
    pub fn new(cfg: &SolveCfg, sol: &Solution) -> Self {
        Self {
            params: cfg.into(),
            area: sol.area,
            rect: sol.rect.map(RectRecord::from),
            elapsed_ms: sol.elapsed.as_secs_f64() * 1e3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maxrect::GridCfg;
    use std::time::Duration;

    #[test]
    fn record_serializes_corners_and_extent() {
        let cfg = SolveCfg {
            grid: GridCfg::with_size(100),
            ..SolveCfg::default()
        };
        let sol = Solution {
            size: 100,
            area: 704,
            rect: Some(Rect::new(11, 47, 99, 55)),
            elapsed: Duration::from_millis(3),
        };
        let v = serde_json::to_value(RunRecord::new(&cfg, &sol)).unwrap();
        assert_eq!(v["area"], 704);
        assert_eq!(v["rect"]["x0"], 11);
        assert_eq!(v["rect"]["width"], 88);
        assert_eq!(v["rect"]["height"], 8);
        assert_eq!(v["params"]["seed"], 289_991);
        assert_eq!(v["params"]["prune"], true);
        assert!((v["elapsed_ms"].as_f64().unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_answer_has_null_rect() {
        let cfg = SolveCfg::default();
        let sol = Solution {
            size: 1,
            area: 0,
            rect: None,
            elapsed: Duration::ZERO,
        };
        let v = serde_json::to_value(RunRecord::new(&cfg, &sol)).unwrap();
        assert!(v["rect"].is_null());
    }
}
