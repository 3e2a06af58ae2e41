//! Run configuration: grid scale, generator constants and sweep switches.

use crate::error::SolveError;

/// Largest accepted grid side. Keeps `N` and `N + 1` inside `Coord` with room
/// to spare and bounds the `3N` point buffer.
pub const MAX_GRID_SIZE: usize = 1 << 24;

/// Grid size and the squaring recurrence `state = state² mod modulus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCfg {
    pub size: usize,
    pub seed: u64,
    pub modulus: u64,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            size: 10_000,
            seed: 289_991,
            modulus: 45_985_633,
        }
    }
}

impl GridCfg {
    /// Default generator constants with a different grid side.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SolveError> {
        if self.size == 0 {
            return Err(SolveError::invalid("grid size must be > 0"));
        }
        if self.size > MAX_GRID_SIZE {
            return Err(SolveError::invalid(format!(
                "grid size {} exceeds {MAX_GRID_SIZE}",
                self.size
            )));
        }
        if self.modulus < 2 {
            return Err(SolveError::invalid("modulus must be >= 2"));
        }
        // state < modulus, so state² must fit in u64.
        if self.modulus > 1 << 32 {
            return Err(SolveError::invalid("modulus must be <= 2^32"));
        }
        Ok(())
    }
}

/// Sweep switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepCfg {
    /// Abandon a left edge once even a full-width extension cannot beat the best.
    /// Turning this off changes runtime only, never the answer.
    pub prune: bool,
}

impl Default for SweepCfg {
    fn default() -> Self {
        Self { prune: true }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveCfg {
    pub grid: GridCfg,
    pub sweep: SweepCfg,
    /// Split the left-edge range across rayon workers.
    pub parallel: bool,
}
