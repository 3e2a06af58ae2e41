//! Error type shared by the point-set constructors, the validator and `solve`.

use crate::point::{Area, Coord, Point, Rect};
use std::fmt;

/// Which guard band a missing guard point belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardSide {
    /// Column `x = -1`.
    Left,
    /// Column `x = N`.
    Right,
}

impl fmt::Display for GuardSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardSide::Left => write!(f, "left"),
            GuardSide::Right => write!(f, "right"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// Configuration rejected before any point is generated.
    InvalidParams { reason: String },
    /// A point lies outside the grid plus guard columns.
    OutOfGrid { point: Point, size: Coord },
    /// A guard band lacks the point at height `y`.
    MissingGuardBand { side: GuardSide, y: Coord },
    /// The reported rectangle contains an input point. Always a sweep bug.
    InvariantViolation { index: usize, point: Point, rect: Rect },
    /// The recorded area disagrees with the recorded rectangle.
    AreaMismatch { area: Area, rect: Option<Rect> },
}

impl SolveError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    /// True for the variants that signal a defect in the engine rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::InvariantViolation { .. } | Self::AreaMismatch { .. }
        )
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid grid params: {reason}"),
            Self::OutOfGrid { point, size } => {
                write!(f, "point {point} lies outside the {size}x{size} grid")
            }
            Self::MissingGuardBand { side, y } => {
                write!(f, "{side} guard band is missing the point at y={y}")
            }
            Self::InvariantViolation { index, point, rect } => write!(
                f,
                "internal error: largest empty rectangle {rect} contains point #{index} {point}"
            ),
            Self::AreaMismatch { area, rect } => match rect {
                Some(r) => write!(
                    f,
                    "internal error: recorded area {area} but rectangle {r} has area {}",
                    r.area()
                ),
                None => write!(f, "internal error: recorded area {area} without a rectangle"),
            },
        }
    }
}

impl std::error::Error for SolveError {}
