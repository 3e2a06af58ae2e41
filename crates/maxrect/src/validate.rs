//! Post-sweep self-check: the reported rectangle must contain no input point.
//!
//! A failure here is a defect in the sweep, never a data problem. The error
//! names the offending point and rectangle and is not meant to be retried.

use crate::error::SolveError;
use crate::point::Best;
use crate::points::PointSet;

/// Rescan the unsorted input against `best`.
pub fn validate(set: &PointSet, best: &Best) -> Result<(), SolveError> {
    let expected = best.rect.map_or(0, |r| r.area());
    if expected != best.area || (best.rect.is_some() && best.area <= 0) {
        tracing::error!(area = best.area, rect = ?best.rect, "area does not match rectangle");
        return Err(SolveError::AreaMismatch {
            area: best.area,
            rect: best.rect,
        });
    }
    let Some(rect) = best.rect else {
        return Ok(());
    };
    match set.points().iter().position(|p| rect.contains(*p)) {
        Some(index) => {
            let point = set.points()[index];
            tracing::error!(index, %point, %rect, "empty rectangle contains a point");
            Err(SolveError::InvariantViolation { index, point, rect })
        }
        None => Ok(()),
    }
}
