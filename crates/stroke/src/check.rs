//! Pixel-walk verification of dashed strokes: step along a run of pixels and
//! compare each one with what a fresh [`DashCursor`] says about that unit.

use shared::{DashCursor, DashPattern, DashSegment};
use thiserror::Error;

use crate::raster::Raster;

#[derive(Error, Debug, PartialEq)]
pub enum CheckError {
    #[error("pixel ({x}, {y}) should be {expected:?} but painted was {actual}")]
    Mismatch {
        x: i64,
        y: i64,
        expected: DashSegment,
        actual: bool,
    },
    #[error("pixel ({x}, {y}) is outside the raster")]
    OutOfBounds { x: i64, y: i64 },
}

/// The first `count` units of `pattern` starting `phase` units in.
pub fn expected_run(pattern: &DashPattern, phase: usize, count: usize) -> Vec<DashSegment> {
    DashCursor::new(pattern, phase).take(count).collect()
}

/// Walks `count` pixels from `start`, moving by `step` each time, and fails
/// on the first pixel whose painted state disagrees with the dash pattern.
pub fn verify_run(
    raster: &Raster,
    start: (i64, i64),
    step: (i64, i64),
    count: usize,
    pattern: &DashPattern,
    phase: usize,
) -> Result<(), CheckError> {
    let (mut x, mut y) = start;
    for expected in DashCursor::new(pattern, phase).take(count) {
        let actual = raster.get(x, y).ok_or(CheckError::OutOfBounds { x, y })?;
        if actual != expected.is_paint() {
            return Err(CheckError::Mismatch {
                x,
                y,
                expected,
                actual,
            });
        }
        x += step.0;
        y += step.1;
    }
    Ok(())
}
