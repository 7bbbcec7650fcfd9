use anyhow::{Ok, Result};
use derive_more::{Add, AddAssign};
use log::{debug, trace, warn};
use lyon::path::Path;
use shared::{DashPattern, DashSegment, LineWidth};
use thiserror::Error;

use crate::contour::{contours, Contour};
use crate::raster::Raster;

#[derive(Error, Debug)]
pub enum StrokeError {
    #[error("flattening tolerance must be positive and finite but was {0}")]
    InvalidTolerance(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeOptions {
    pub line_width: LineWidth,
    /// `None` strokes a solid line.
    pub dash: Option<DashPattern>,
    pub tolerance: f32,
}

impl Default for StrokeOptions {
    fn default() -> Self {
        StrokeOptions {
            line_width: LineWidth::default(),
            dash: None,
            tolerance: 0.1,
        }
    }
}

impl StrokeOptions {
    pub fn with_dash(mut self, dash: DashPattern) -> Self {
        self.dash = Some(dash);
        self
    }

    pub fn with_line_width(mut self, line_width: LineWidth) -> Self {
        self.line_width.set(line_width);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Units of path length seen while stroking. `painted` and `skipped` count
/// units walked on the raster; `clipped` counts units that could not reach
/// it and only moved the dash cursor.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Add, AddAssign)]
pub struct StrokeStats {
    pub contours: usize,
    pub painted: u64,
    pub skipped: u64,
    pub clipped: u64,
}

/// Strokes every contour of `path` into `raster`, one unit of length at a
/// time.
///
/// Each contour gets its own dash cursor, so the pattern restarts at the
/// pattern's phase for every sub-path. Unit `s` is drawn at distance
/// `s + 0.5` along the contour (clamped to its end) when the cursor reports
/// paint for it. Units whose brush cannot touch the raster are not sampled,
/// but the cursor still steps over them.
pub fn stroke_path(raster: &mut Raster, path: &Path, options: &StrokeOptions) -> Result<StrokeStats> {
    if !options.tolerance.is_finite() || options.tolerance <= 0.0 {
        return Err(StrokeError::InvalidTolerance(options.tolerance).into());
    }

    let mut stats = StrokeStats::default();
    for (i, contour) in contours(path, options.tolerance)?.iter().enumerate() {
        let contour_stats = stroke_contour(raster, contour, options);
        debug!(
            "contour {}: length {:.2}, {} painted, {} skipped, {} clipped",
            i,
            contour.length(),
            contour_stats.painted,
            contour_stats.skipped,
            contour_stats.clipped
        );
        stats += contour_stats;
    }
    Ok(stats)
}

fn stroke_contour(raster: &mut Raster, contour: &Contour, options: &StrokeOptions) -> StrokeStats {
    let mut stats = StrokeStats {
        contours: 1,
        ..StrokeStats::default()
    };
    let length = contour.length();
    if contour.is_empty() {
        warn!("skipping zero-length contour");
        return stats;
    }

    let mut cursor = options.dash.as_ref().map(DashPattern::cursor);
    let mut sampler = contour.sampler();
    let steps = length.ceil() as u64;
    // Brush reach (at least the one pixel a thin brush paints) plus a pixel
    // of slack for rounding.
    let bounds = raster.bounds(options.line_width.half().max(0.5) + 1.0);

    let mut next = 0;
    for (start, end) in contour.visible_ranges(&bounds) {
        // Unit `s` is sampled at `s + 0.5`, and the tail units clamp to the
        // contour's end.
        let first = ((start - 0.5).ceil().max(0.0) as u64).max(next);
        let last = if end >= length {
            steps
        } else {
            (((end - 0.5).floor() + 1.0).max(0.0) as u64).min(steps)
        };
        if first >= last {
            continue;
        }

        if let Some(c) = cursor.as_mut() {
            c.skip(first - next);
        }
        stats.clipped += first - next;
        trace!("walking units {}..{}", first, last);

        for step in first..last {
            let segment = match cursor.as_mut() {
                Some(c) => c.advance(),
                None => DashSegment::Paint,
            };
            if segment.is_gap() {
                stats.skipped += 1;
                continue;
            }
            let distance = (step as f32 + 0.5).min(length);
            if let Some(center) = sampler.sample(distance) {
                raster.paint_brush(center, options.line_width);
                stats.painted += 1;
            }
        }
        next = last;
    }
    stats.clipped += steps - next;
    stats
}
