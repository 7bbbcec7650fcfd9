use anyhow::{Ok, Result};
use lyon::geom::LineSegment;
use lyon::math::{Box2D, Point};
use lyon::path::iterator::PathIterator;
use lyon::path::{Path, PathEvent};
use strum_macros::Display;
use thiserror::Error;

use crate::geom::{clip_line, point_along, segment_length};

#[derive(Error, Debug)]
pub enum ContourError {
    #[error("invalid contour transition: tried to go from {0} to {1}")]
    StateTransition(String, &'static str),
    #[error("path ended while a contour was still open")]
    Unterminated,
}

/// Polyline of one sub-path, in drawing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    segments: Vec<LineSegment<f32>>,
    length: f32,
}

impl Contour {
    fn push(&mut self, from: Point, to: Point) {
        let line = LineSegment { from, to };
        let length = segment_length(&line);
        if length > 0.0 {
            self.length += length;
            self.segments.push(line);
        }
    }

    pub fn segments(&self) -> &[LineSegment<f32>] {
        &self.segments
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn sampler(&self) -> Sampler<'_> {
        Sampler {
            contour: self,
            segment: 0,
            start: 0.0,
        }
    }

    pub fn point_at(&self, distance: f32) -> Option<Point> {
        self.sampler().sample(distance)
    }

    /// Distance ranges `[start, end]` along the contour that lie inside
    /// `bounds`, in order, one per visible segment.
    pub fn visible_ranges(&self, bounds: &Box2D) -> Vec<(f32, f32)> {
        let mut ranges = Vec::new();
        let mut start = 0.0;
        for line in &self.segments {
            let length = segment_length(line);
            if let Some((t0, t1)) = clip_line(line, bounds) {
                ranges.push((start + t0 * length, start + t1 * length));
            }
            start += length;
        }
        ranges
    }
}

/// Looks up points along a contour for non-decreasing distances without
/// rescanning from the first segment.
#[derive(Debug, Clone)]
pub struct Sampler<'a> {
    contour: &'a Contour,
    segment: usize,
    start: f32,
}

impl Sampler<'_> {
    pub fn sample(&mut self, distance: f32) -> Option<Point> {
        let segments = &self.contour.segments;
        let last = segments.len().checked_sub(1)?;
        while self.segment < last {
            let length = segment_length(&segments[self.segment]);
            if distance < self.start + length {
                break;
            }
            self.start += length;
            self.segment += 1;
        }
        Some(point_along(&segments[self.segment], distance - self.start))
    }
}

#[derive(Debug, Display)]
enum State {
    Inactive,
    Open(Contour),
}

impl Default for State {
    fn default() -> Self {
        State::Inactive
    }
}

/// Groups flattened path events into contours.
#[derive(Debug, Default)]
struct ContourBuilder {
    state: State,
    finished: Vec<Contour>,
}

impl ContourBuilder {
    fn begin(&mut self) -> Result<()> {
        match &self.state {
            State::Inactive => {
                self.state = State::Open(Contour::default());
                Ok(())
            }
            other => Err(ContourError::StateTransition(other.to_string(), "Open").into()),
        }
    }

    fn line_to(&mut self, from: Point, to: Point) -> Result<()> {
        match &mut self.state {
            State::Open(contour) => {
                contour.push(from, to);
                Ok(())
            }
            other => Err(ContourError::StateTransition(other.to_string(), "Open").into()),
        }
    }

    fn end(&mut self, last: Point, first: Point, close: bool) -> Result<()> {
        match std::mem::take(&mut self.state) {
            State::Open(mut contour) => {
                if close {
                    contour.push(last, first);
                }
                self.finished.push(contour);
                Ok(())
            }
            other => Err(ContourError::StateTransition(other.to_string(), "Inactive").into()),
        }
    }

    fn build(self) -> Result<Vec<Contour>> {
        match self.state {
            State::Inactive => Ok(self.finished),
            State::Open(_) => Err(ContourError::Unterminated.into()),
        }
    }
}

/// Flattens `path` with `tolerance` and splits it into contours, one per
/// sub-path. Curves become line segments.
pub fn contours(path: &Path, tolerance: f32) -> Result<Vec<Contour>> {
    let mut builder = ContourBuilder::default();
    for event in path.iter().flattened(tolerance) {
        match event {
            PathEvent::Begin { .. } => builder.begin()?,
            PathEvent::Line { from, to } => builder.line_to(from, to)?,
            PathEvent::Quadratic { from, to, .. } | PathEvent::Cubic { from, to, .. } => {
                builder.line_to(from, to)?
            }
            PathEvent::End { last, first, close } => builder.end(last, first, close)?,
        }
    }
    builder.build()
}

#[cfg(test)]
mod test {
    use super::contours;
    use approx::assert_relative_eq;
    use lyon::math::{point, Box2D};
    use lyon::path::Path;

    #[test]
    fn splits_sub_paths() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(10.0, 0.0));
        builder.end(false);
        builder.begin(point(0.0, 5.0));
        builder.line_to(point(0.0, 8.0));
        builder.line_to(point(4.0, 8.0));
        builder.end(false);
        let path = builder.build();

        let contours = contours(&path, 0.1).unwrap();
        assert_eq!(contours.len(), 2);
        assert_relative_eq!(contours[0].length(), 10.0);
        assert_relative_eq!(contours[1].length(), 7.0);
        assert_eq!(contours[1].segments().len(), 2);
    }

    #[test]
    fn closing_adds_segment() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(3.0, 0.0));
        builder.line_to(point(3.0, 4.0));
        builder.end(true);
        let path = builder.build();

        let contours = contours(&path, 0.1).unwrap();
        assert_eq!(contours.len(), 1);
        assert_relative_eq!(contours[0].length(), 12.0);
    }

    #[test]
    fn curves_are_flattened() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.quadratic_bezier_to(point(5.0, 10.0), point(10.0, 0.0));
        builder.end(false);
        let path = builder.build();

        let contours = contours(&path, 0.01).unwrap();
        assert!(contours[0].segments().len() > 1);
        // Longer than the chord, shorter than the control polygon.
        assert!(contours[0].length() > 10.0);
        assert!(contours[0].length() < 2.0 * 125.0_f32.sqrt());
    }

    #[test]
    fn sampler_crosses_segments() {
        let mut builder = Path::builder();
        builder.begin(point(0.0, 0.0));
        builder.line_to(point(4.0, 0.0));
        builder.line_to(point(4.0, 4.0));
        builder.end(false);
        let path = builder.build();
        let contours = contours(&path, 0.1).unwrap();

        let mut sampler = contours[0].sampler();
        let a = sampler.sample(1.0).unwrap();
        let b = sampler.sample(5.5).unwrap();
        let c = sampler.sample(100.0).unwrap();
        assert_relative_eq!(a.x, 1.0);
        assert_relative_eq!(b.x, 4.0);
        assert_relative_eq!(b.y, 1.5);
        assert_relative_eq!(c.y, 4.0);
    }

    #[test]
    fn visible_ranges_follow_bounds() {
        let mut builder = Path::builder();
        builder.begin(point(-10.0, 1.0));
        builder.line_to(point(10.0, 1.0));
        builder.line_to(point(10.0, 50.0));
        builder.line_to(point(2.0, 50.0));
        builder.line_to(point(2.0, -20.0));
        builder.end(false);
        let path = builder.build();
        let contours = contours(&path, 0.1).unwrap();

        let bounds = Box2D::new(point(0.0, 0.0), point(4.0, 4.0));
        let ranges = contours[0].visible_ranges(&bounds);
        assert_eq!(ranges.len(), 2);
        assert_relative_eq!(ranges[0].0, 10.0, epsilon = 1e-3);
        assert_relative_eq!(ranges[0].1, 14.0, epsilon = 1e-3);
        // Down from y = 50 through the box at x = 2.
        assert_relative_eq!(ranges[1].0, 20.0 + 49.0 + 8.0 + 46.0, epsilon = 1e-3);
        assert_relative_eq!(ranges[1].1, 20.0 + 49.0 + 8.0 + 50.0, epsilon = 1e-3);
    }

    #[test]
    fn zero_length_contour_is_empty() {
        let mut builder = Path::builder();
        builder.begin(point(2.0, 2.0));
        builder.end(false);
        let path = builder.build();

        let contours = contours(&path, 0.1).unwrap();
        assert_eq!(contours.len(), 1);
        assert!(contours[0].is_empty());
        assert!(contours[0].point_at(0.0).is_none());
    }
}
