use lyon::geom::{LineSegment, Point as SPoint, Scalar};
use lyon::math::Box2D;

#[inline]
pub fn get_pythagorean_hypotenuse<S: Scalar>(p1: SPoint<S>, p2: SPoint<S>) -> S {
    let a_squared = (p1.y - p2.y).abs().powi(2);
    let b_squared = (p1.x - p2.x).abs().powi(2);
    let c_squared = a_squared + b_squared;
    c_squared.sqrt()
}

#[inline]
pub fn segment_length<S: Scalar>(line: &LineSegment<S>) -> S {
    get_pythagorean_hypotenuse(line.from, line.to)
}

/// Point `distance` units from `line.from` towards `line.to`, clamped to the
/// segment.
pub fn point_along<S: Scalar>(line: &LineSegment<S>, distance: S) -> SPoint<S> {
    let length = segment_length(line);
    if length <= S::ZERO {
        return line.from;
    }
    let t = (distance / length).max(S::ZERO).min(S::ONE);
    line.sample(t)
}

/// Half-open pixel span `[start, end)` covered by a brush of `width`
/// centred on `center`. Always at least one pixel wide.
pub fn brush_span(center: f32, width: f32) -> (i64, i64) {
    let half = width / 2.0;
    let start = (center - half).round() as i64;
    let end = (center + half).round() as i64;
    if end <= start {
        (start, start + 1)
    } else {
        (start, end)
    }
}

/// Parameter range `[t0, t1]` of `line` that lies inside `bounds`, found
/// with Liang-Barsky clipping. `None` when the line misses the box.
pub fn clip_line(line: &LineSegment<f32>, bounds: &Box2D) -> Option<(f32, f32)> {
    let d = line.to - line.from;
    let edges = [
        (-d.x, line.from.x - bounds.min.x),
        (d.x, bounds.max.x - line.from.x),
        (-d.y, line.from.y - bounds.min.y),
        (d.y, bounds.max.y - line.from.y),
    ];

    let mut t0 = 0.0_f32;
    let mut t1 = 1.0_f32;
    for &(p, q) in &edges {
        if p == 0.0 {
            // Parallel to this edge: either fully inside it or fully outside.
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((t0, t1))
}
