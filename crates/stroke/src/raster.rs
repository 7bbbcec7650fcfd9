use lyon::math::{point, Box2D, Point};
use shared::{Height, LineWidth, Width};

use crate::geom::brush_span;

/// A grid of painted/unpainted pixels, row major, origin at the top left.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: Width,
    height: Height,
    pixels: Vec<bool>,
}

impl Raster {
    pub fn new(width: Width, height: Height) -> Self {
        let len = *width as usize * *height as usize;
        Raster {
            width,
            height,
            pixels: vec![false; len],
        }
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn height(&self) -> Height {
        self.height
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(*self.width) || y >= i64::from(*self.height) {
            return None;
        }
        Some(y as usize * *self.width as usize + x as usize)
    }

    /// `None` when `(x, y)` is outside the raster.
    pub fn get(&self, x: i64, y: i64) -> Option<bool> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Pixels outside the raster are ignored.
    pub fn paint(&mut self, x: i64, y: i64) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = true;
        }
    }

    /// The raster's area grown by `margin` on every side.
    pub fn bounds(&self, margin: f32) -> Box2D {
        Box2D::new(
            point(-margin, -margin),
            point(*self.width as f32 + margin, *self.height as f32 + margin),
        )
    }

    /// Paints the square brush of side `width` centred on `center`, clipped
    /// to the raster.
    pub fn paint_brush(&mut self, center: Point, width: LineWidth) {
        let (x0, x1) = brush_span(center.x, *width);
        let (y0, y1) = brush_span(center.y, *width);
        let (x0, x1) = (x0.max(0), x1.min(i64::from(*self.width)));
        let (y0, y1) = (y0.max(0), y1.min(i64::from(*self.height)));
        for y in y0..y1 {
            for x in x0..x1 {
                self.paint(x, y);
            }
        }
    }

    pub fn painted_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    pub fn row(&self, y: u32) -> Option<&[bool]> {
        if y >= *self.height {
            return None;
        }
        let w = *self.width as usize;
        let start = y as usize * w;
        Some(&self.pixels[start..start + w])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (0..*self.height).filter_map(move |y| self.row(y))
    }

    /// `#` for painted pixels, `.` otherwise, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.pixels.len() + *self.height as usize);
        for row in self.rows() {
            out.extend(row.iter().map(|&p| if p { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}
