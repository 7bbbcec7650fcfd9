//! Simulates stroking paths with a dash pattern on a pixel grid: each unit of
//! path length asks a [`shared::DashCursor`] whether it is painted.

mod contour;
mod geom;
mod raster;
mod stroker;

pub mod check;

pub use crate::contour::{contours, Contour, ContourError, Sampler};
pub use crate::raster::Raster;
pub use crate::stroker::{stroke_path, StrokeError, StrokeOptions, StrokeStats};
pub use shared::{DashCursor, DashError, DashPattern, DashSegment, Height, LineWidth, Width};
