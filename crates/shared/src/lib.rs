//! 1. Only put small concepts here. Nothing major
//! 2. This crate *must* have no dependencies on other local crates in the project

mod dash;
mod dimensions;
mod error;
mod line_width;

pub use dash::{DashCursor, DashError, DashPattern, DashSegment};
pub use dimensions::{Height, Width};
pub use error::NumberError;
pub use line_width::LineWidth;
