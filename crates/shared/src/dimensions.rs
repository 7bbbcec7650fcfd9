use derive_more::{Deref, Display, From, Into};
use std::convert::TryFrom;

use crate::NumberError;

/// Raster width in whole pixels.
#[derive(Debug, Copy, Clone, Display, From, Into, PartialEq, Eq, Deref)]
pub struct Width(u32);

impl Width {
    pub fn new(v: u32) -> Self {
        Width(v)
    }
}

impl TryFrom<f32> for Width {
    type Error = NumberError;

    fn try_from(v: f32) -> Result<Self, Self::Error> {
        to_pixels(v).map(Width)
    }
}

/// Raster height in whole pixels.
#[derive(Debug, Copy, Clone, Display, From, Into, PartialEq, Eq, Deref)]
pub struct Height(u32);

impl Height {
    pub fn new(v: u32) -> Self {
        Height(v)
    }
}

impl TryFrom<f32> for Height {
    type Error = NumberError;

    fn try_from(v: f32) -> Result<Self, Self::Error> {
        to_pixels(v).map(Height)
    }
}

fn to_pixels(v: f32) -> Result<u32, NumberError> {
    if !v.is_finite() || v < 0.0 || v > u32::MAX as f32 {
        return Err(NumberError::InvalidNumberConversion(v));
    }
    Ok(v.ceil() as u32)
}
