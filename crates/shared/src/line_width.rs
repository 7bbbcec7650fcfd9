use derive_more::{Deref, Display, Into};

use crate::NumberError;

/// Width of the square brush painted at every stroked unit.
#[derive(Debug, Copy, Clone, Display, Into, PartialEq, PartialOrd, Deref)]
pub struct LineWidth(f32);

impl LineWidth {
    pub fn try_new(v: f32) -> Result<Self, NumberError> {
        if !v.is_finite() {
            return Err(NumberError::InvalidNumberConversion(v));
        }
        if v <= 0.0 {
            return Err(NumberError::NotPositive(v));
        }
        Ok(LineWidth(v))
    }

    pub fn set(&mut self, v: LineWidth) {
        self.0 = *v;
    }

    pub fn half(self) -> f32 {
        self.0 / 2.0
    }
}

impl Default for LineWidth {
    fn default() -> Self {
        LineWidth(1.0)
    }
}

#[cfg(test)]
mod test {
    use super::LineWidth;
    use crate::NumberError;
    use approx::assert_relative_eq;

    #[test]
    fn default_is_one() {
        assert_relative_eq!(*LineWidth::default(), 1.0);
    }

    #[test]
    fn half() {
        let w = LineWidth::try_new(3.0).unwrap();
        assert_relative_eq!(w.half(), 1.5);
    }

    #[test]
    fn set_replaces_value() {
        let mut w = LineWidth::default();
        w.set(LineWidth::try_new(2.5).unwrap());
        assert_relative_eq!(*w, 2.5);
    }

    #[test]
    fn rejects_non_positive() {
        assert_eq!(LineWidth::try_new(0.0), Err(NumberError::NotPositive(0.0)));
        assert_eq!(LineWidth::try_new(-1.0), Err(NumberError::NotPositive(-1.0)));
        assert!(matches!(
            LineWidth::try_new(f32::NAN),
            Err(NumberError::InvalidNumberConversion(_))
        ));
    }
}
