use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumberError {
    #[error("invalid number conversion from {0}")]
    InvalidNumberConversion(f32),
    #[error("expected a positive number but got {0}")]
    NotPositive(f32),
}
