//! Error types shared by the simulation and its host

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BallError {
    #[error("invalid decimal places ({0}), must be between 0 and 14")]
    InvalidDecimals(i32),

    #[error("value {0} is not a finite number")]
    NotFinite(f64),

    #[error("viewport {width}x{height} cannot hold a ball of radius {radius}")]
    ViewportTooSmall { width: f64, height: f64, radius: f64 },

    #[error("rendering surface is not initialized")]
    UninitializedSurface,
}

impl BallError {
    /// Caller passed a value the operation does not accept
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, BallError::UninitializedSurface)
    }
}

pub type Result<T> = std::result::Result<T, BallError>;
