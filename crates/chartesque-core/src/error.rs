// File: crates/chartesque-core/src/error.rs
// Summary: Error taxonomy for chart configuration and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Axis limits must be finite with `min < max`.
    #[error("invalid axis limits: min {min} must be less than max {max}")]
    InvalidLimits { min: f64, max: f64 },

    /// `data_x` and `data_y` must be parallel.
    #[error("data length mismatch: {x_len} x values vs {y_len} y values")]
    DataLengthMismatch { x_len: usize, y_len: usize },

    #[error("invalid chart size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("invalid label font size {0}")]
    InvalidFontSize(f64),

    /// Tick density factors must be finite and positive.
    #[error("invalid tick density: vertical divisor {vertical_divisor}, horizontal font factor {horizontal_font_factor}")]
    InvalidDensity { vertical_divisor: f64, horizontal_font_factor: f64 },

    /// The drawing surface or output target could not be created.
    #[error("surface unavailable: {0}")]
    Surface(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChartError {
    /// True for errors raised by validation, before any drawing happens.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidLimits { .. }
                | Self::DataLengthMismatch { .. }
                | Self::InvalidSize { .. }
                | Self::InvalidFontSize(_)
                | Self::InvalidDensity { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
