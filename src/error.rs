use core::fmt;

use crate::config::ConfigError;

/// Errors surfaced by the scanner engine
///
/// `E` is the error type of the display device the engine drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerError<E> {
    /// The run configuration was rejected before any device I/O
    InvalidConfiguration(ConfigError),
    /// A pixel index fell outside of the strip, or the strip changed size
    /// while the engine was driving it
    OutOfRange { index: usize, pixel_count: usize },
    /// The strip is longer than the engine's trail capacity
    TooManyPixels { pixel_count: usize, capacity: usize },
    /// The display device failed
    Device(E),
}

impl<E> From<ConfigError> for ScannerError<E> {
    fn from(error: ConfigError) -> Self {
        Self::InvalidConfiguration(error)
    }
}

impl<E: fmt::Display> fmt::Display for ScannerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(error) => write!(f, "invalid configuration: {error}"),
            Self::OutOfRange { index, pixel_count } => {
                write!(f, "pixel {index} is out of range for {pixel_count} pixels")
            }
            Self::TooManyPixels {
                pixel_count,
                capacity,
            } => write!(
                f,
                "strip has {pixel_count} pixels, scanner capacity is {capacity}"
            ),
            Self::Device(error) => write!(f, "display device error: {error}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for ScannerError<E> {}
