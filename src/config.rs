//! Scanner run configuration
//!
//! A [`RunConfig`] describes one animation run: how many full sweeps to
//! perform, how long to wait after every frame, how quickly the trail fades
//! and which color the head has. It is immutable for the duration of a run.

use core::fmt;

use embassy_time::Duration;

use crate::color::{Rgb, rgb_from_u32};
use crate::math8::steps_to_black;

const DEFAULT_CYCLES: u32 = 10;
const DEFAULT_SPEED_MS: u64 = 32;
const DEFAULT_WIDTH: u8 = 4;
const DEFAULT_COLOR: u32 = 0xFF_10_00;

/// Reasons a run configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Trail width of zero would divide by zero
    ZeroWidth,
    /// Trail width is negative or does not fit into a channel divisor
    WidthOutOfRange(i64),
    /// Negative number of cycles
    NegativeCycles(i64),
    /// Number of cycles does not fit into `u32`
    TooManyCycles(i64),
    /// Negative frame delay
    NegativeSpeed(i64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => f.write_str("trail width must be at least 1"),
            Self::WidthOutOfRange(width) => {
                write!(f, "trail width {width} is outside of 1..=255")
            }
            Self::NegativeCycles(cycles) => {
                write!(f, "cycles must not be negative, got {cycles}")
            }
            Self::TooManyCycles(cycles) => write!(f, "cycles {cycles} do not fit into u32"),
            Self::NegativeSpeed(speed) => {
                write!(f, "speed must not be negative, got {speed} ms")
            }
        }
    }
}

/// Configuration of a single scanner run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of full sweeps (forward pass + backward pass)
    pub cycles: u32,
    /// Delay applied after every frame
    pub speed: Duration,
    /// Trail width, the divisor applied to trailing pixels on every step
    pub width: u8,
    /// Color of the head pixel
    pub color: Rgb,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            speed: Duration::from_millis(DEFAULT_SPEED_MS),
            width: DEFAULT_WIDTH,
            color: rgb_from_u32(DEFAULT_COLOR),
        }
    }
}

impl RunConfig {
    /// Create a new run configuration
    ///
    /// The configuration is not validated here; the engine validates it
    /// before touching the device.
    pub const fn new(cycles: u32, speed: Duration, width: u8, color: Rgb) -> Self {
        Self {
            cycles,
            speed,
            width,
            color,
        }
    }

    /// Build a configuration from loosely typed values
    ///
    /// `color` is a packed 0xRRGGBB value.
    pub fn from_raw(
        cycles: i64,
        speed_ms: i64,
        width: i64,
        color: u32,
    ) -> Result<Self, ConfigError> {
        let cycles = u32::try_from(cycles).map_err(|_| {
            if cycles < 0 {
                ConfigError::NegativeCycles(cycles)
            } else {
                ConfigError::TooManyCycles(cycles)
            }
        })?;
        let speed_ms =
            u64::try_from(speed_ms).map_err(|_| ConfigError::NegativeSpeed(speed_ms))?;
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        let width = u8::try_from(width).map_err(|_| ConfigError::WidthOutOfRange(width))?;

        Ok(Self::new(
            cycles,
            Duration::from_millis(speed_ms),
            width,
            rgb_from_u32(color),
        ))
    }

    /// Set the number of cycles
    #[must_use]
    pub const fn with_cycles(mut self, cycles: u32) -> Self {
        self.cycles = cycles;
        self
    }

    /// Set the frame delay
    #[must_use]
    pub const fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    /// Set the trail width
    #[must_use]
    pub const fn with_width(mut self, width: u8) -> Self {
        self.width = width;
        self
    }

    /// Set the head color
    #[must_use]
    pub const fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Check that the configuration can be run
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        Ok(())
    }

    /// Number of lit pixels trailing the head once the trail has settled
    ///
    /// Returns `None` for a width of 1 (the trail never fades) or 0.
    pub const fn trail_length(&self) -> Option<u32> {
        let brightest = max3(self.color.r, self.color.g, self.color.b);
        match steps_to_black(brightest, self.width) {
            Some(steps) => Some(steps.saturating_sub(1)),
            None => None,
        }
    }
}

const fn max3(a: u8, b: u8, c: u8) -> u8 {
    let ab = if a > b { a } else { b };
    if ab > c { ab } else { c }
}
