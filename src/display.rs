//! Display device contract
//!
//! The scanner engine never talks to hardware directly. It stages pixel
//! colors and presents frames through [`DisplayDevice`]. [`StripDisplay`]
//! implements the contract on top of any [`OutputDriver`].

use core::fmt;

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};

/// A strip of individually addressable pixels
pub trait DisplayDevice {
    /// Error reported by the device
    type Error;

    /// Number of pixels in the strip
    fn pixel_count(&self) -> usize;

    /// Stage a color for the pixel at `index`
    ///
    /// The color becomes visible on the next [`DisplayDevice::show`].
    fn set_pixel_color(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error>;

    /// Push the staged pixels out to the strip
    fn show(&mut self) -> Result<(), Self::Error>;

    /// Turn every pixel off and present the frame
    fn clear(&mut self) -> Result<(), Self::Error> {
        for index in 0..self.pixel_count() {
            self.set_pixel_color(index, BLACK)?;
        }
        self.show()
    }
}

/// Errors reported by [`StripDisplay`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError<E> {
    /// Pixel index is outside of the strip
    OutOfRange { index: usize, pixel_count: usize },
    /// The output driver failed to write the frame
    Output(E),
}

impl<E: fmt::Display> fmt::Display for DisplayError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, pixel_count } => {
                write!(f, "pixel {index} is out of range for {pixel_count} pixels")
            }
            Self::Output(error) => write!(f, "output driver error: {error}"),
        }
    }
}

/// Display device backed by a frame buffer and an output driver
///
/// Pixel colors are staged in the buffer and written to the driver as one
/// frame on [`DisplayDevice::show`].
pub struct StripDisplay<O: OutputDriver, const MAX_LEDS: usize> {
    output: O,
    frame_buffer: [Rgb; MAX_LEDS],
    pixel_count: usize,
}

impl<O: OutputDriver, const MAX_LEDS: usize> StripDisplay<O, MAX_LEDS> {
    /// Create a new strip display
    ///
    /// `pixel_count` is clamped to `MAX_LEDS`.
    pub fn new(output: O, pixel_count: usize) -> Self {
        Self {
            output,
            frame_buffer: [BLACK; MAX_LEDS],
            pixel_count: pixel_count.min(MAX_LEDS),
        }
    }

    /// Currently staged frame
    pub fn pixels(&self) -> &[Rgb] {
        &self.frame_buffer[..self.pixel_count]
    }

    /// Get a reference to the output driver
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Release the output driver
    pub fn into_output(self) -> O {
        self.output
    }
}

impl<O: OutputDriver, const MAX_LEDS: usize> DisplayDevice for StripDisplay<O, MAX_LEDS> {
    type Error = DisplayError<O::Error>;

    fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error> {
        let pixel_count = self.pixel_count;
        let Some(pixel) = self.frame_buffer[..pixel_count].get_mut(index) else {
            return Err(DisplayError::OutOfRange { index, pixel_count });
        };
        *pixel = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.output
            .write(&self.frame_buffer[..self.pixel_count])
            .map_err(DisplayError::Output)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.frame_buffer.fill(BLACK);
        self.show()
    }
}
