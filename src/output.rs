use smart_leds::SmartLedsWrite;

use crate::{OutputDriver, Rgb};

/// Output driver for any `smart-leds` compatible strip driver
///
/// Wraps a hardware driver (WS2812 over SPI, RMT, ...) so it can back a
/// [`StripDisplay`](crate::display::StripDisplay).
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the wrapped driver
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Release the wrapped driver
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    type Error = W::Error;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.writer.write(colors.iter().copied())
    }
}
