#![no_std]

pub mod color;
pub mod config;
pub mod delay;
pub mod display;
pub mod error;
pub mod math8;
pub mod output;
pub mod preset;
pub mod scanner;
pub mod signal;
pub mod sweep;

pub use config::{ConfigError, RunConfig};
pub use delay::{BlockingDelay, FrameDelay, NoDelay};
pub use display::{DisplayDevice, DisplayError, StripDisplay};
pub use error::ScannerError;
pub use output::SmartLedsOutput;
pub use preset::CLASSIC_SEQUENCE;
pub use scanner::{LarsonScanner, RunOutcome};
pub use signal::StopSignal;
pub use sweep::{Direction, SweepPosition, steps_per_cycle};

pub use color::{Rgb, dim_color, rgb_from_u32};
pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// [`StripDisplay`] is generic over this trait.
pub trait OutputDriver {
    /// Error reported by the hardware
    type Error;

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}
