//! Larson scanner engine
//!
//! Sweeps a full-color head back and forth over the strip. Every frame the
//! head pixel is set to the head color and every pixel behind it is dimmed
//! once more by the trail width, so older trail pixels fade geometrically.

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Rgb, dim_color};
use crate::config::RunConfig;
use crate::delay::FrameDelay;
use crate::display::DisplayDevice;
use crate::error::ScannerError;
use crate::signal::StopSignal;
use crate::sweep::{Direction, SweepPosition};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All requested cycles were rendered
    Completed { steps: usize },
    /// A stop was requested before the run finished
    Stopped { steps: usize },
}

impl RunOutcome {
    /// Number of frames presented during the run
    pub const fn steps(self) -> usize {
        match self {
            Self::Completed { steps } | Self::Stopped { steps } => steps,
        }
    }
}

/// Scanner engine
///
/// Owns the display device, the frame delay and the per-pixel trail state.
/// The trail has exactly one entry per device pixel, is zeroed on creation
/// and carries over from one run to the next.
pub struct LarsonScanner<D: DisplayDevice, T: FrameDelay, const MAX_LEDS: usize> {
    // External dependencies
    device: D,
    delay: T,

    // Internal state
    trail: Vec<Rgb, MAX_LEDS>,
    position: SweepPosition,
}

impl<D: DisplayDevice, T: FrameDelay, const MAX_LEDS: usize> LarsonScanner<D, T, MAX_LEDS> {
    /// Create a new scanner for `device`
    ///
    /// Fails if the device has more pixels than `MAX_LEDS`.
    pub fn new(device: D, delay: T) -> Result<Self, ScannerError<D::Error>> {
        let pixel_count = device.pixel_count();
        let mut trail = Vec::new();
        trail
            .resize(pixel_count, BLACK)
            .map_err(|()| ScannerError::TooManyPixels {
                pixel_count,
                capacity: MAX_LEDS,
            })?;

        Ok(Self {
            device,
            delay,
            trail,
            position: SweepPosition::START,
        })
    }

    /// Run `config.cycles` full sweeps
    ///
    /// The configuration is validated before any device call. Device errors
    /// abort the run immediately.
    pub fn run(&mut self, config: &RunConfig) -> Result<(), ScannerError<D::Error>> {
        self.run_inner(config, None).map(|_| ())
    }

    /// Run like [`LarsonScanner::run`], checking `stop` before every frame
    pub fn run_until(
        &mut self,
        config: &RunConfig,
        stop: &StopSignal,
    ) -> Result<RunOutcome, ScannerError<D::Error>> {
        self.run_inner(config, Some(stop))
    }

    /// Render a single frame at the current position and advance the head
    ///
    /// Does not wait. Returns `true` when the frame completed a cycle.
    /// Strips shorter than two pixels are left untouched.
    pub fn step(&mut self, config: &RunConfig) -> Result<bool, ScannerError<D::Error>> {
        config.validate()?;
        if self.trail.len() < 2 {
            self.ensure_pixel_count()?;
            return Ok(false);
        }
        self.advance_frame(config.color, config.width)
    }

    /// Turn the strip off and forget the trail
    pub fn clear(&mut self) -> Result<(), ScannerError<D::Error>> {
        self.device.clear().map_err(ScannerError::Device)?;
        self.reset_trail();
        Ok(())
    }

    /// Forget the trail without touching the device
    pub fn reset_trail(&mut self) {
        self.trail.fill(BLACK);
        self.position = SweepPosition::START;
    }

    /// Colors the engine last wrote to each pixel
    pub fn trail(&self) -> &[Rgb] {
        &self.trail
    }

    /// Position of the next head pixel
    pub const fn position(&self) -> SweepPosition {
        self.position
    }

    /// Number of pixels the scanner drives
    pub fn pixel_count(&self) -> usize {
        self.trail.len()
    }

    /// Get a reference to the display device
    pub const fn device(&self) -> &D {
        &self.device
    }

    /// Get a mutable reference to the display device
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Release the device and the delay
    pub fn into_parts(self) -> (D, T) {
        (self.device, self.delay)
    }

    pub(crate) fn run_inner(
        &mut self,
        config: &RunConfig,
        stop: Option<&StopSignal>,
    ) -> Result<RunOutcome, ScannerError<D::Error>> {
        config.validate()?;
        self.ensure_pixel_count()?;
        if config.cycles == 0 || self.trail.len() < 2 {
            return Ok(RunOutcome::Completed { steps: 0 });
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[LarsonScanner.run] {} cycles over {} pixels, width {}",
            config.cycles,
            self.trail.len(),
            config.width
        );

        self.position = SweepPosition::START;
        let mut steps = 0;
        for _ in 0..config.cycles {
            loop {
                if stop.is_some_and(StopSignal::is_stop_requested) {
                    #[cfg(feature = "esp32-log")]
                    println!("[LarsonScanner.run] stop requested after {} steps", steps);
                    return Ok(RunOutcome::Stopped { steps });
                }

                let cycle_done = self.advance_frame(config.color, config.width)?;
                self.delay.delay(config.speed);
                steps += 1;

                if cycle_done {
                    break;
                }
            }
        }

        #[cfg(feature = "esp32-log")]
        println!("[LarsonScanner.run] finished after {} steps", steps);

        Ok(RunOutcome::Completed { steps })
    }

    /// Render the frame for the current head and move the head on
    fn advance_frame(&mut self, color: Rgb, width: u8) -> Result<bool, ScannerError<D::Error>> {
        self.ensure_pixel_count()?;
        let head = self.position.index;
        self.write_pixel(head, color)?;

        // Every pixel behind the head fades once per frame, not only the newest one
        match self.position.direction {
            Direction::Forward => {
                for index in (0..head).rev() {
                    self.dim_pixel(index, width)?;
                }
            }
            Direction::Backward => {
                for index in head + 1..self.trail.len() {
                    self.dim_pixel(index, width)?;
                }
            }
        }

        self.device.show().map_err(|error| {
            #[cfg(feature = "esp32-log")]
            println!("[LarsonScanner.advance_frame] show failed at pixel {}", head);
            ScannerError::Device(error)
        })?;

        Ok(self.position.advance(self.trail.len()))
    }

    fn dim_pixel(&mut self, index: usize, width: u8) -> Result<(), ScannerError<D::Error>> {
        let Some(&color) = self.trail.get(index) else {
            return Err(ScannerError::OutOfRange {
                index,
                pixel_count: self.trail.len(),
            });
        };
        self.write_pixel(index, dim_color(color, width))
    }

    fn write_pixel(&mut self, index: usize, color: Rgb) -> Result<(), ScannerError<D::Error>> {
        let pixel_count = self.trail.len();
        let Some(slot) = self.trail.get_mut(index) else {
            return Err(ScannerError::OutOfRange { index, pixel_count });
        };
        *slot = color;
        self.device
            .set_pixel_color(index, color)
            .map_err(ScannerError::Device)
    }

    /// Trail and device must agree on the strip length
    fn ensure_pixel_count(&self) -> Result<(), ScannerError<D::Error>> {
        let pixel_count = self.device.pixel_count();
        if pixel_count == self.trail.len() {
            return Ok(());
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[LarsonScanner.ensure_pixel_count] device reports {} pixels, trail has {}",
            pixel_count,
            self.trail.len()
        );
        Err(ScannerError::OutOfRange {
            index: self.trail.len().saturating_sub(1),
            pixel_count,
        })
    }
}
