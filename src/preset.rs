//! Preset run sequences
//!
//! [`CLASSIC_SEQUENCE`] is the classic NeoPixel Knight Rider demo: eight
//! runs of three cycles at 32 ms per frame, cycling through trail widths
//! and colors.

use embassy_time::Duration;

use crate::color::rgb_from_u32;
use crate::config::RunConfig;
use crate::delay::FrameDelay;
use crate::display::DisplayDevice;
use crate::error::ScannerError;
use crate::scanner::{LarsonScanner, RunOutcome};
use crate::signal::StopSignal;

const CLASSIC_CYCLES: u32 = 3;
const CLASSIC_SPEED: Duration = Duration::from_millis(32);

const fn classic(width: u8, color: u32) -> RunConfig {
    RunConfig::new(CLASSIC_CYCLES, CLASSIC_SPEED, width, rgb_from_u32(color))
}

/// Blue, purple, blue, red, green, yellow, cyan and white runs
pub const CLASSIC_SEQUENCE: [RunConfig; 8] = [
    classic(4, 0x00_00_FF),
    classic(3, 0xFF_00_FF),
    classic(2, 0x00_00_FF),
    classic(5, 0xFF_00_00),
    classic(6, 0x00_FF_00),
    classic(7, 0xFF_FF_00),
    classic(8, 0x00_FF_FF),
    classic(2, 0xFF_FF_FF),
];

impl<D: DisplayDevice, T: FrameDelay, const MAX_LEDS: usize> LarsonScanner<D, T, MAX_LEDS> {
    /// Play a sequence of runs on a cleared strip
    ///
    /// Every run is validated before the strip is touched. The strip is
    /// cleared before the first run and after the last one; trails carry
    /// over between runs.
    pub fn play(&mut self, runs: &[RunConfig]) -> Result<(), ScannerError<D::Error>> {
        self.play_inner(runs, None).map(|_| ())
    }

    /// Play like [`LarsonScanner::play`], checking `stop` before every frame
    ///
    /// A stopped sequence leaves the strip showing its last frame.
    pub fn play_until(
        &mut self,
        runs: &[RunConfig],
        stop: &StopSignal,
    ) -> Result<RunOutcome, ScannerError<D::Error>> {
        self.play_inner(runs, Some(stop))
    }

    fn play_inner(
        &mut self,
        runs: &[RunConfig],
        stop: Option<&StopSignal>,
    ) -> Result<RunOutcome, ScannerError<D::Error>> {
        for run in runs {
            run.validate()?;
        }

        self.clear()?;
        let mut steps = 0;
        for run in runs {
            let outcome = self.run_inner(run, stop)?;
            steps += outcome.steps();
            if let RunOutcome::Stopped { .. } = outcome {
                return Ok(RunOutcome::Stopped { steps });
            }
        }
        self.clear()?;

        Ok(RunOutcome::Completed { steps })
    }
}
