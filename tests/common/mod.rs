#![allow(dead_code)]

use embassy_time::Duration;
use larson_scanner::{DisplayDevice, FrameDelay, Rgb, StopSignal};
use smart_leds::SmartLedsWrite;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

pub const fn blue(value: u8) -> Rgb {
    Rgb { r: 0, g: 0, b: value }
}

/// A single call received by [`MockDevice`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Set(usize, Rgb),
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Display device that records every call
pub struct MockDevice {
    pub pixel_count: usize,
    pub staged: Vec<Rgb>,
    pub calls: Vec<Call>,
    pub frames: Vec<Vec<Rgb>>,
    /// Fail the show call with this (zero based) number
    pub fail_show_at: Option<usize>,
    shows: usize,
}

impl MockDevice {
    pub fn new(pixel_count: usize) -> Self {
        Self {
            pixel_count,
            staged: vec![BLACK; pixel_count],
            calls: Vec::new(),
            frames: Vec::new(),
            fail_show_at: None,
            shows: 0,
        }
    }

    pub fn failing_show_at(mut self, show: usize) -> Self {
        self.fail_show_at = Some(show);
        self
    }

    pub fn show_count(&self) -> usize {
        self.calls.iter().filter(|call| **call == Call::Show).count()
    }

    pub fn set_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::Set(..)))
            .count()
    }

    /// Index of the first pixel set in every presented frame
    pub fn heads(&self) -> Vec<usize> {
        let mut heads = Vec::new();
        let mut frame_start = true;
        for call in &self.calls {
            match call {
                Call::Set(index, _) if frame_start => {
                    heads.push(*index);
                    frame_start = false;
                }
                Call::Set(..) => {}
                Call::Show => frame_start = true,
            }
        }
        heads
    }
}

impl DisplayDevice for MockDevice {
    type Error = MockError;

    fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error> {
        self.calls.push(Call::Set(index, color));
        let pixel = self.staged.get_mut(index).ok_or(MockError)?;
        *pixel = color;
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.calls.push(Call::Show);
        let show = self.shows;
        self.shows += 1;
        if self.fail_show_at == Some(show) {
            return Err(MockError);
        }
        self.frames.push(self.staged.clone());
        Ok(())
    }
}

/// Frame delay that records waits instead of sleeping
#[derive(Default)]
pub struct RecordingDelay {
    pub waits: Vec<Duration>,
}

impl FrameDelay for RecordingDelay {
    fn delay(&mut self, duration: Duration) {
        self.waits.push(duration);
    }
}

/// Frame delay that requests a stop after a number of waits
pub struct StoppingDelay<'a> {
    pub stop: &'a StopSignal,
    pub stop_after: usize,
    pub waits: usize,
}

impl FrameDelay for StoppingDelay<'_> {
    fn delay(&mut self, _duration: Duration) {
        self.waits += 1;
        if self.waits == self.stop_after {
            self.stop.request_stop();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteError;

/// Hardware-like `smart-leds` writer that keeps the last written frame
#[derive(Default)]
pub struct FakeStrip {
    pub written: Vec<Rgb>,
    pub writes: usize,
}

impl SmartLedsWrite for FakeStrip {
    type Error = WriteError;
    type Color = Rgb;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.written = iterator.into_iter().map(Into::into).collect();
        self.writes += 1;
        Ok(())
    }
}
