//! Waiting between frames
//!
//! The engine never sleeps on its own. It hands every inter-frame wait to a
//! [`FrameDelay`] so tests and async hosts can replace the blocking wait.

use embassy_time::Duration;

/// Wait applied after every presented frame
pub trait FrameDelay {
    /// Block for `duration`
    fn delay(&mut self, duration: Duration);
}

impl<T: FrameDelay + ?Sized> FrameDelay for &mut T {
    fn delay(&mut self, duration: Duration) {
        (**self).delay(duration);
    }
}

/// Busy-waits on the `embassy-time` clock
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockingDelay;

impl FrameDelay for BlockingDelay {
    fn delay(&mut self, duration: Duration) {
        if duration.as_ticks() == 0 {
            return;
        }
        embassy_time::block_for(duration);
    }
}

/// Does not wait at all
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl FrameDelay for NoDelay {
    fn delay(&mut self, _duration: Duration) {}
}
