//! Sweep position state machine
//!
//! A forward pass moves the head over `1..=N-1`, a backward pass over
//! `N-2..=0`. Each endpoint is visited as head from one direction only,
//! so one cycle is `2 * (N - 1)` frames.

/// Direction the head is travelling in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Increasing pixel index
    Forward,
    /// Decreasing pixel index
    Backward,
}

/// Index of the head pixel and its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPosition {
    pub index: usize,
    pub direction: Direction,
}

impl SweepPosition {
    /// First head position of every cycle
    pub const START: Self = Self {
        index: 1,
        direction: Direction::Forward,
    };

    /// Move to the next head position on a strip of `pixel_count` pixels
    ///
    /// Returns `true` when the move completed a cycle and wrapped back to
    /// [`SweepPosition::START`].
    pub fn advance(&mut self, pixel_count: usize) -> bool {
        let last = pixel_count.saturating_sub(1);
        match self.direction {
            Direction::Forward if self.index < last => {
                self.index += 1;
                false
            }
            Direction::Forward => {
                self.index = last.saturating_sub(1);
                self.direction = Direction::Backward;
                false
            }
            Direction::Backward if self.index > 0 => {
                self.index -= 1;
                false
            }
            Direction::Backward => {
                *self = Self::START;
                true
            }
        }
    }
}

impl Default for SweepPosition {
    fn default() -> Self {
        Self::START
    }
}

/// Number of frames in one full cycle on a strip of `pixel_count` pixels
pub const fn steps_per_cycle(pixel_count: usize) -> usize {
    if pixel_count < 2 {
        return 0;
    }
    2 * (pixel_count - 1)
}
