//! Stop signal for long running animations
//!
//! An interrupt-safe flag built on `critical-section`. Another task or an
//! interrupt handler requests a stop; the engine checks the flag between
//! frames, so trail state is never left half-updated.

use core::cell::Cell;

use critical_section::Mutex;

/// Flag that asks a running scanner to stop after the current frame
pub struct StopSignal {
    requested: Mutex<Cell<bool>>,
}

impl StopSignal {
    /// Create a new signal with no stop requested
    pub const fn new() -> Self {
        Self {
            requested: Mutex::new(Cell::new(false)),
        }
    }

    /// Ask the scanner to stop
    pub fn request_stop(&self) {
        critical_section::with(|cs| self.requested.borrow(cs).set(true));
    }

    /// Check if a stop was requested
    pub fn is_stop_requested(&self) -> bool {
        critical_section::with(|cs| self.requested.borrow(cs).get())
    }

    /// Withdraw a pending stop request
    pub fn clear(&self) {
        critical_section::with(|cs| self.requested.borrow(cs).set(false));
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}
