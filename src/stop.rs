//! Cooperative stop flag for the control loop.
//!
//! Built on `critical-section`, so it can be raised from an interrupt handler
//! or another thread and polled from the loop. Meant to live in a `static`.

use core::cell::Cell;

use critical_section::Mutex;

/// Shared "stop requested" flag
pub struct StopSignal {
    requested: Mutex<Cell<bool>>,
}

impl StopSignal {
    pub const fn new() -> Self {
        Self {
            requested: Mutex::new(Cell::new(false)),
        }
    }

    /// Ask the loop to stop after its current cycle
    pub fn request(&self) {
        critical_section::with(|cs| self.requested.borrow(cs).set(true));
    }

    pub fn is_requested(&self) -> bool {
        critical_section::with(|cs| self.requested.borrow(cs).get())
    }

    /// Clear the flag so the loop can be run again
    pub fn reset(&self) {
        critical_section::with(|cs| self.requested.borrow(cs).set(false));
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}
