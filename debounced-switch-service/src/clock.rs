//! Millisecond clock used to time presses

use embassy_time::Instant;

/// A monotonic millisecond counter that wraps at `u32::MAX`.
///
/// Consumers must compute intervals with `wrapping_sub`.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        C::now_ms(self)
    }
}

/// [`Clock`] backed by the embassy time driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncation gives the 32-bit wraparound
        Instant::now().as_millis() as u32
    }
}
