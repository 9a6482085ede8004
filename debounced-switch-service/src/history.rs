//! Shift register of raw samples

use crate::pin::Level;

/// The last 16 raw samples of a switch input.
///
/// The newest sample sits in bit 0 and the oldest retained sample in bit 15.
/// Each call to [`History::shift_in`] drops the oldest bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct History(u16);

impl History {
    /// Number of samples in the debounce window.
    pub const WIDTH: u32 = u16::BITS;

    /// Creates an empty register (all samples low).
    pub const fn new() -> Self {
        Self(0)
    }

    /// Shifts `level` in as the newest sample.
    pub fn shift_in(&mut self, level: Level) {
        self.0 = (self.0 << 1) | level.bit();
    }

    /// Raw register contents.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns true if the register holds exactly `pattern`.
    pub const fn matches(self, pattern: u16) -> bool {
        self.0 == pattern
    }
}
