//! Bit patterns resolved from the switch's idle level
//!
//! Depending on the pull resistor direction, a pressed switch may read either
//! high or low. The level read at attach time is taken as "released" and the
//! opposite level as "pressed", so nothing downstream assumes an electrical
//! polarity.

use crate::pin::Level;

/// Register patterns for one polarity profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Polarity {
    idle_level: Level,
    idle: u16,
    active: u16,
    down_match: u16,
    up_match: u16,
}

impl Polarity {
    /// Released reads low, so a press reads high.
    pub const IDLE_LOW: Self = Self {
        idle_level: Level::Low,
        idle: 0x0000,
        active: 0xFFFF,
        down_match: 0x7FFF,
        up_match: 0xFFFE,
    };

    /// Released reads high (typical pull-up wiring), so a press reads low.
    pub const IDLE_HIGH: Self = Self {
        idle_level: Level::High,
        idle: 0xFFFF,
        active: 0x0000,
        down_match: 0x8000,
        up_match: 0x0001,
    };

    /// Selects the profile for a switch that rests at `idle_level`.
    pub const fn from_idle(idle_level: Level) -> Self {
        match idle_level {
            Level::Low => Self::IDLE_LOW,
            Level::High => Self::IDLE_HIGH,
        }
    }

    /// Level read while the switch is released.
    pub const fn idle_level(&self) -> Level {
        self.idle_level
    }

    /// Every sample in the window released.
    pub const fn idle(&self) -> u16 {
        self.idle
    }

    /// Every sample in the window pressed.
    pub const fn active(&self) -> u16 {
        self.active
    }

    /// Oldest sample released, the 15 newest pressed: the switch just settled down.
    pub const fn down_match(&self) -> u16 {
        self.down_match
    }

    /// 15 pressed samples followed by one released sample: the switch just let go.
    pub const fn up_match(&self) -> u16 {
        self.up_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_mirror_each_other() {
        let low = Polarity::from_idle(Level::Low);
        let high = Polarity::from_idle(Level::High);

        assert_eq!(low.idle(), !high.idle());
        assert_eq!(low.active(), !high.active());
        assert_eq!(low.down_match(), !high.down_match());
        assert_eq!(low.up_match(), !high.up_match());
    }

    #[test]
    fn test_idle_and_active_are_complements() {
        for polarity in [Polarity::IDLE_LOW, Polarity::IDLE_HIGH] {
            assert_eq!(polarity.idle(), !polarity.active());
        }
    }

    #[test]
    fn test_idle_high_profile() {
        let polarity = Polarity::from_idle(Level::High);
        assert_eq!(polarity.idle_level(), Level::High);
        assert_eq!(polarity.active(), 0x0000);
        assert_eq!(polarity.down_match(), 0b1000_0000_0000_0000);
        assert_eq!(polarity.up_match(), 0b0000_0000_0000_0001);
    }
}
