//! Input pin abstractions

use embedded_hal::digital::InputPin;

/// Electrical level of a single raw read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logical 0.
    Low,
    /// Logical 1.
    High,
}

impl Level {
    /// Reads the instantaneous level of `pin`.
    pub fn read<I: InputPin>(pin: &mut I) -> Result<Self, I::Error> {
        Ok(Self::from(pin.is_high()?))
    }

    /// The level as a single register bit.
    pub const fn bit(self) -> u16 {
        match self {
            Level::Low => 0,
            Level::High => 1,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Electrical configuration of the switch input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputMode {
    /// Plain input, level set by external circuitry.
    #[default]
    Floating,
    /// Internal pull-up enabled.
    PullUp,
    /// Internal pull-down enabled.
    PullDown,
}

/// An input pin whose pull resistor can be selected at runtime.
///
/// HALs usually fix the pull in the pin's type or constructor; implement this
/// on a thin wrapper that applies `mode` to the underlying peripheral.
pub trait ConfigurableInput: InputPin {
    /// Applies the given electrical mode to the pin.
    fn set_input_mode(&mut self, mode: InputMode) -> Result<(), Self::Error>;
}

impl<T: ConfigurableInput + ?Sized> ConfigurableInput for &mut T {
    fn set_input_mode(&mut self, mode: InputMode) -> Result<(), Self::Error> {
        T::set_input_mode(self, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock, State, Transaction};

    #[test]
    fn test_read_level() {
        let expectations = [Transaction::get(State::High), Transaction::get(State::Low)];
        let mut pin = Mock::new(&expectations);

        assert_eq!(Level::read(&mut pin).unwrap(), Level::High);
        assert_eq!(Level::read(&mut pin).unwrap(), Level::Low);

        pin.done();
    }

    #[test]
    fn test_level_bit() {
        assert_eq!(Level::Low.bit(), 0);
        assert_eq!(Level::High.bit(), 1);
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
    }
}
