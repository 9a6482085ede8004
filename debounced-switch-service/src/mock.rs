//! Test doubles for the switch's hardware collaborators

use core::cell::Cell;

use embedded_hal::digital::{ErrorType, InputPin};
use embedded_hal_mock::eh1::digital::{Mock, State, Transaction};

use crate::clock::Clock;
use crate::pin::{ConfigurableInput, InputMode, Level};

/// Manually driven millisecond clock.
#[derive(Debug, Default)]
pub struct MockClock(Cell<u32>);

impl MockClock {
    pub fn new(now_ms: u32) -> Self {
        Self(Cell::new(now_ms))
    }

    pub fn set(&self, now_ms: u32) {
        self.0.set(now_ms);
    }

    pub fn advance(&self, ms: u32) {
        self.0.set(self.0.get().wrapping_add(ms));
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

/// Scripted input pin that records the mode it was configured with.
pub struct MockInput {
    pin: Mock,
    mode: Option<InputMode>,
    reads: usize,
    reads_before_mode: Option<usize>,
}

impl MockInput {
    /// Expects exactly the given reads, in order.
    pub fn new(levels: &[Level]) -> Self {
        let expectations: Vec<Transaction> = levels.iter().map(|&level| read(level)).collect();
        Self::from_transactions(&expectations)
    }

    /// Expects exactly the given pin transactions, including injected errors.
    pub fn from_transactions(expectations: &[Transaction]) -> Self {
        Self {
            pin: Mock::new(expectations),
            mode: None,
            reads: 0,
            reads_before_mode: None,
        }
    }

    pub fn mode(&self) -> Option<InputMode> {
        self.mode
    }

    /// Number of reads that had happened when the mode was last set.
    pub fn reads_before_mode(&self) -> Option<usize> {
        self.reads_before_mode
    }

    pub fn done(&mut self) {
        self.pin.done();
    }
}

impl ErrorType for MockInput {
    type Error = <Mock as ErrorType>::Error;
}

impl InputPin for MockInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.reads += 1;
        self.pin.is_high()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.reads += 1;
        self.pin.is_low()
    }
}

impl ConfigurableInput for MockInput {
    fn set_input_mode(&mut self, mode: InputMode) -> Result<(), Self::Error> {
        self.mode = Some(mode);
        self.reads_before_mode = Some(self.reads);
        Ok(())
    }
}

/// Expectation for a single read returning `level`.
pub fn read(level: Level) -> Transaction {
    match level {
        Level::Low => Transaction::get(State::Low),
        Level::High => Transaction::get(State::High),
    }
}

/// Builds a read script: the idle read at attach followed by `count` copies of each level.
pub fn script(idle: Level, runs: &[(Level, usize)]) -> Vec<Level> {
    let mut levels = Vec::new();
    levels.push(idle);
    for &(level, count) in runs {
        levels.extend(core::iter::repeat(level).take(count));
    }
    levels
}
