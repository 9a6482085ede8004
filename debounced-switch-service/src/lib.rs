//! Debounced momentary switch service
//!
//! Samples a single switch input into a 16 bit shift register and classifies
//! presses as short or long against an optional threshold.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod clock;
pub mod fmt;
pub mod history;
pub mod interpreter;
pub mod pin;
pub mod polarity;
pub mod switch;

#[cfg(test)]
mod mock;

pub use clock::{Clock, EmbassyClock};
pub use pin::{ConfigurableInput, InputMode, Level};
pub use switch::{DebouncedSwitch, Push, SwitchConfig};
