//! Switch Interpreter Module

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal_async::delay::DelayNs as AsyncDelayNs;

use crate::clock::Clock;
use crate::pin::ConfigurableInput;
use crate::switch::{DebouncedSwitch, Push};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Enum representing the gestures reported by a switch.
pub enum Message {
    /// Switch pressed and released before the long press threshold.
    ShortPress,
    /// Switch held for at least the long press threshold.
    LongPress,
}

impl Message {
    /// Maps a classification to a gesture, if there was one.
    pub fn from_push(push: Push) -> Option<Self> {
        match push {
            Push::None => None,
            Push::Short => Some(Message::ShortPress),
            Push::Long => Some(Message::LongPress),
        }
    }
}

/// Polls `switch` every `poll_interval` until a press is classified.
pub async fn wait_for_push<I, D, C, W>(
    switch: &mut DebouncedSwitch<I, D, C>,
    long_press_threshold: Duration,
    poll_interval: Duration,
    delay: &mut W,
) -> Result<Push, I::Error>
where
    I: ConfigurableInput,
    D: DelayNs,
    C: Clock,
    W: AsyncDelayNs,
{
    let interval_ms = u32::try_from(poll_interval.as_millis()).unwrap_or(u32::MAX);

    loop {
        match switch.sample(long_press_threshold)? {
            Push::None => delay.delay_ms(interval_ms).await,
            push => return Ok(push),
        }
    }
}

/// Waits for the next press on `switch` and reports its gesture.
pub async fn check_switch_press<I, D, C, W>(
    switch: &mut DebouncedSwitch<I, D, C>,
    long_press_threshold: Duration,
    poll_interval: Duration,
    delay: &mut W,
) -> Result<Option<Message>, I::Error>
where
    I: ConfigurableInput,
    D: DelayNs,
    C: Clock,
    W: AsyncDelayNs,
{
    let push = wait_for_push(switch, long_press_threshold, poll_interval, delay).await?;
    Ok(Message::from_push(push))
}
