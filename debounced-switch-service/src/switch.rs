//! Debounced Switch Module

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::clock::Clock;
use crate::history::History;
use crate::pin::{ConfigurableInput, InputMode, Level};
use crate::polarity::Polarity;
use crate::{debug, trace};

/// Shortest accepted long press threshold. Anything below disables long press detection.
pub const MIN_LONG_PRESS_THRESHOLD: Duration = Duration::from_millis(500);

/// Default busy-wait after each raw read, in microseconds.
pub const DEFAULT_SETTLE_DELAY_US: u32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// Classification produced by [`DebouncedSwitch::sample`].
pub enum Push {
    /// Nothing to report this poll.
    #[default]
    None = 0,
    /// Press shorter than the threshold, or any press when long press detection is disabled.
    Short = 1,
    /// Press held for at least the threshold.
    Long = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Where the switch is in the press cycle.
pub enum PressState {
    /// No press being timed.
    Idle,
    /// Down edge seen, timer running until the press is classified.
    PressPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Attach-time configuration for a switch.
pub struct SwitchConfig {
    mode: InputMode,
    settle_delay_us: u32,
}

impl SwitchConfig {
    /// Creates a new SwitchConfig with the given input mode and settle delay.
    pub fn new(mode: InputMode, settle_delay_us: u32) -> Self {
        Self { mode, settle_delay_us }
    }

    /// Gets the input mode applied at attach.
    pub fn get_mode(&self) -> InputMode {
        self.mode
    }

    /// Gets the busy-wait after each raw read.
    pub fn get_settle_delay_us(&self) -> u32 {
        self.settle_delay_us
    }
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            mode: InputMode::default(),
            settle_delay_us: DEFAULT_SETTLE_DELAY_US,
        }
    }
}

impl From<InputMode> for SwitchConfig {
    fn from(mode: InputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }
}

#[derive(Clone, Copy)]
enum Activation {
    /// Classify as soon as the switch settles down.
    OnPress,
    /// Classify by held duration once released, or once the threshold elapses.
    OnRelease { threshold_ms: u32 },
}

impl Activation {
    fn from_threshold(threshold: Duration) -> Self {
        if threshold < MIN_LONG_PRESS_THRESHOLD {
            Activation::OnPress
        } else {
            Activation::OnRelease {
                threshold_ms: u32::try_from(threshold.as_millis()).unwrap_or(u32::MAX),
            }
        }
    }
}

#[derive(Debug)]
/// A momentary switch debounced with a 16 sample shift register.
///
/// Call [`DebouncedSwitch::sample`] once per poll. The switch does not
/// synchronize internally; poll each instance from a single task.
pub struct DebouncedSwitch<I, D, C> {
    pin: I,
    delay: D,
    clock: C,
    config: SwitchConfig,
    polarity: Polarity,
    history: History,
    press_start: u32,
    pending_press: bool,
    pending_release: bool,
    last: Push,
}

impl<I: ConfigurableInput, D: DelayNs, C: Clock> DebouncedSwitch<I, D, C> {
    /// Configures `pin` and resolves polarity from its current level.
    ///
    /// The switch must be released when this is called: whatever level the
    /// pin reads now is taken as "not pressed".
    ///
    /// The pin is dropped if this fails. To keep it on error, pass `&mut pin`
    /// instead; `ConfigurableInput` is implemented for mutable references.
    pub fn attach(mut pin: I, config: SwitchConfig, delay: D, clock: C) -> Result<Self, I::Error> {
        pin.set_input_mode(config.get_mode())?;
        let idle_level = Level::read(&mut pin)?;
        let polarity = Polarity::from_idle(idle_level);

        debug!(
            "Switch attached, mode {:?}, idle level {:?}",
            config.get_mode(),
            idle_level
        );

        Ok(Self {
            pin,
            delay,
            clock,
            config,
            polarity,
            history: History::new(),
            press_start: 0,
            pending_press: false,
            pending_release: false,
            last: Push::None,
        })
    }

    /// Reads the pin once and classifies the result.
    ///
    /// A `long_press_threshold` below [`MIN_LONG_PRESS_THRESHOLD`] disables
    /// long press detection and reports [`Push::Short`] on the debounced down
    /// edge. Otherwise presses are classified on release, or as
    /// [`Push::Long`] as soon as the threshold elapses while still held.
    pub fn sample(&mut self, long_press_threshold: Duration) -> Result<Push, I::Error> {
        let level = Level::read(&mut self.pin)?;
        self.history.shift_in(level);
        self.delay.delay_us(self.config.get_settle_delay_us());

        let push = match Activation::from_threshold(long_press_threshold) {
            Activation::OnPress => self.classify_on_press(),
            Activation::OnRelease { threshold_ms } => self.classify_on_release(threshold_ms),
        };

        Ok(push)
    }

    /// Samples with long press detection disabled.
    pub fn refresh(&mut self) -> Result<Push, I::Error> {
        self.sample(Duration::from_millis(0))
    }

    fn classify_on_press(&mut self) -> Push {
        if self.down_edge() {
            self.latch(Push::Short)
        } else {
            self.latch(Push::None)
        }
    }

    fn classify_on_release(&mut self, threshold_ms: u32) -> Push {
        // Order matters: a down edge restarts the timer before it is read below
        if !(self.down_edge() || self.is_down() || self.up_edge()) {
            return self.latch(Push::None);
        }

        if !self.pending_press {
            return Push::None;
        }

        let elapsed = self.clock.now_ms().wrapping_sub(self.press_start);
        if elapsed < threshold_ms && self.pending_release {
            self.latch(Push::Short)
        } else if elapsed >= threshold_ms {
            self.latch(Push::Long)
        } else {
            // Held but under the threshold; flags keep their value
            Push::None
        }
    }

    fn down_edge(&mut self) -> bool {
        if !self.history.matches(self.polarity.down_match()) {
            return false;
        }

        self.press_start = self.clock.now_ms();
        self.pending_press = true;
        self.pending_release = false;
        trace!("Switch down edge at {} ms", self.press_start);
        true
    }

    fn up_edge(&mut self) -> bool {
        if !self.history.matches(self.polarity.up_match()) {
            return false;
        }

        self.pending_release = true;
        trace!("Switch up edge");
        true
    }

    fn latch(&mut self, push: Push) -> Push {
        if push != Push::None {
            debug!("Switch push: {:?}", push);
            self.pending_press = false;
            self.pending_release = false;
        }
        self.last = push;
        push
    }
}

impl<I, D, C> DebouncedSwitch<I, D, C> {
    /// True if every sample in the window reads pressed.
    pub fn is_down(&self) -> bool {
        self.history.matches(self.polarity.active())
    }

    /// True if every sample in the window reads released.
    pub fn is_up(&self) -> bool {
        self.history.matches(self.polarity.idle())
    }

    /// Latched short push flag from the last classifying poll.
    pub fn short_push(&self) -> bool {
        self.last == Push::Short
    }

    /// Latched long push flag from the last classifying poll.
    pub fn long_push(&self) -> bool {
        self.last == Push::Long
    }

    /// The latched classification behind [`Self::short_push`] and [`Self::long_push`].
    pub fn last_push(&self) -> Push {
        self.last
    }

    /// Current position in the press cycle.
    pub fn press_state(&self) -> PressState {
        if self.pending_press {
            PressState::PressPending
        } else {
            PressState::Idle
        }
    }

    /// Raw sample history.
    pub fn history(&self) -> History {
        self.history
    }

    /// Polarity profile resolved at attach.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Gets the switch configuration.
    pub fn get_config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Releases the pin, delay and clock.
    pub fn release(self) -> (I, D, C) {
        (self.pin, self.delay, self.clock)
    }
}
