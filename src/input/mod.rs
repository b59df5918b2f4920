//! Debounced button input with press/release/long-press detection.
//!
//! [`Debouncer`] is the pure state machine: it is fed a millisecond
//! timestamp and a raw pin level once per main-loop tick and never touches
//! hardware. [`Button`] owns the pin and does the sampling.
//!
//! Buttons are wired active-low (internal pull-up), so a press is a
//! stable HIGH → LOW transition and a release is LOW → HIGH.
//!
//! Debouncing is "quiet period" style: every raw change restarts the
//! timer, and the raw level is only accepted once it has held for the
//! full debounce time.

mod button;


pub use button::Button;

use crate::config::DEFAULT_DEBOUNCE_MS;
use crate::error::Error;

/// Logical level of a digital input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    High,
    Low,
}

impl Level {
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    pub const fn is_low(self) -> bool {
        matches!(self, Level::Low)
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

/// Which stable transitions bump the edge counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CountMode {
    /// HIGH → LOW only (presses).
    #[default]
    Falling = 0,
    /// LOW → HIGH only (releases).
    Rising = 1,
    /// Every stable transition.
    Both = 2,
}

impl TryFrom<u8> for CountMode {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(CountMode::Falling),
            1 => Ok(CountMode::Rising),
            2 => Ok(CountMode::Both),
            other => Err(Error::UnknownCountMode(other)),
        }
    }
}

/// Debounce, edge-count and long-press state for one input line.
///
/// Timestamps are `u32` milliseconds and all differences use
/// `wrapping_sub`, so a free-running 32-bit millisecond counter may roll
/// over without disturbing the timing.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    debounce_time: u32,
    long_press_time: u32,
    count_mode: CountMode,
    count: u32,

    /// Last raw sample, possibly still bouncing.
    flicker_level: Level,
    /// Stable level before the most recent debounce shift.
    previous_stable: Level,
    /// Current stable (debounced) level.
    stable: Level,

    last_flicker_change: u32,
    last_press: u32,

    pressing: bool,
    long_press_detected: bool,
    long_press_action_ready: bool,
}

impl Debouncer {
    /// Create a debouncer whose level history is seeded with `initial`.
    pub const fn new(initial: Level, long_press_time: u32) -> Self {
        Self {
            debounce_time: DEFAULT_DEBOUNCE_MS,
            long_press_time,
            count_mode: CountMode::Falling,
            count: 0,
            flicker_level: initial,
            previous_stable: initial,
            stable: initial,
            last_flicker_change: 0,
            last_press: 0,
            pressing: false,
            long_press_detected: false,
            long_press_action_ready: false,
        }
    }

    /// Minimum quiet time before a raw level is accepted. Takes effect on
    /// the next [`update`](Self::update). Zero disables filtering.
    pub fn set_debounce_time(&mut self, ms: u32) {
        self.debounce_time = ms;
    }

    pub fn debounce_time(&self) -> u32 {
        self.debounce_time
    }

    pub fn set_long_press_time(&mut self, ms: u32) {
        self.long_press_time = ms;
    }

    pub fn long_press_time(&self) -> u32 {
        self.long_press_time
    }

    pub fn set_count_mode(&mut self, mode: CountMode) {
        self.count_mode = mode;
    }

    pub fn count_mode(&self) -> CountMode {
        self.count_mode
    }

    /// Advance the state machine by one tick.
    ///
    /// `now` must come from a monotonic millisecond clock (wrap-around is
    /// fine) and `level` is the raw pin sample taken this tick.
    pub fn update(&mut self, now: u32, level: Level) {
        // Any bounce restarts the quiet period.
        if level != self.flicker_level {
            self.flicker_level = level;
            self.last_flicker_change = now;
        }

        let mut shifted = false;
        if now.wrapping_sub(self.last_flicker_change) >= self.debounce_time {
            self.previous_stable = self.stable;
            self.stable = self.flicker_level;
            shifted = true;
        }

        // Only the tick that produced the edge counts it. While bouncing
        // the pair is left as-is and must not be counted again.
        if shifted && self.previous_stable != self.stable {
            #[cfg(feature = "defmt")]
            defmt::trace!(
                "button: stable {} -> {}",
                self.previous_stable,
                self.stable
            );

            self.count_edge();

            if self.is_pressed() {
                self.last_press = now;
                self.pressing = true;
                self.long_press_detected = false;
                self.long_press_action_ready = true;
            } else {
                self.pressing = false;
            }
        }

        if self.pressing
            && !self.long_press_detected
            && now.wrapping_sub(self.last_press) > self.long_press_time
        {
            #[cfg(feature = "defmt")]
            defmt::debug!("button: long press after {} ms", now.wrapping_sub(self.last_press));

            self.long_press_detected = true;
        }
    }

    fn count_edge(&mut self) {
        let counts = match self.count_mode {
            CountMode::Both => true,
            CountMode::Falling => self.is_pressed(),
            CountMode::Rising => self.stable.is_high(),
        };
        if counts {
            self.count = self.count.wrapping_add(1);
        }
    }

    /// Current debounced level.
    pub fn state(&self) -> Level {
        self.stable
    }

    /// The most recent stable transition was HIGH → LOW.
    ///
    /// Derived from the stored level pair, so repeated calls within one
    /// tick agree; it turns false once the next debounce shift settles.
    pub fn is_pressed(&self) -> bool {
        self.previous_stable.is_high() && self.stable.is_low()
    }

    /// The most recent stable transition was LOW → HIGH.
    ///
    /// With `check_action_ready` set the release only counts while the
    /// press's action latch is still armed, i.e. nobody has called
    /// [`mark_long_press_action`](Self::mark_long_press_action) for it.
    pub fn is_released(&self, check_action_ready: bool) -> bool {
        self.previous_stable.is_low()
            && self.stable.is_high()
            && (!check_action_ready || self.long_press_action_ready)
    }

    /// The button has been held past the long-press threshold.
    pub fn is_long_press(&self, check_action_ready: bool) -> bool {
        self.long_press_detected && (!check_action_ready || self.long_press_action_ready)
    }

    /// Acknowledge the press so its action fires only once.
    pub fn mark_long_press_action(&mut self) {
        self.long_press_action_ready = false;
    }

    pub fn is_long_press_action_ready(&self) -> bool {
        self.long_press_action_ready
    }

    /// Held down right now (between a stable press and its release).
    pub fn is_pressing(&self) -> bool {
        self.pressing
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn reset_count(&mut self) {
        self.count = 0;
    }
}
