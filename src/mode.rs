//! Clock UI operating mode.
//!
//! The clock is always in exactly one of five modes. Every setter is
//! legal from every mode and simply overwrites the current one; there is
//! no terminal state. Observers ask [`ClockMode::mode_just_changed`] once
//! per cycle to find out whether they need to redraw.

use crate::error::Error;

/// One of the five UI modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Normal time display.
    #[default]
    Clock,
    /// Temperature display.
    Temperature,
    /// Editing the time of day.
    SetTime,
    /// Editing the wake-up alarm.
    SetWakeAlarm,
    /// Editing the go-to-sleep alarm.
    SetSleepAlarm,
}

// Numeric encoding used by earlier firmware revisions. Kept for
// `ClockMode::get_mode` only; predicates below never look at bits.
const RAW_CLOCK: u8 = 0x00;
const RAW_TEMPERATURE: u8 = 0x04;
const RAW_SET_TIME: u8 = 0x09;
const RAW_SET_SLEEP_ALARM: u8 = 0x17;
const RAW_SET_WAKE_ALARM: u8 = 0x33;

impl Mode {
    /// All modes, in menu order.
    pub const ALL: [Mode; 5] = [
        Mode::Clock,
        Mode::Temperature,
        Mode::SetTime,
        Mode::SetWakeAlarm,
        Mode::SetSleepAlarm,
    ];

    pub const fn is_clock(self) -> bool {
        matches!(self, Mode::Clock)
    }

    pub const fn is_temperature(self) -> bool {
        matches!(self, Mode::Temperature)
    }

    pub const fn is_set_time(self) -> bool {
        matches!(self, Mode::SetTime)
    }

    /// Editing either alarm.
    pub const fn is_set_any_alarm(self) -> bool {
        matches!(self, Mode::SetWakeAlarm | Mode::SetSleepAlarm)
    }

    pub const fn is_set_wake_alarm(self) -> bool {
        matches!(self, Mode::SetWakeAlarm)
    }

    pub const fn is_set_sleep_alarm(self) -> bool {
        matches!(self, Mode::SetSleepAlarm)
    }

    /// Editing anything (time or either alarm).
    pub const fn is_in_any_set(self) -> bool {
        matches!(
            self,
            Mode::SetTime | Mode::SetWakeAlarm | Mode::SetSleepAlarm
        )
    }

    /// Legacy numeric encoding of this mode.
    pub const fn raw(self) -> u8 {
        match self {
            Mode::Clock => RAW_CLOCK,
            Mode::Temperature => RAW_TEMPERATURE,
            Mode::SetTime => RAW_SET_TIME,
            Mode::SetWakeAlarm => RAW_SET_WAKE_ALARM,
            Mode::SetSleepAlarm => RAW_SET_SLEEP_ALARM,
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            RAW_CLOCK => Ok(Mode::Clock),
            RAW_TEMPERATURE => Ok(Mode::Temperature),
            RAW_SET_TIME => Ok(Mode::SetTime),
            RAW_SET_WAKE_ALARM => Ok(Mode::SetWakeAlarm),
            RAW_SET_SLEEP_ALARM => Ok(Mode::SetSleepAlarm),
            other => Err(Error::UnknownMode(other)),
        }
    }
}

/// Current UI mode plus the edge-triggered "changed since last asked" flag.
///
/// Owned by the main loop and passed to whoever needs it.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockMode {
    mode: Mode,
    prev_mode: Mode,
}

impl ClockMode {
    /// Start in [`Mode::Clock`] with no pending change.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Clock,
            prev_mode: Mode::Clock,
        }
    }

    fn set(&mut self, mode: Mode) {
        self.prev_mode = self.mode;
        self.mode = mode;
    }

    /// Back to the normal clock display.
    pub fn reset(&mut self) {
        self.set(Mode::Clock);
    }

    pub fn set_temperature(&mut self) {
        self.set(Mode::Temperature);
    }

    pub fn set_set_time(&mut self) {
        self.set(Mode::SetTime);
    }

    pub fn set_set_wake_alarm(&mut self) {
        self.set(Mode::SetWakeAlarm);
    }

    pub fn set_set_sleep_alarm(&mut self) {
        self.set(Mode::SetSleepAlarm);
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Legacy numeric value of the current mode. Prefer the predicates.
    pub fn get_mode(&self) -> u8 {
        self.mode.raw()
    }

    pub fn is_clock(&self) -> bool {
        self.mode.is_clock()
    }

    pub fn is_temperature(&self) -> bool {
        self.mode.is_temperature()
    }

    pub fn is_set_time(&self) -> bool {
        self.mode.is_set_time()
    }

    pub fn is_set_any_alarm(&self) -> bool {
        self.mode.is_set_any_alarm()
    }

    pub fn is_set_wake_alarm(&self) -> bool {
        self.mode.is_set_wake_alarm()
    }

    pub fn is_set_sleep_alarm(&self) -> bool {
        self.mode.is_set_sleep_alarm()
    }

    pub fn is_in_any_set(&self) -> bool {
        self.mode.is_in_any_set()
    }

    /// Whether the mode differs from the last time this was asked.
    ///
    /// Consumes the change: a second call without an intervening setter
    /// returns `false`.
    pub fn mode_just_changed(&mut self) -> bool {
        let changed = self.prev_mode != self.mode;
        self.prev_mode = self.mode;
        changed
    }
}
