//! GPIO-backed button: a [`Debouncer`] that samples its own pin.
//!
//! Generic over `embedded_hal::digital::InputPin` so the firmware can hand
//! in an `embassy_nrf::gpio::Input` and host tests a fake pin.

use embedded_hal::digital::InputPin;

use super::{Debouncer, Level};
use crate::config::DEFAULT_LONG_PRESS_MS;

/// One physical button. Each instance owns its pin and state exclusively.
pub struct Button<P> {
    pin: P,
    debouncer: Debouncer,
}

impl<P: InputPin> Button<P> {
    /// Wrap `pin` with the default long-press threshold.
    pub fn new(pin: P) -> Result<Self, P::Error> {
        Self::with_long_press(pin, DEFAULT_LONG_PRESS_MS)
    }

    /// Wrap `pin`, seeding the level history from one read of the pin.
    pub fn with_long_press(mut pin: P, long_press_ms: u32) -> Result<Self, P::Error> {
        let initial = Level::from(pin.is_high()?);
        Ok(Self {
            pin,
            debouncer: Debouncer::new(initial, long_press_ms),
        })
    }

    /// Sample the pin once and advance the debouncer.
    pub fn poll(&mut self, now: u32) -> Result<(), P::Error> {
        let level = Level::from(self.pin.is_high()?);
        self.debouncer.update(now, level);
        Ok(())
    }

    /// Read the pin directly, bypassing the debouncer. Diagnostics only.
    pub fn raw_state(&mut self) -> Result<Level, P::Error> {
        Ok(Level::from(self.pin.is_high()?))
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    pub fn debouncer_mut(&mut self) -> &mut Debouncer {
        &mut self.debouncer
    }

    /// Give the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}
