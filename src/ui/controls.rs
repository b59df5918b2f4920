//! Button → mode mapping for the three-button clock face.
//!
//! - MODE tap: Clock ↔ Temperature, or step to the next setting while
//!   editing (time → wake alarm → sleep alarm → back to the clock).
//! - MODE long press: enter time setting, or leave any setting.
//! - UP / DOWN: adjust the value being edited.
//!
//! Runs once per main-loop tick, after all buttons have been polled.

use crate::input::Debouncer;
use crate::mode::{ClockMode, Mode};

/// Adjustment requested for the value currently being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Adjust {
    None,
    Increment,
    Decrement,
}

/// Mode a MODE tap moves to from `mode`.
pub fn next_setting(mode: Mode) -> Mode {
    match mode {
        Mode::Clock => Mode::Temperature,
        Mode::Temperature => Mode::Clock,
        Mode::SetTime => Mode::SetWakeAlarm,
        Mode::SetWakeAlarm => Mode::SetSleepAlarm,
        Mode::SetSleepAlarm => Mode::Clock,
    }
}

/// Switch `clock` to `target` through its setter.
pub fn enter(clock: &mut ClockMode, target: Mode) {
    match target {
        Mode::Clock => clock.reset(),
        Mode::Temperature => clock.set_temperature(),
        Mode::SetTime => clock.set_set_time(),
        Mode::SetWakeAlarm => clock.set_set_wake_alarm(),
        Mode::SetSleepAlarm => clock.set_set_sleep_alarm(),
    }
}

/// A press that has not been acted on yet. Marks the action latch, so a
/// press frozen by contact bounce is only taken once.
fn take_press(button: &mut Debouncer) -> bool {
    if button.is_pressed() && button.is_long_press_action_ready() {
        button.mark_long_press_action();
        true
    } else {
        false
    }
}

/// Apply this tick's button state to `clock`.
///
/// Each press triggers at most one action. For MODE that is the long
/// press or the tap on release, never both; UP and DOWN act on the press.
/// Every button's action latch is marked as soon as its action fires.
pub fn handle_buttons(
    clock: &mut ClockMode,
    mode_button: &mut Debouncer,
    up: &mut Debouncer,
    down: &mut Debouncer,
) -> Adjust {
    if mode_button.is_long_press(true) {
        mode_button.mark_long_press_action();
        if clock.is_in_any_set() {
            clock.reset();
        } else {
            clock.set_set_time();
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("controls: long press -> {}", clock.mode());
    } else if mode_button.is_released(true) {
        mode_button.mark_long_press_action();
        enter(clock, next_setting(clock.mode()));

        #[cfg(feature = "defmt")]
        defmt::debug!("controls: tap -> {}", clock.mode());
    }

    let up_pressed = take_press(up);
    let down_pressed = take_press(down);

    if !clock.is_in_any_set() {
        return Adjust::None;
    }

    match (up_pressed, down_pressed) {
        (true, false) => Adjust::Increment,
        (false, true) => Adjust::Decrement,
        _ => Adjust::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Level::{High, Low};

    fn idle() -> Debouncer {
        Debouncer::new(High, 100)
    }

    #[test]
    fn tap_cycle_covers_every_mode() {
        assert_eq!(next_setting(Mode::Clock), Mode::Temperature);
        assert_eq!(next_setting(Mode::Temperature), Mode::Clock);
        assert_eq!(next_setting(Mode::SetTime), Mode::SetWakeAlarm);
        assert_eq!(next_setting(Mode::SetWakeAlarm), Mode::SetSleepAlarm);
        assert_eq!(next_setting(Mode::SetSleepAlarm), Mode::Clock);
    }

    #[test]
    fn enter_uses_matching_setter() {
        let mut clock = ClockMode::new();
        for mode in Mode::ALL {
            enter(&mut clock, mode);
            assert_eq!(clock.mode(), mode);
        }
    }

    #[test]
    fn tap_fires_on_release_only_once() {
        let mut clock = ClockMode::new();
        let mut mode_button = idle();
        let (mut up, mut down) = (idle(), idle());

        mode_button.update(0, Low);
        handle_buttons(&mut clock, &mut mode_button, &mut up, &mut down);
        assert!(clock.is_clock());

        mode_button.update(10, High);
        handle_buttons(&mut clock, &mut mode_button, &mut up, &mut down);
        assert!(clock.is_temperature());

        // Still the release tick as far as the level pair is concerned.
        handle_buttons(&mut clock, &mut mode_button, &mut up, &mut down);
        assert!(clock.is_temperature());
    }

    #[test]
    fn long_press_enters_and_leaves_setting() {
        let mut clock = ClockMode::new();
        let mut mode_button = idle();
        let (mut up, mut down) = (idle(), idle());

        mode_button.update(0, Low);
        mode_button.update(101, Low);
        handle_buttons(&mut clock, &mut mode_button, &mut up, &mut down);
        assert!(clock.is_set_time());

        // Releasing after the long press is not also a tap.
        mode_button.update(150, High);
        handle_buttons(&mut clock, &mut mode_button, &mut up, &mut down);
        assert!(clock.is_set_time());

        mode_button.update(200, Low);
        mode_button.update(301, Low);
        handle_buttons(&mut clock, &mut mode_button, &mut up, &mut down);
        assert!(clock.is_clock());
    }

    #[test]
    fn adjust_only_while_editing() {
        let mut clock = ClockMode::new();
        let mut mode_button = idle();
        let mut up = idle();
        let mut down = idle();

        up.update(0, Low);
        assert_eq!(
            handle_buttons(&mut clock, &mut mode_button, &mut up, &mut down),
            Adjust::None
        );

        clock.set_set_wake_alarm();
        up.update(10, High);
        up.update(20, Low);
        assert_eq!(
            handle_buttons(&mut clock, &mut mode_button, &mut up, &mut down),
            Adjust::Increment
        );

        down.update(30, Low);
        assert_eq!(
            handle_buttons(&mut clock, &mut mode_button, &mut up, &mut down),
            Adjust::Decrement
        );
    }

    #[test]
    fn glitch_after_press_adjusts_once() {
        let mut clock = ClockMode::new();
        clock.set_set_time();
        let mut mode_button = idle();
        let mut up = Debouncer::new(High, 1000);
        up.set_debounce_time(50);
        let mut down = idle();

        // Press accepted at t=50, one HIGH sample at t=55 freezes the
        // stable pair at HIGH -> LOW for another debounce window.
        let mut increments = 0;
        for now in (0..=200).step_by(5) {
            let level = if now == 55 { High } else { Low };
            up.update(now, level);
            if handle_buttons(&mut clock, &mut mode_button, &mut up, &mut down)
                == Adjust::Increment
            {
                increments += 1;
            }
        }
        assert_eq!(increments, 1);
    }

    #[test]
    fn press_outside_setting_is_not_replayed_on_entry() {
        let mut clock = ClockMode::new();
        let mut mode_button = idle();
        let mut up = idle();
        let mut down = idle();

        up.update(0, Low);
        handle_buttons(&mut clock, &mut mode_button, &mut up, &mut down);

        clock.set_set_time();
        assert_eq!(
            handle_buttons(&mut clock, &mut mode_button, &mut up, &mut down),
            Adjust::None
        );
    }

    #[test]
    fn both_adjust_buttons_cancel_out() {
        let mut clock = ClockMode::new();
        clock.set_set_time();
        let mut mode_button = idle();
        let mut up = idle();
        let mut down = idle();
        up.update(0, Low);
        down.update(0, Low);
        assert_eq!(
            handle_buttons(&mut clock, &mut mode_button, &mut up, &mut down),
            Adjust::None
        );
    }
}
