//! Application-wide constants and compile-time configuration.
//!
//! All pin assignments and timing parameters live here so they can be
//! tuned in one place.

// Button controller defaults

/// Debounce time a freshly constructed controller starts with (ms).
/// Zero disables bounce filtering until `set_debounce_time` is called.
pub const DEFAULT_DEBOUNCE_MS: u32 = 0;

/// Hold duration after which a press counts as a long press (ms).
pub const DEFAULT_LONG_PRESS_MS: u32 = 1000;

// Firmware timing

/// Button debounce time the firmware configures (ms).
pub const BUTTON_DEBOUNCE_MS: u32 = 50;

/// Main-loop poll cadence (ms). Must stay below both the debounce time
/// and the long-press threshold or edges get reported late.
pub const POLL_INTERVAL_MS: u64 = 5;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` are
// picked in `main.rs`. Adjust for your custom PCB.
//
//   Button MODE  → P0.11
//   Button UP    → P0.12
//   Button DOWN  → P0.24
//
// All buttons are active-low with the internal pull-up enabled.

const _: () = assert!(POLL_INTERVAL_MS < BUTTON_DEBOUNCE_MS as u64);
const _: () = assert!(BUTTON_DEBOUNCE_MS < DEFAULT_LONG_PRESS_MS);
