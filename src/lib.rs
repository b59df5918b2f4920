//! Button and mode logic for the toddler clock.
//!
//! Everything in here is pure state-machine code that can be tested on
//! the host (no embedded hardware required):
//!
//! - [`input`]: debounced buttons with press/release/long-press detection
//! - [`mode`]: the clock's UI mode machine
//! - [`ui`]: mapping from button state to mode changes
//!
//! Usage: `cargo test --lib`
//!
//! The firmware binary (`src/main.rs`, `embedded` feature) only wires
//! these to GPIO and the embassy timer.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod input;
pub mod mode;
pub mod ui;

pub use error::Error;
pub use input::{Button, CountMode, Debouncer, Level};
pub use mode::{ClockMode, Mode};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
