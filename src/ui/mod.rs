//! User interface subsystem - physical buttons driving the clock mode.
//!
//! ## Components
//!
//! - **Buttons**: 3 tactile switches (MODE, UP, DOWN), debounced by
//!   [`crate::input`]
//! - **Controls**: maps debounced button state onto [`crate::mode::ClockMode`]

pub mod controls;

pub use controls::{handle_buttons, Adjust};
