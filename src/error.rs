//! Unified error type for toddler-clock.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.
//!
//! The button and mode state machines never fail; errors only come from
//! decoding raw integers back into typed values.

use core::fmt;

/// Top-level error type used across the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Raw value is not one of the edge-count policies.
    UnknownCountMode(u8),

    /// Raw value is not one of the encoded clock modes.
    UnknownMode(u8),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCountMode(raw) => write!(f, "unknown count mode {}", raw),
            Error::UnknownMode(raw) => write!(f, "unknown clock mode {:#04x}", raw),
        }
    }
}
