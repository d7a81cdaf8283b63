//! Unified error type for device bring-up.
//!
//! Rendering itself propagates the draw target's own error type; this
//! enum only covers the embedded init paths (display, WiFi). All
//! variants carry fixed-size data and implement `defmt::Format` for
//! on-target logging.

/// Top-level error type used by the embedded binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// I²C transaction to the display failed during init or flush.
    Display,

    /// The WiFi controller could not be initialised or started.
    WifiInit,

    /// Association with the configured AP failed.
    WifiConnect,
}
