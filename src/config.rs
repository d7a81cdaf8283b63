//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, display geometry, and animation timing
//! parameters live here so they can be tuned in one place.

// Display

/// OLED width in pixels.
pub const DISPLAY_WIDTH: u32 = 128;

/// OLED height in pixels.
pub const DISPLAY_HEIGHT: u32 = 64;

/// Target frame rate. 30 FPS leaves the CPU plenty of idle time
/// for the WiFi stack between ticks.
pub const TARGET_FPS: u32 = 30;

/// Duration of a slide transition between frames (ms).
pub const TRANSITION_DURATION_MS: u64 = 500;

/// Dwell time on a frame before auto-advance kicks in (ms).
pub const FRAME_DURATION_MS: u64 = 5_000;

// GPIO pin assignments (Heltec WiFi Kit 32 style wiring)
//
// These are logical names; the actual `esp_hal::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your board.
//
//   Keypad UP      → GPIO14
//   Keypad DOWN    → GPIO26
//   Keypad LEFT    → GPIO12
//   Keypad RIGHT   → GPIO13
//   Keypad CENTER  → GPIO27 (wired, not polled - see `ui::Key::Menu`)
//   Mode button    → GPIO0  (boot button, active-low)
//   I²C SDA        → GPIO4
//   I²C SCL        → GPIO15
//   OLED reset     → GPIO16

/// I²C address of the SSD1306 controller.
pub const DISPLAY_I2C_ADDR: u8 = 0x3c;

// Network status

/// Capacity of the hostname / SSID strings in a [`crate::net::NetSnapshot`].
pub const NET_NAME_CAPACITY: usize = 32;

/// How often the WiFi task refreshes the shared snapshot (ms).
pub const NET_REFRESH_MS: u64 = 1_000;
