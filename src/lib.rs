//! WiFi status panel for a 128x64 SSD1306 OLED.
//!
//! Pure-logic library: frame/overlay engine, keypad decoding, signal
//! quality estimation and all rendering, generic over any
//! `DrawTarget<Color = BinaryColor>`. Everything here compiles and tests
//! on the host - no embedded hardware required.
//!
//! Usage: `cargo test --lib`
//!
//! The embedded binary (`main.rs`, feature `embedded`) adds the ESP32
//! glue: pins, I²C display, esp-wifi station and the perpetual tick task.

#![cfg_attr(not(test), no_std)]

pub mod canvas;
pub mod config;
pub mod error;
pub mod images;
pub mod net;
pub mod signal;
pub mod ui;
