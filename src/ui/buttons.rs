//! GPIO bindings for the 4-way keypad and the mode button.
//!
//! The keypad pins are active-high with internal pull-downs; the mode
//! button is the boot button, active-low with a pull-up. Sampling is
//! plain level reads once per tick - the decode and edge logic lives in
//! [`crate::ui::keypad`] where it can be tested on the host.

use esp_hal::gpio::Input;

use crate::ui::keypad::KeySample;

/// The four directional inputs, sampled together each tick.
pub struct KeypadPins {
    pub up: Input<'static>,
    pub down: Input<'static>,
    pub left: Input<'static>,
    pub right: Input<'static>,
}

impl KeypadPins {
    /// Snapshot the current pin levels.
    pub fn sample(&self) -> KeySample {
        KeySample {
            up: self.up.is_high(),
            down: self.down.is_high(),
            left: self.left.is_high(),
            right: self.right.is_high(),
        }
    }
}

/// Dedicated mode-select button (active-low).
pub struct ModeButton {
    pin: Input<'static>,
}

impl ModeButton {
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }

    /// Current logic level; the edge detector in the tick task turns
    /// this into one event per press.
    pub fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
