//! User interface subsystem - paged OLED frames + keypad.
//!
//! A fixed set of frames (one page of content each) slides horizontally
//! under a status overlay that is drawn on every tick. A 4-way keypad
//! and a dedicated mode button drive navigation.
//!
//! ## Components
//!
//! - **Engine**: frame/overlay scheduling, slide transitions, time budget
//! - **Keypad**: 4 directional pins decoded with a fixed priority
//! - **Frames**: WiFi logo page and network-info page
//! - **Overlay**: IP address, signal bars and separator line

pub mod engine;
pub mod frames;
pub mod keypad;
pub mod overlay;

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;

use engine::UiEngine;
use keypad::{Key, KeySample, Keypad, PushButton};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Interaction modes reserved for the (unfinished) on-screen menu.
///
/// Only ever written when [`Key::Menu`] is observed; nothing reads it back
/// yet. Kept so the capture semantics survive until the menu lands.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiMode {
    #[default]
    Menu,
    Select,
    Move,
}

impl UiMode {
    /// Map a frame index to a mode, as captured on a menu keypress.
    fn from_frame_index(index: usize) -> Self {
        match index {
            0 => UiMode::Menu,
            1 => UiMode::Select,
            _ => UiMode::Move,
        }
    }
}

/// Input and session state owned by the tick task.
///
/// Replaces what used to be a handful of module-level variables: the keypad
/// poller, the mode-button edge state and the captured [`UiMode`].
#[derive(Debug, Default)]
pub struct InputState {
    keypad: Keypad,
    mode_button: PushButton,
    mode: UiMode,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one tick's raw pin levels and forward navigation to the engine.
    ///
    /// `mode_level_high` is the dedicated mode-select button (active-low):
    /// a HIGH→LOW edge advances to the next frame exactly once per press.
    /// The directional keys dispatch on level, every tick they are held;
    /// the engine ignoring navigation mid-transition is what rate-limits a
    /// held key.
    pub fn dispatch<D>(
        &mut self,
        engine: &mut UiEngine<'_, D>,
        sample: KeySample,
        mode_level_high: bool,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        if self.mode_button.falling_edge(mode_level_high) {
            engine.next_frame();
        }

        self.keypad.poll(sample);

        match self.keypad.key() {
            Key::Left => engine.previous_frame(),
            Key::Right => engine.next_frame(),
            Key::Up => engine.set_auto_advance(true),
            Key::Down => engine.set_auto_advance(false),
            Key::Menu => self.mode = UiMode::from_frame_index(engine.current_frame()),
            Key::None => {}
        }
    }

    /// The keypad poller, for long-press inspection.
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The last captured interaction mode.
    pub fn mode(&self) -> UiMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_defaults_to_menu() {
        assert_eq!(InputState::new().mode(), UiMode::Menu);
    }

    #[test]
    fn mode_capture_maps_frame_indices() {
        assert_eq!(UiMode::from_frame_index(0), UiMode::Menu);
        assert_eq!(UiMode::from_frame_index(1), UiMode::Select);
        assert_eq!(UiMode::from_frame_index(2), UiMode::Move);
        assert_eq!(UiMode::from_frame_index(7), UiMode::Move);
    }
}
