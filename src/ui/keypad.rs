//! 4-way keypad decoding and long-press tracking.
//!
//! The keypad is four discrete active-high pins sampled once per tick.
//! Simultaneous presses resolve with a fixed priority (up > down > left >
//! right, first match wins); there are no combo codes. A fifth, center
//! button exists on the board but is not polled - see [`Key::Menu`].

/// Discrete key code derived from one pin sample.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
    /// Reserved for the center button. The pin is wired but never sampled,
    /// so [`decode`] cannot produce this code; the dispatch arm for it is
    /// kept for when the wiring lands.
    Menu,
}

/// Raw pin levels for one poll (active-high).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct KeySample {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Resolve a pin sample to a key code. Priority: up > down > left > right.
pub fn decode(sample: KeySample) -> Key {
    if sample.up {
        Key::Up
    } else if sample.down {
        Key::Down
    } else if sample.left {
        Key::Left
    } else if sample.right {
        Key::Right
    } else {
        Key::None
    }
}

/// Per-tick keypad poller.
///
/// Tracks the previous key code so a held key can be recognised: the
/// long-press counter goes up by one for every poll with an unchanged
/// code (including `None` runs) and resets to zero on any change.
#[derive(Debug, Default)]
pub struct Keypad {
    key: Key,
    prev: Key,
    long_press: u32,
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the keypad once.
    pub fn poll(&mut self, sample: KeySample) {
        self.prev = self.key;
        self.key = decode(sample);

        if self.prev == self.key {
            self.long_press = self.long_press.saturating_add(1);
        } else {
            self.long_press = 0;
        }
    }

    /// Key code derived by the most recent poll.
    pub fn key(&self) -> Key {
        self.key
    }

    /// Number of consecutive polls the current code has been stable.
    pub fn long_press(&self) -> u32 {
        self.long_press
    }
}

/// Falling-edge detector for a single active-low push button.
///
/// Reports a press exactly once per HIGH→LOW transition; a button held
/// LOW does not re-trigger.
#[derive(Debug)]
pub struct PushButton {
    was_high: bool,
}

impl PushButton {
    pub fn new() -> Self {
        // Idle level is HIGH (pull-up), so a LOW at the very first poll
        // counts as a press.
        Self { was_high: true }
    }

    /// Feed the current level; returns `true` on a HIGH→LOW edge.
    pub fn falling_edge(&mut self, level_high: bool) -> bool {
        let pressed = self.was_high && !level_high;
        self.was_high = level_high;
        pressed
    }
}

impl Default for PushButton {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(up: bool, down: bool, left: bool, right: bool) -> KeySample {
        KeySample {
            up,
            down,
            left,
            right,
        }
    }

    #[test]
    fn decode_idle_is_none() {
        assert_eq!(decode(KeySample::default()), Key::None);
    }

    #[test]
    fn decode_single_keys() {
        assert_eq!(decode(sample(true, false, false, false)), Key::Up);
        assert_eq!(decode(sample(false, true, false, false)), Key::Down);
        assert_eq!(decode(sample(false, false, true, false)), Key::Left);
        assert_eq!(decode(sample(false, false, false, true)), Key::Right);
    }

    #[test]
    fn decode_priority_up_beats_left() {
        assert_eq!(decode(sample(true, false, true, false)), Key::Up);
    }

    #[test]
    fn decode_priority_order() {
        assert_eq!(decode(sample(true, true, true, true)), Key::Up);
        assert_eq!(decode(sample(false, true, true, true)), Key::Down);
        assert_eq!(decode(sample(false, false, true, true)), Key::Left);
    }

    #[test]
    fn long_press_counts_stable_code() {
        let mut keypad = Keypad::new();
        for expected in 1..=5 {
            keypad.poll(sample(false, false, false, true));
            assert_eq!(keypad.key(), Key::Right);
            // First poll transitions None -> Right, so the counter lags
            // the poll count by one.
            assert_eq!(keypad.long_press(), expected - 1);
        }
    }

    #[test]
    fn long_press_resets_on_change() {
        let mut keypad = Keypad::new();
        keypad.poll(sample(true, false, false, false));
        keypad.poll(sample(true, false, false, false));
        keypad.poll(sample(true, false, false, false));
        assert_eq!(keypad.long_press(), 2);

        keypad.poll(sample(false, true, false, false));
        assert_eq!(keypad.key(), Key::Down);
        assert_eq!(keypad.long_press(), 0);
    }

    #[test]
    fn long_press_counts_idle_runs_too() {
        let mut keypad = Keypad::new();
        keypad.poll(KeySample::default());
        keypad.poll(KeySample::default());
        assert_eq!(keypad.key(), Key::None);
        assert_eq!(keypad.long_press(), 2);
    }

    #[test]
    fn push_button_fires_once_per_press() {
        let mut btn = PushButton::new();
        assert!(!btn.falling_edge(true)); // idle
        assert!(btn.falling_edge(false)); // press
        assert!(!btn.falling_edge(false)); // held
        assert!(!btn.falling_edge(false)); // still held
        assert!(!btn.falling_edge(true)); // release
        assert!(btn.falling_edge(false)); // next press
    }
}
