use std::fmt;

/// Keyboard key identifier.
///
/// The runtime maps platform key codes onto these variants. Keys without a
/// variant arrive as `Key::Unknown(code)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The user asked to close the window. The application decides when to
    /// actually stop.
    Quit,

    Key {
        key: Key,
        state: KeyState,
        /// True when the event is an OS key-repeat.
        repeat: bool,
    },
}

impl InputEvent {
    /// Shorthand for a fresh (non-repeat) key press.
    pub fn key_down(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    pub fn key_up(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Released, repeat: false }
    }

    /// Returns the key if this is a press (including repeats).
    pub fn pressed_key(&self) -> Option<Key> {
        match self {
            InputEvent::Key { key, state: KeyState::Pressed, .. } => Some(*key),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
