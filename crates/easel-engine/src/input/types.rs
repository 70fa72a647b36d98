use std::fmt;

/// Keyboard key identifier.
///
/// Named keys cover what the UI and the tools react to. Printable keys are
/// reported as `Char` with the unshifted, lowercase character so held-key
/// queries do not depend on the shift state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Delete,
    Space,

    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    /// Printable key, lowercased.
    Char(char),

    /// Platform-dependent key not represented above.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A typed key press, queued for text entry.
///
/// `Char` carries the produced character (shift applied); everything else is
/// reported as the named key.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyPress {
    Char(char),
    Key(Key),
}

impl KeyPress {
    /// Builds the press for a key event: a single non-control character of
    /// `text` wins over the key identity.
    pub fn from_key_event(key: Key, text: Option<&str>) -> Self {
        let mut chars = text.unwrap_or_default().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_control() => KeyPress::Char(ch),
            _ => KeyPress::Key(key),
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }

    /// True when a shortcut modifier (not shift) is held.
    pub fn is_command(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Mouse wheel delta.
///
/// `Line` is notched wheel input; `Pixel` is high precision (touchpads).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f64, y: f64 },
    Pixel { x: f64, y: f64 },
}

impl MouseWheelDelta {
    /// Logical pixels scrolled per wheel line.
    pub const LINE_HEIGHT: f64 = 16.0;

    /// Delta in logical pixels.
    pub fn to_pixels(self) -> (f64, f64) {
        match self {
            MouseWheelDelta::Line { x, y } => (x * Self::LINE_HEIGHT, y * Self::LINE_HEIGHT),
            MouseWheelDelta::Pixel { x, y } => (x, y),
        }
    }
}

/// Pointer button event, positioned in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f64,
    pub y: f64,
    pub modifiers: Modifiers,
}

/// Platform-agnostic input events.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// Text the key produced, if any.
        text: Option<String>,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    /// Pointer moved, in logical pixels.
    PointerMoved { x: f64, y: f64 },
    PointerButton(PointerButtonEvent),

    MouseWheel {
        delta: MouseWheelDelta,
        modifiers: Modifiers,
    },

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(ch) => write!(f, "{ch}"),
            other => write!(f, "{other:?}"),
        }
    }
}
