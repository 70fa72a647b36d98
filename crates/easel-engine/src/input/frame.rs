use std::collections::HashSet;

use crate::coords::Vec2;

use super::types::{InputEvent, Key, KeyPress, MouseButton};

/// Per-frame input deltas.
///
/// `InputState` holds what is currently down; `InputFrame` holds what changed
/// since the last [`clear`](Self::clear).
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    pub keys_pressed: HashSet<Key>,
    pub keys_released: HashSet<Key>,

    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,

    /// Typed key presses in arrival order, repeats included.
    /// Presses made while Ctrl, Alt or Meta is held are not recorded.
    pub key_presses: Vec<KeyPress>,

    /// Accumulated wheel delta in logical pixels.
    pub wheel: Vec2,
}

impl InputFrame {
    /// End-of-frame reset. Idempotent.
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.key_presses.clear();
        self.wheel = Vec2::zero();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    #[inline]
    pub fn button_pressed(&self, btn: MouseButton) -> bool {
        self.buttons_pressed.contains(&btn)
    }

    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}
