use std::collections::HashSet;

use crate::coords::Vec2;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyPress,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
};

/// Current input state for a single window.
///
/// Holds "is down" information and the pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels; `None` while off the surface.
    pub pointer_pos: Option<Vec2>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Focus loss mid-press would otherwise leave keys stuck down.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, modifiers, text, .. } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                        if !modifiers.is_command() {
                            frame.key_presses.push(KeyPress::from_key_event(*key, text.as_deref()));
                        }
                    }
                    KeyState::Released => {
                        self.keys_down.remove(key);
                        frame.keys_released.insert(*key);
                    }
                }
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
                self.modifiers = *modifiers;

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }

            InputEvent::MouseWheel { delta, modifiers } => {
                self.modifiers = *modifiers;
                let (dx, dy) = delta.to_pixels();
                frame.wheel += Vec2::new(dx, dy);
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use crate::input::MouseWheelDelta;

    use super::*;

    fn key(key: Key, state: KeyState, modifiers: Modifiers, text: Option<&str>) -> InputEvent {
        InputEvent::Key { key, state, modifiers, text: text.map(str::to_owned), repeat: false }
    }

    fn press_left(x: f64, y: f64) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    #[test]
    fn press_is_edge_triggered_while_held() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press_left(3.0, 4.0));
        assert!(frame.button_pressed(MouseButton::Left));
        assert_eq!(state.pointer_pos, Some(Vec2::new(3.0, 4.0)));
        frame.clear();

        // A duplicate press (no release in between) is not a new edge.
        state.apply_event(&mut frame, press_left(3.0, 4.0));
        assert!(!frame.button_pressed(MouseButton::Left));
        assert!(state.button_down(MouseButton::Left));
    }

    #[test]
    fn command_modified_keys_are_not_typed() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let ctrl = Modifiers { ctrl: true, ..Modifiers::default() };
        let shift = Modifiers { shift: true, ..Modifiers::default() };

        state.apply_event(&mut frame, key(Key::Char('c'), KeyState::Pressed, ctrl, Some("c")));
        state.apply_event(&mut frame, key(Key::Char('c'), KeyState::Released, ctrl, None));
        state.apply_event(&mut frame, key(Key::Char('h'), KeyState::Pressed, shift, Some("H")));
        state.apply_event(&mut frame, key(Key::Backspace, KeyState::Pressed, Modifiers::default(), None));

        assert_eq!(frame.key_presses, vec![KeyPress::Char('H'), KeyPress::Key(Key::Backspace)]);
        assert!(frame.key_pressed(Key::Char('c')));
        assert!(!state.key_down(Key::Char('c')));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press_left(1.0, 1.0));
        state.apply_event(&mut frame, InputEvent::MouseWheel {
            delta: MouseWheelDelta::Line { x: 0.0, y: 1.0 },
            modifiers: Modifiers::default(),
        });
        state.apply_event(&mut frame, key(Key::Char('a'), KeyState::Pressed, Modifiers::default(), Some("a")));
        assert_eq!(frame.wheel, Vec2::new(0.0, 16.0));

        frame.clear();
        frame.clear();
        assert!(frame.events.is_empty());
        assert!(frame.buttons_pressed.is_empty());
        assert!(frame.keys_pressed.is_empty());
        assert!(frame.key_presses.is_empty());
        assert_eq!(frame.wheel, Vec2::zero());
        // Held state survives the per-frame reset.
        assert!(state.button_down(MouseButton::Left));
        assert!(state.key_down(Key::Char('a')));
    }

    #[test]
    fn focus_loss_releases_held_input() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press_left(0.0, 0.0));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(state.buttons_down.is_empty());
    }
}
