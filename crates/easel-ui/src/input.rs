use easel_engine::coords::Vec2;
use easel_engine::input::{InputFrame, InputState, KeyPress, MouseButton};

/// Snapshot of input state for one UI commit.
///
/// Build it from the engine collectors with [`UiInput::from_input`], or fill
/// it directly in tests and custom hosts.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Pointer position in logical pixels. NaN once the pointer has left
    /// the surface, rather than its last known position.
    pub pointer: Vec2,
    /// `true` while the primary button is held.
    pub pointer_down: bool,
    /// `true` only in the frame the primary button went down.
    pub pointer_pressed: bool,
    /// Typed key presses since the last frame, in order.
    pub key_presses: Vec<KeyPress>,
}

impl UiInput {
    pub fn from_input(state: &InputState, frame: &InputFrame) -> Self {
        Self {
            // Off-surface pointer: park it where no widget can be hit.
            pointer: state.pointer_pos.unwrap_or(Vec2::new(f64::NAN, f64::NAN)),
            pointer_down: state.button_down(MouseButton::Left),
            pointer_pressed: frame.button_pressed(MouseButton::Left),
            key_presses: frame.key_presses.clone(),
        }
    }

    /// Pointer at `pointer` with no buttons or keys.
    pub fn hover(pointer: Vec2) -> Self {
        Self { pointer, ..Self::default() }
    }

    /// Pointer at `pointer` with the primary button going down this frame.
    pub fn press(pointer: Vec2) -> Self {
        Self { pointer, pointer_down: true, pointer_pressed: true, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use easel_engine::input::{InputEvent, Key, KeyState, Modifiers};

    use super::*;

    #[test]
    fn off_surface_pointer_hits_nothing() {
        let input = UiInput::from_input(&InputState::default(), &InputFrame::default());
        assert!(!input.pointer.is_finite());
        assert!(!easel_engine::coords::Rect::new(-1e9, -1e9, 2e9, 2e9).contains_closed(input.pointer));
    }

    #[test]
    fn carries_typed_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::Key {
            key: Key::Char('q'),
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            text: Some("q".into()),
            repeat: false,
        });
        let input = UiInput::from_input(&state, &frame);
        assert_eq!(input.key_presses, vec![KeyPress::Char('q')]);
        assert!(!input.pointer_pressed);
    }
}
