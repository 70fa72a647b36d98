use easel_engine::coords::{Rect, Vec2};
use easel_engine::input::{Key, KeyPress};
use easel_engine::scene::{TextAlign, TextBaseline};

use crate::binding::Binding;
use crate::painter::Painter;
use crate::widget::{Declaration, WidgetId, WidgetKind};

use super::Visuals;

/// Horizontal text offset from the box's left edge.
const TEXT_PADDING: f64 = 8.0;
/// Clip margin on the left and right of the box.
const CLIP_MARGIN: f64 = 4.0;
const CARET_WIDTH: f64 = 1.0;
const CARET_HEIGHT: f64 = 16.0;

/// A single-line text field editing a bound `String`.
///
/// Click to focus, type to append, Backspace deletes the last character,
/// Enter or Escape releases focus. Placeholder text shows at half opacity
/// while the value is empty.
#[derive(Debug, Clone)]
pub struct TextBox {
    id: WidgetId,
    rect: Rect,
    value: Binding<String>,
    placeholder: Option<String>,
}

impl TextBox {
    pub fn new(id: impl Into<WidgetId>, rect: Rect, value: &Binding<String>) -> Self {
        Self { id: id.into(), rect, value: value.clone(), placeholder: None }
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub(crate) fn into_declaration(self) -> Declaration {
        Declaration {
            id: self.id,
            kind: WidgetKind::TextBox {
                rect: self.rect,
                value: self.value,
                placeholder: self.placeholder,
            },
        }
    }
}

/// Result of feeding key presses to a focused text box.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EditOutcome {
    /// All keys consumed; the box keeps focus.
    Editing,
    /// Enter or Escape was pressed somewhere in the batch.
    Released,
}

/// Applies `keys` to `text` in order.
///
/// Characters append, Backspace removes the last character (nothing on an
/// empty string), Enter and Escape mark the box as released. The whole
/// batch is applied either way. Other named keys are ignored.
pub fn apply_keys(text: &mut String, keys: &[KeyPress]) -> EditOutcome {
    let mut outcome = EditOutcome::Editing;
    for key in keys {
        match key {
            KeyPress::Char(ch) => text.push(*ch),
            KeyPress::Key(Key::Backspace) => {
                text.pop();
            }
            KeyPress::Key(Key::Enter | Key::Escape) => outcome = EditOutcome::Released,
            KeyPress::Key(_) => {}
        }
    }
    outcome
}

pub(crate) fn paint(
    painter: &mut Painter<'_>,
    rect: Rect,
    value: &str,
    placeholder: Option<&str>,
    visuals: Visuals,
) {
    let theme = painter.theme().clone();
    let text_pos = Vec2::new(rect.origin.x + TEXT_PADDING, rect.center().y);
    let clip = Rect::new(
        rect.origin.x + CLIP_MARGIN,
        rect.origin.y,
        rect.size.x - CLIP_MARGIN * 2.0,
        rect.size.y,
    );

    painter.frame(rect);
    painter.overlay(rect.inset(theme.border_size), visuals.hover * theme.hover_overlay_alpha as f64);

    painter.clipped(clip, |p| {
        match placeholder {
            Some(hint) if value.is_empty() => {
                p.text(hint, text_pos, TextAlign::Left, TextBaseline::Middle, theme.text_color.faded(0.5));
            }
            _ => p.text(value, text_pos, TextAlign::Left, TextBaseline::Middle, theme.text_color),
        }

        if visuals.focused {
            let caret_x = text_pos.x + p.text_width(value);
            let caret = Rect::new(caret_x, text_pos.y - CARET_HEIGHT / 2.0, CARET_WIDTH, CARET_HEIGHT);
            p.fill_rect(caret, theme.text_color);
        }
    });

    painter.overlay(rect, visuals.flash * theme.flash_overlay_alpha as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<KeyPress> {
        s.chars().map(KeyPress::Char).collect()
    }

    #[test]
    fn typing_and_backspace() {
        let mut text = String::new();
        let keys = [
            KeyPress::Char('h'),
            KeyPress::Char('i'),
            KeyPress::Key(Key::Backspace),
            KeyPress::Char('!'),
        ];
        assert_eq!(apply_keys(&mut text, &keys), EditOutcome::Editing);
        assert_eq!(text, "h!");
    }

    #[test]
    fn backspace_on_empty_is_noop() {
        let mut text = String::new();
        apply_keys(&mut text, &[KeyPress::Key(Key::Backspace), KeyPress::Key(Key::Backspace)]);
        assert_eq!(text, "");
    }

    #[test]
    fn backspace_removes_whole_characters() {
        let mut text = String::from("né");
        apply_keys(&mut text, &[KeyPress::Key(Key::Backspace)]);
        assert_eq!(text, "n");
    }

    #[test]
    fn enter_and_escape_release_but_keep_consuming() {
        let mut text = String::new();
        let mut keys = chars("ab");
        keys.push(KeyPress::Key(Key::Enter));
        keys.extend(chars("cd"));
        assert_eq!(apply_keys(&mut text, &keys), EditOutcome::Released);
        assert_eq!(text, "abcd");

        let mut text = String::from("x");
        assert_eq!(apply_keys(&mut text, &[KeyPress::Key(Key::Escape)]), EditOutcome::Released);
        assert_eq!(text, "x");
    }

    #[test]
    fn other_named_keys_are_ignored() {
        let mut text = String::from("a");
        apply_keys(&mut text, &[KeyPress::Key(Key::ArrowLeft), KeyPress::Key(Key::Tab)]);
        assert_eq!(text, "a");
    }
}
