//! Keyboard focus.
//!
//! Focus is sticky: it only moves on a pointer press (to whatever is under
//! the pointer, possibly nothing) or when the focused text box gives it up on
//! Enter or Escape.

use crate::widget::WidgetId;

#[derive(Debug, Default)]
pub struct FocusManager {
    focused: Option<WidgetId>,
}

impl FocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn focused(&self) -> Option<&WidgetId> {
        self.focused.as_ref()
    }

    #[inline]
    pub fn is_focused(&self, id: &WidgetId) -> bool {
        self.focused.as_ref() == Some(id)
    }

    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused.is_some()
    }

    /// Moves focus to `id` (or nowhere).
    pub fn set(&mut self, id: Option<WidgetId>) {
        if self.focused != id {
            log::debug!("focus: {:?} -> {:?}", self.focused, id);
        }
        self.focused = id;
    }

    pub fn clear(&mut self) {
        self.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear() {
        let mut focus = FocusManager::new();
        let a = WidgetId::new("a");

        focus.set(Some(a.clone()));
        assert!(focus.is_focused(&a));
        assert!(!focus.is_focused(&WidgetId::new("b")));
        assert_eq!(focus.focused(), Some(&a));

        focus.clear();
        assert!(!focus.has_focus());
    }
}
