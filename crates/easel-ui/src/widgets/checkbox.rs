use easel_engine::coords::Rect;

use crate::binding::Binding;
use crate::painter::Painter;
use crate::widget::{Declaration, WidgetId, WidgetKind};

use super::Visuals;

/// Inset of the "checked" fill from the box edge.
const CHECK_INSET: f64 = 5.0;

/// A box that flips a bound `bool` each time it is clicked.
#[derive(Debug, Clone)]
pub struct Checkbox {
    id: WidgetId,
    rect: Rect,
    value: Binding<bool>,
}

impl Checkbox {
    pub fn new(id: impl Into<WidgetId>, rect: Rect, value: &Binding<bool>) -> Self {
        Self { id: id.into(), rect, value: value.clone() }
    }

    pub(crate) fn into_declaration(self) -> Declaration {
        Declaration {
            id: self.id,
            kind: WidgetKind::Checkbox { rect: self.rect, value: self.value },
        }
    }
}

pub(crate) fn toggle(value: &Binding<bool>) {
    value.update(|v| *v = !*v);
}

pub(crate) fn paint(painter: &mut Painter<'_>, rect: Rect, checked: bool, visuals: Visuals) {
    let theme = painter.theme().clone();

    painter.frame(rect);
    painter.overlay(rect.inset(theme.border_size), visuals.hover * theme.hover_overlay_alpha as f64);
    if checked {
        painter.fill_rect(rect.inset(CHECK_INSET), theme.text_color);
    }
    painter.overlay(rect, visuals.flash * theme.flash_overlay_alpha as f64);
}
