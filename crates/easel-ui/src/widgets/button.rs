use easel_engine::coords::{Rect, Vec2};
use easel_engine::scene::{TextAlign, TextBaseline};

use crate::painter::Painter;
use crate::widget::{Declaration, WidgetId, WidgetKind};

use super::Visuals;

/// A clickable box with a centred label.
///
/// Defaults to a 100×50 box at the origin. The id defaults to
/// `button-{label}`, so two buttons with the same label share state unless
/// one is given an explicit [`id`](Self::id).
///
/// # Example
/// ```rust,ignore
/// if ui.button(Button::new("Save").at(20.0, 20.0).size(120.0, 40.0)) {
///     save();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    rect: Rect,
    id: Option<WidgetId>,
}

impl Button {
    pub const DEFAULT_SIZE: Vec2 = Vec2::new(100.0, 50.0);

    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rect: Rect::from_origin_size(Vec2::zero(), Self::DEFAULT_SIZE),
            id: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.rect.origin = Vec2::new(x, y);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.rect.size = Vec2::new(width, height);
        self
    }

    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn id(mut self, id: impl Into<WidgetId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn widget_id(&self) -> WidgetId {
        self.id.clone().unwrap_or_else(|| WidgetId::new(format!("button-{}", self.label)))
    }

    pub(crate) fn into_declaration(self) -> Declaration {
        Declaration {
            id: self.widget_id(),
            kind: WidgetKind::Button { rect: self.rect, label: self.label },
        }
    }
}

pub(crate) fn paint(painter: &mut Painter<'_>, rect: Rect, label: &str, visuals: Visuals) {
    let theme = painter.theme().clone();
    let inner = rect.inset(theme.border_size);

    painter.frame(rect);
    painter.overlay(inner, visuals.hover * theme.hover_overlay_alpha as f64);
    painter.clipped(inner, |p| {
        p.text(label, rect.center(), TextAlign::Center, TextBaseline::Middle, theme.text_color);
    });
    painter.overlay(rect, visuals.flash * theme.flash_overlay_alpha as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builder_docs() {
        let decl = Button::new("Go").into_declaration();
        assert_eq!(decl.id, WidgetId::new("button-Go"));
        assert_eq!(decl.hit_rect(), Some(Rect::new(0.0, 0.0, 100.0, 50.0)));
    }

    #[test]
    fn explicit_id_and_geometry() {
        let decl = Button::new("Go").id("go-2").at(5.0, 6.0).size(7.0, 8.0).into_declaration();
        assert_eq!(decl.id.as_str(), "go-2");
        assert_eq!(decl.hit_rect(), Some(Rect::new(5.0, 6.0, 7.0, 8.0)));
    }
}
