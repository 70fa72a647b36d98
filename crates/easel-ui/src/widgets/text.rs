use easel_engine::coords::Vec2;
use easel_engine::scene::{TextAlign, TextBaseline};

use crate::painter::Painter;
use crate::widget::{Declaration, WidgetId, WidgetKind};

/// A static label. Never hovered or clicked.
///
/// Left/top aligned by default. The id is `text-{text}`.
#[derive(Debug, Clone)]
pub struct Text {
    text: String,
    pos: Vec2,
    align: TextAlign,
    baseline: TextBaseline,
}

impl Text {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            pos: Vec2::new(x, y),
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub(crate) fn into_declaration(self) -> Declaration {
        Declaration {
            id: WidgetId::new(format!("text-{}", self.text)),
            kind: WidgetKind::Text {
                pos: self.pos,
                text: self.text,
                align: self.align,
                baseline: self.baseline,
            },
        }
    }
}

pub(crate) fn paint(painter: &mut Painter<'_>, pos: Vec2, text: &str, align: TextAlign, baseline: TextBaseline) {
    let color = painter.theme().text_color;
    painter.text(text, pos, align, baseline, color);
}
