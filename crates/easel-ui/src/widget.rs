use std::fmt;

use easel_engine::coords::{Rect, Vec2};
use easel_engine::scene::{TextAlign, TextBaseline};

use crate::binding::Binding;

/// Stable key identifying a widget across frames.
///
/// Hover, focus, click and animation state are all keyed by it, so a widget
/// keeps its state as long as it is declared with the same id every frame.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct WidgetId(String);

impl WidgetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for WidgetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// What was declared, with the data each variant needs.
#[derive(Debug, Clone)]
pub enum WidgetKind {
    Button {
        rect: Rect,
        label: String,
    },
    Checkbox {
        rect: Rect,
        value: Binding<bool>,
    },
    TextBox {
        rect: Rect,
        value: Binding<String>,
        placeholder: Option<String>,
    },
    /// Static label. Never hovered, clicked or focused.
    Text {
        pos: Vec2,
        text: String,
        align: TextAlign,
        baseline: TextBaseline,
    },
}

/// One widget declared for the current frame.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub id: WidgetId,
    pub kind: WidgetKind,
}

impl Declaration {
    /// Rect used for pointer hit testing, or `None` for non-interactive widgets.
    pub fn hit_rect(&self) -> Option<Rect> {
        match &self.kind {
            WidgetKind::Button { rect, .. }
            | WidgetKind::Checkbox { rect, .. }
            | WidgetKind::TextBox { rect, .. } => Some(*rect),
            WidgetKind::Text { .. } => None,
        }
    }

    /// True if the closed hit rect contains `pointer`.
    #[inline]
    pub fn is_hit(&self, pointer: Vec2) -> bool {
        self.hit_rect().is_some_and(|r| r.contains_closed(pointer))
    }
}
