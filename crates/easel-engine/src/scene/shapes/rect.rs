use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rectangle draw payload. Either part may be absent: a fill-only rect, an
/// outline-only rect, or both.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub fill: Option<Color>,
    pub border: Option<Border>,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, fill: Option<Color>, border: Option<Border>) -> Self {
        Self { rect, fill, border }
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, fill: Option<Color>, border: Option<Border>) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, fill, border)));
    }

    /// Records a solid rectangle draw command.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push_rect(z, rect, Some(color), None);
    }

    /// Records an unfilled rectangle outline.
    #[inline]
    pub fn push_stroke_rect(&mut self, z: ZIndex, rect: Rect, border: Border) {
        self.push_rect(z, rect, None, Some(border));
    }
}
