use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// Horizontal placement of text relative to its anchor point.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement of text relative to its anchor point.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TextBaseline {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// `None` = the renderer's default face.
    pub font: Option<FontId>,
    /// Font size in logical pixels.
    pub size: f64,
    pub color: Color,
    /// Anchor point; `align` and `baseline` say how the text sits around it.
    pub anchor: Vec2,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextCmd {
    /// Top-left corner of the text block, given its measured width.
    pub fn top_left(&self, width: f64) -> Vec2 {
        let x = match self.align {
            TextAlign::Left => self.anchor.x,
            TextAlign::Center => self.anchor.x - width / 2.0,
            TextAlign::Right => self.anchor.x - width,
        };
        let y = match self.baseline {
            TextBaseline::Top => self.anchor.y,
            TextBaseline::Middle => self.anchor.y - self.size / 2.0,
            TextBaseline::Bottom => self.anchor.y - self.size,
        };
        Vec2::new(x, y)
    }
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, z: ZIndex, cmd: TextCmd) {
        self.push(z, DrawCmd::Text(cmd));
    }
}
