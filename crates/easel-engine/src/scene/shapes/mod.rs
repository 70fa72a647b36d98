//! Per-shape payloads and their `DrawList` push helpers.

pub(crate) mod circle;
pub(crate) mod rect;
pub(crate) mod text;

use crate::paint::Color;

/// Outline of a shape: `width` in the item's coordinate units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f64,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}
