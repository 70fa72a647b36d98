use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Filled and/or outlined circle. `radius` is in the item's coordinate
/// units, so under a camera scope it scales with zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f64,
    pub fill: Option<Color>,
    pub border: Option<Border>,
}

impl DrawList {
    pub fn push_circle(&mut self, z: ZIndex, circle: CircleCmd) {
        debug_assert!(circle.radius >= 0.0, "negative circle radius");
        self.push(z, DrawCmd::Circle(circle));
    }

    #[inline]
    pub fn push_solid_circle(&mut self, z: ZIndex, center: Vec2, radius: f64, color: Color) {
        self.push_circle(z, CircleCmd { center, radius, fill: Some(color), border: None });
    }
}
