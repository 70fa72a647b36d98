use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::text::TextCmd;

/// One recorded drawing operation, in the coordinates of the transform its
/// `DrawItem` carries.
///
/// Each variant's payload and `DrawList::push_*` helpers live in the matching
/// `scene::shapes` module.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Circle(CircleCmd),
    Text(TextCmd),
}
