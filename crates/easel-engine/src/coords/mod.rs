//! Coordinate and geometry types shared by the transform engine, the draw list
//! and the UI.
//!
//! Canonical screen space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! World space uses the same axis directions; the camera maps between the two.
//! Everything is `f64` so world/screen round-trips hold to double precision.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
