//! Easel engine crate.
//!
//! Geometry, the camera transform engine and the drawing surface (a recorded
//! draw list), plus the input, timing and frame-driver plumbing the UI layer
//! builds on. Rasterizing the draw list is left to the host.

pub mod coords;
pub mod core;
pub mod input;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod time;
pub mod transform;
