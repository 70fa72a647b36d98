//! Camera and affine transforms.
//!
//! `Affine2` uses the canvas layout (`a b c d e f`). `Camera` builds the
//! world-to-screen mapping; `CameraScope` installs it on a `DrawList` and
//! restores the previous surface transform when dropped.

mod affine;
mod camera;
mod scope;

pub use affine::Affine2;
pub use camera::{aspect_fit_zoom, Camera};
pub use scope::CameraScope;
