//! Per-frame driver contract.
//!
//! The host owns the window, the input collectors and the clock; each frame
//! it calls [`run_frame`], which hands the application a [`FrameCtx`].

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{run_frame, FrameCtx, FrameOutput};
