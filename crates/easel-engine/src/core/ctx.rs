use winit::window::CursorIcon;

use crate::coords::Viewport;
use crate::input::{InputFrame, InputState};
use crate::scene::DrawList;
use crate::time::FrameTime;

use super::app::{App, AppControl};

/// Per-frame context passed to [`App::on_frame`].
pub struct FrameCtx<'a> {
    /// Drawing surface for this frame, in logical pixels.
    pub surface: &'a mut DrawList,
    pub viewport: Viewport,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    cursor: CursorIcon,
}

impl FrameCtx<'_> {
    /// Requests a cursor shape for the window. The last request in a frame wins.
    pub fn set_cursor(&mut self, cursor: CursorIcon) {
        self.cursor = cursor;
    }
}

/// What a frame asked of the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FrameOutput {
    pub control: AppControl,
    pub cursor: CursorIcon,
}

/// Drives one frame: clears `surface`, lets `app` draw into it, then resets
/// the per-frame input.
///
/// The input reset happens after `on_frame` returns, so edge-triggered input
/// (presses, wheel, typed keys) is visible to exactly one frame.
pub fn run_frame<A: App + ?Sized>(
    app: &mut A,
    surface: &mut DrawList,
    viewport: Viewport,
    input: &InputState,
    input_frame: &mut InputFrame,
    time: FrameTime,
) -> FrameOutput {
    surface.clear();
    surface.set_scale_factor(viewport.scale_factor);

    let (control, cursor) = {
        let mut ctx = FrameCtx {
            surface,
            viewport,
            input,
            input_frame,
            time,
            cursor: CursorIcon::Default,
        };
        let control = app.on_frame(&mut ctx);
        (control, ctx.cursor)
    };

    input_frame.clear();
    log::trace!("frame {} done ({:?})", time.frame_index, control);

    FrameOutput { control, cursor }
}

#[cfg(test)]
mod tests {
    use crate::coords::{Rect, Vec2};
    use crate::input::{InputEvent, MouseButton, Modifiers, MouseButtonState, PointerButtonEvent};
    use crate::paint::Color;
    use crate::scene::ZIndex;
    use crate::time::FrameClock;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        presses_seen: Vec<bool>,
    }

    impl App for Recorder {
        fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
            self.presses_seen.push(ctx.input_frame.button_pressed(MouseButton::Left));
            ctx.surface.push_solid_rect(ZIndex::UI, Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
            ctx.set_cursor(CursorIcon::Pointer);
            AppControl::Continue
        }
    }

    #[test]
    fn frame_sees_press_once_and_surface_is_fresh() {
        let mut app = Recorder::default();
        let mut surface = DrawList::new();
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let mut clock = FrameClock::fixed(60);
        let viewport = Viewport::new(320.0, 240.0).with_scale_factor(2.0);

        state.apply_event(&mut frame, InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 5.0,
            y: 5.0,
            modifiers: Modifiers::default(),
        }));

        for _ in 0..2 {
            let out = run_frame(&mut app, &mut surface, viewport, &state, &mut frame, clock.tick());
            assert_eq!(out, FrameOutput { control: AppControl::Continue, cursor: CursorIcon::Pointer });
            assert_eq!(surface.len(), 1);
        }

        assert_eq!(app.presses_seen, vec![true, false]);
        assert_eq!(surface.scale_factor(), 2.0);
        assert_eq!(state.pointer_pos, Some(Vec2::new(5.0, 5.0)));
    }
}
