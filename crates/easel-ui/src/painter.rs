use easel_engine::coords::{Rect, Vec2};
use easel_engine::paint::Color;
use easel_engine::scene::{DrawList, TextAlign, TextBaseline, TextCmd, ZIndex};
use easel_engine::text::FontSystem;

use crate::theme::UiTheme;

/// Drawing surface handed to widget paint functions.
///
/// Wraps the engine's `DrawList` with the few primitives the widgets need and
/// records everything on the UI layer, in declaration order.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    font_system: &'a FontSystem,
    theme: &'a UiTheme,
    clip_depth: usize,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList, font_system: &'a FontSystem, theme: &'a UiTheme) -> Self {
        Self { draw_list, font_system, theme, clip_depth: 0 }
    }

    #[inline]
    pub fn theme(&self) -> &UiTheme {
        self.theme
    }

    /// Width of `text` in the theme font, in logical pixels.
    pub fn text_width(&self, text: &str) -> f64 {
        self.font_system.text_width(text, self.theme.font, self.theme.font_size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_list.push_solid_rect(ZIndex::UI, rect, color);
    }

    /// Border-coloured rect with the background filling it minus the border.
    pub fn frame(&mut self, rect: Rect) {
        let theme = self.theme;
        self.fill_rect(rect, theme.border_color);
        self.fill_rect(rect.inset(theme.border_size), theme.background_color);
    }

    /// White wash over `rect` at `alpha` opacity. Skipped when invisible.
    pub fn overlay(&mut self, rect: Rect, alpha: f64) {
        if alpha <= 0.0 {
            return;
        }
        self.fill_rect(rect, Color::WHITE.faded(alpha as f32));
    }

    /// Text in the theme font, positioned around `anchor`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        anchor: Vec2,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
    ) {
        let cmd = TextCmd {
            text: text.into(),
            font: self.theme.font,
            size: self.theme.font_size,
            color,
            anchor,
            align,
            baseline,
        };
        self.draw_list.push_text(ZIndex::UI, cmd);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.draw_list.push_clip(rect);
    }

    pub fn pop_clip(&mut self) {
        debug_assert!(self.clip_depth > 0, "pop_clip without push_clip");
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.draw_list.pop_clip();
    }

    /// Runs `f` with drawing clipped to `rect`.
    pub fn clipped(&mut self, rect: Rect, f: impl FnOnce(&mut Painter<'a>)) {
        self.push_clip(rect);
        f(self);
        self.pop_clip();
    }
}

impl Drop for Painter<'_> {
    fn drop(&mut self) {
        // Unbalanced clips would leak into whatever the host draws next.
        for _ in 0..self.clip_depth {
            self.draw_list.pop_clip();
        }
    }
}
