use easel_engine::paint::Color;
use easel_engine::text::FontId;

/// Colours, metrics and animation constants shared by every widget.
///
/// Construct with `UiTheme::default()` and adjust with the builder setters.
#[derive(Debug, Clone, PartialEq)]
pub struct UiTheme {
    pub border_color: Color,
    pub background_color: Color,
    pub text_color: Color,
    /// Width of the frame drawn around boxed widgets.
    pub border_size: f64,

    /// `None` = the first loaded font (or the fallback metrics).
    pub font: Option<FontId>,
    pub font_size: f64,

    /// Opacity of the white hover overlay at full hover.
    pub hover_overlay_alpha: f32,
    /// Opacity of the white action-flash overlay right after a click.
    pub flash_overlay_alpha: f32,

    /// Hover easing rate, per millisecond.
    pub hover_smoothing: f64,
    /// How long the action flash takes to fade out, in milliseconds.
    pub flash_window_ms: f64,
}

impl UiTheme {
    pub fn font(mut self, font: FontId) -> Self {
        self.font = Some(font);
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn colors(mut self, border: Color, background: Color, text: Color) -> Self {
        self.border_color = border;
        self.background_color = background;
        self.text_color = text;
        self
    }

    pub fn border_size(mut self, size: f64) -> Self {
        self.border_size = size;
        self
    }

    pub fn hover_smoothing(mut self, per_ms: f64) -> Self {
        self.hover_smoothing = per_ms;
        self
    }

    pub fn flash_window_ms(mut self, ms: f64) -> Self {
        self.flash_window_ms = ms;
        self
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            border_color: Color::from_srgb_u8(0x11, 0x11, 0x11, 0xff),
            background_color: Color::from_srgb_u8(0x44, 0x44, 0x44, 0xff),
            text_color: Color::from_srgb_u8(0xee, 0xee, 0xee, 0xff),
            border_size: 1.0,
            font: None,
            font_size: 16.0,
            hover_overlay_alpha: 0.1,
            flash_overlay_alpha: 0.25,
            hover_smoothing: 0.012,
            flash_window_ms: 500.0,
        }
    }
}
