//! Easel UI: immediate-mode widgets on top of `easel-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use easel_ui::prelude::*;
//!
//! let mut ui = Ui::new();
//! let enabled = Binding::new(false);
//! let name = Binding::new(String::new());
//!
//! // In your frame callback:
//! if ui.button(Button::new("Reset").at(20.0, 20.0)) {
//!     name.set(String::new());
//! }
//! ui.checkbox(Checkbox::new("enabled", Rect::new(20.0, 90.0, 24.0, 24.0), &enabled));
//! ui.textbox(TextBox::new("name", Rect::new(20.0, 130.0, 200.0, 30.0), &name).placeholder("Name"));
//! ui.text(Text::new("Settings", 20.0, 180.0));
//!
//! let input = UiInput::from_input(ctx.input, ctx.input_frame);
//! ui.commit(ctx.surface, &input, ctx.time.dt_ms);
//! ctx.set_cursor(ui.cursor().into());
//! ```

pub mod anim;
pub mod binding;
pub mod context;
pub mod focus;
pub mod input;
pub mod painter;
pub mod theme;
pub mod widget;
pub mod widgets;

/// Everything needed to declare widgets; import this in application code.
pub mod prelude {
    pub use crate::binding::Binding;
    pub use crate::context::{CursorShape, Ui};
    pub use crate::input::UiInput;
    pub use crate::theme::UiTheme;
    pub use crate::widget::WidgetId;
    pub use crate::widgets::{
        button::Button,
        checkbox::Checkbox,
        text::Text,
        textbox::TextBox,
    };

    pub use easel_engine::coords::{Rect, Vec2};
    pub use easel_engine::input::{Key, KeyPress};
    pub use easel_engine::paint::Color;
    pub use easel_engine::scene::{TextAlign, TextBaseline};
}
