use std::collections::HashMap;
use std::mem;

use easel_engine::input::KeyPress;
use easel_engine::scene::DrawList;
use easel_engine::text::{FontId, FontLoadError, FontSystem};
use winit::window::CursorIcon;

use crate::anim;
use crate::focus::FocusManager;
use crate::input::UiInput;
use crate::painter::Painter;
use crate::theme::UiTheme;
use crate::widget::{Declaration, WidgetId, WidgetKind};
use crate::widgets::button::{self, Button};
use crate::widgets::checkbox::{self, Checkbox};
use crate::widgets::text::{self, Text};
use crate::widgets::textbox::{self, EditOutcome, TextBox};
use crate::widgets::Visuals;

/// Cursor the host should show over the UI.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum CursorShape {
    #[default]
    Default,
    /// Something clickable is under the pointer.
    Pointer,
}

impl From<CursorShape> for CursorIcon {
    fn from(shape: CursorShape) -> Self {
        match shape {
            CursorShape::Default => CursorIcon::Default,
            CursorShape::Pointer => CursorIcon::Pointer,
        }
    }
}

/// Immediate-mode UI context.
///
/// Each frame the application declares widgets (`button`, `checkbox`,
/// `textbox`, `text`), which only queues them, and then calls
/// [`commit`](Self::commit) once. Commit resolves hover, clicks and focus
/// against the frame's input, applies edits to bound values, advances the
/// animations and paints everything onto the surface.
///
/// State that outlives a frame (hover easing, click flash, focus) is keyed by
/// [`WidgetId`].
pub struct Ui {
    pub theme: UiTheme,
    pub font_system: FontSystem,

    focus: FocusManager,
    hovered: Option<WidgetId>,
    clicked: Option<WidgetId>,

    /// UI clock value of each widget's last click.
    last_action: HashMap<WidgetId, f64>,
    animated_hover: HashMap<WidgetId, f64>,

    queue: Vec<Declaration>,
    key_queue: Vec<KeyPress>,

    /// Milliseconds of `dt` accumulated over all commits.
    clock_ms: f64,
}

impl Ui {
    pub fn new() -> Self {
        Self::with_theme(UiTheme::default())
    }

    pub fn with_theme(theme: UiTheme) -> Self {
        Self {
            theme,
            font_system: FontSystem::new(),
            focus: FocusManager::new(),
            hovered: None,
            clicked: None,
            last_action: HashMap::new(),
            animated_hover: HashMap::new(),
            queue: Vec::new(),
            key_queue: Vec::new(),
            clock_ms: 0.0,
        }
    }

    /// Loads a font and makes it the theme font if none is set yet.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let id = self.font_system.load_font(bytes)?;
        self.theme.font.get_or_insert(id);
        Ok(id)
    }

    // ── declaration ───────────────────────────────────────────────────────

    /// Declares a button. Returns `true` if it was clicked in the most
    /// recent commit.
    pub fn button(&mut self, button: Button) -> bool {
        let decl = button.into_declaration();
        let clicked = self.clicked.as_ref() == Some(&decl.id);
        self.queue.push(decl);
        clicked
    }

    pub fn checkbox(&mut self, checkbox: Checkbox) {
        self.queue.push(checkbox.into_declaration());
    }

    /// Declares a text box.
    ///
    /// Always returns `false` for now.
    // TODO: return true for the frame Enter releases focus, so forms can submit.
    pub fn textbox(&mut self, textbox: TextBox) -> bool {
        self.queue.push(textbox.into_declaration());
        false
    }

    pub fn text(&mut self, text: Text) {
        self.queue.push(text.into_declaration());
    }

    /// Queues a typed key for the focused text box. Ignored while nothing
    /// has focus.
    pub fn key_press(&mut self, key: KeyPress) {
        if self.focus.has_focus() {
            self.key_queue.push(key);
        }
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn hovered(&self) -> Option<&WidgetId> {
        self.hovered.as_ref()
    }

    /// Widget clicked in the most recent commit.
    #[inline]
    pub fn clicked(&self) -> Option<&WidgetId> {
        self.clicked.as_ref()
    }

    #[inline]
    pub fn focused(&self) -> Option<&WidgetId> {
        self.focus.focused()
    }

    /// Eased hover amount in `[0, 1]`; 0 for widgets never declared.
    pub fn hover_amount(&self, id: &WidgetId) -> f64 {
        self.animated_hover.get(id).copied().unwrap_or(0.0)
    }

    /// Current click-flash intensity in `[0, 1]`.
    pub fn action_flash(&self, id: &WidgetId) -> f64 {
        let elapsed = self.last_action.get(id).map(|t| self.clock_ms - t);
        anim::action_flash(elapsed, self.theme.flash_window_ms)
    }

    pub fn cursor(&self) -> CursorShape {
        if self.hovered.is_some() { CursorShape::Pointer } else { CursorShape::Default }
    }

    /// Number of widgets declared since the last commit.
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    // ── commit ────────────────────────────────────────────────────────────

    /// Resolves and paints everything declared this frame, then empties the
    /// declaration and key queues.
    pub fn commit(&mut self, surface: &mut DrawList, input: &UiInput, dt_ms: f64) {
        let decls = mem::take(&mut self.queue);
        let mut keys = mem::take(&mut self.key_queue);
        if self.focus.has_focus() {
            keys.extend_from_slice(&input.key_presses);
        }

        let dt_ms = dt_ms.max(0.0);
        self.clock_ms += dt_ms;

        self.hovered = decls
            .iter()
            .rev()
            .find(|d| d.is_hit(input.pointer))
            .map(|d| d.id.clone());

        self.clicked = None;
        if input.pointer_pressed {
            self.clicked = self.hovered.clone();
            if let Some(id) = &self.clicked {
                log::trace!("click: {id}");
                self.last_action.insert(id.clone(), self.clock_ms);
            }
            self.focus.set(self.hovered.clone());
        }

        for decl in &decls {
            self.apply_effects(decl, &keys);
        }

        let rate = self.theme.hover_smoothing;
        for decl in &decls {
            let target = if self.hovered.as_ref() == Some(&decl.id) { 1.0 } else { 0.0 };
            let current = self.animated_hover.entry(decl.id.clone()).or_insert(0.0);
            *current = anim::ease_toward(*current, target, rate, dt_ms);
        }

        let mut painter = Painter::new(surface, &self.font_system, &self.theme);
        for decl in &decls {
            let visuals = Visuals {
                hover: self.hover_amount(&decl.id),
                flash: self.action_flash(&decl.id),
                focused: self.focus.is_focused(&decl.id),
            };
            paint_declaration(&mut painter, decl, visuals);
        }
    }

    fn apply_effects(&mut self, decl: &Declaration, keys: &[KeyPress]) {
        match &decl.kind {
            WidgetKind::Checkbox { value, .. } if self.clicked.as_ref() == Some(&decl.id) => {
                checkbox::toggle(value);
            }
            WidgetKind::TextBox { value, .. } if self.focus.is_focused(&decl.id) => {
                let outcome = value.update(|text| textbox::apply_keys(text, keys));
                if outcome == EditOutcome::Released {
                    self.focus.clear();
                }
            }
            _ => {}
        }
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

fn paint_declaration(painter: &mut Painter<'_>, decl: &Declaration, visuals: Visuals) {
    match &decl.kind {
        WidgetKind::Button { rect, label } => button::paint(painter, *rect, label, visuals),
        WidgetKind::Checkbox { rect, value } => checkbox::paint(painter, *rect, value.get(), visuals),
        WidgetKind::TextBox { rect, value, placeholder } => {
            let value = value.borrow();
            textbox::paint(painter, *rect, &value, placeholder.as_deref(), visuals);
        }
        WidgetKind::Text { pos, text: label, align, baseline } => {
            text::paint(painter, *pos, label, *align, *baseline);
        }
    }
}
