use std::fmt;

use crate::coords::Vec2;

/// Rough advance used when no font is loaded, as a fraction of the font size.
const FALLBACK_ADVANCE: f64 = 0.5;
/// Line height as a fraction of the font size.
const LINE_HEIGHT: f64 = 1.2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns the fonts text is measured with.
///
/// Fonts are immutable after loading. Text that names no font (or an unknown
/// one) is measured with the first loaded font, or with a per-character
/// estimate when nothing is loaded at all.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} glyphs)", id, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    #[inline]
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    fn resolve(&self, id: Option<FontId>) -> Option<&fontdue::Font> {
        id.and_then(|id| self.fonts.get(id.0)).or_else(|| self.fonts.first())
    }

    /// Width of `text` at `size` in logical pixels.
    #[must_use]
    pub fn text_width(&self, text: &str, font: Option<FontId>, size: f64) -> f64 {
        self.measure_text(text, font, size).x
    }

    /// Single-line extent of `text` as `(width, height)` in logical pixels.
    #[must_use]
    pub fn measure_text(&self, text: &str, font: Option<FontId>, size: f64) -> Vec2 {
        let line_height = size * LINE_HEIGHT;
        let Some(font) = self.resolve(font) else {
            let chars = text.chars().count() as f64;
            return Vec2::new(chars * size * FALLBACK_ADVANCE, line_height);
        };

        let px = size as f32;
        let width: f32 = text
            .chars()
            .map(|ch| font.metrics(ch, px).advance_width)
            .sum();
        Vec2::new(width as f64, line_height)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
