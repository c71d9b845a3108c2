// File: crates/chartesque-core/src/text.rs
// Summary: Font descriptions and the text measurement hook used by label sizing.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
    Oblique,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Normal,
    #[default]
    Bold,
}

/// Everything a backend needs to select a face and size it.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub slant: FontSlant,
    pub weight: FontWeight,
    pub size: f64,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self { family: family.into(), slant: FontSlant::Normal, weight: FontWeight::Bold, size }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Sans", 10.0)
    }
}

/// Rendered bounding box of a string.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtents {
    pub width: f64,
    pub height: f64,
}

impl TextExtents {
    pub const fn new(width: f64, height: f64) -> Self { Self { width, height } }
}

/// Text measurement capability. Backends return ink extents in pixels.
pub trait TextMeasurer {
    fn measure_text(&self, font: &FontSpec, text: &str) -> TextExtents;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure_text(&self, font: &FontSpec, text: &str) -> TextExtents {
        (**self).measure_text(font, text)
    }
}

/// Deterministic measurer for layout without a font backend.
///
/// Assumes an average glyph advance of 0.6em and a cap height of 0.7em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure_text(&self, font: &FontSpec, text: &str) -> TextExtents {
        let size = font.size.max(0.0);
        let width = 0.6 * size * text.chars().count() as f64;
        let height = if text.is_empty() { 0.0 } else { 0.7 * size };
        TextExtents::new(width, height)
    }
}
