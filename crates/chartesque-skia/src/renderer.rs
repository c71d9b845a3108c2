// File: crates/chartesque-skia/src/renderer.rs
// Summary: Skia-backed text measurement and path drawing for chartesque-core.

use std::cell::RefCell;
use std::collections::HashMap;

use chartesque_core::{FontSlant, FontSpec, FontWeight, Renderer, Rgb, TextExtents, TextMeasurer};
use skia_safe as skia;

type FaceKey = (String, FontSlant, FontWeight);

/// Resolves `FontSpec`s against the system font manager and measures ink bounds.
///
/// Resolved typefaces are cached per family, slant and weight for the
/// lifetime of the measurer; `None` records a family with no usable face.
pub struct SkiaTextMeasurer {
    fonts: skia::FontMgr,
    faces: RefCell<HashMap<FaceKey, Option<skia::Typeface>>>,
}

impl Default for SkiaTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaTextMeasurer {
    pub fn new() -> Self {
        Self { fonts: skia::FontMgr::default(), faces: RefCell::new(HashMap::new()) }
    }

    /// Build a Skia font for `desc`, falling back to the platform default face
    /// when the family is not installed.
    pub fn font(&self, desc: &FontSpec) -> skia::Font {
        let size = desc.size as f32;
        let mut font = match self.typeface(desc) {
            Some(tf) => skia::Font::from_typeface(tf, size),
            None => {
                let mut f = skia::Font::default();
                f.set_size(size);
                f
            }
        };
        font.set_edging(skia::font::Edging::AntiAlias);
        font
    }

    /// Number of distinct faces resolved so far.
    pub fn cached_faces(&self) -> usize {
        self.faces.borrow().len()
    }

    fn typeface(&self, desc: &FontSpec) -> Option<skia::Typeface> {
        let key = (desc.family.clone(), desc.slant, desc.weight);
        self.faces
            .borrow_mut()
            .entry(key)
            .or_insert_with(|| {
                let style = font_style(desc);
                self.fonts
                    .match_family_style(&desc.family, style)
                    .or_else(|| self.fonts.legacy_make_typeface(None::<&str>, style))
            })
            .clone()
    }
}

impl TextMeasurer for SkiaTextMeasurer {
    fn measure_text(&self, font: &FontSpec, text: &str) -> TextExtents {
        let (_advance, bounds) = self.font(font).measure_str(text, None);
        TextExtents::new(bounds.width() as f64, bounds.height() as f64)
    }
}

fn font_style(desc: &FontSpec) -> skia::FontStyle {
    use skia::font_style::{Slant, Weight, Width};
    let weight = match desc.weight {
        FontWeight::Normal => Weight::NORMAL,
        FontWeight::Bold => Weight::BOLD,
    };
    let slant = match desc.slant {
        FontSlant::Normal => Slant::Upright,
        FontSlant::Italic => Slant::Italic,
        FontSlant::Oblique => Slant::Oblique,
    };
    skia::FontStyle::new(weight, Width::NORMAL, slant)
}

/// Draws onto a borrowed Skia canvas using a cairo-like current-path model.
pub struct SkiaRenderer<'a> {
    canvas: &'a skia::Canvas,
    measurer: SkiaTextMeasurer,
    path: skia::Path,
    paint: skia::Paint,
}

impl<'a> SkiaRenderer<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(skia::Color::BLACK);
        paint.set_stroke_width(1.0);
        Self { canvas, measurer: SkiaTextMeasurer::new(), path: skia::Path::new(), paint }
    }

    fn paint_path(&mut self, style: skia::paint::Style) {
        let mut paint = self.paint.clone();
        paint.set_style(style);
        self.canvas.draw_path(&self.path, &paint);
        self.path.reset();
    }
}

impl TextMeasurer for SkiaRenderer<'_> {
    fn measure_text(&self, font: &FontSpec, text: &str) -> TextExtents {
        self.measurer.measure_text(font, text)
    }
}

impl Renderer for SkiaRenderer<'_> {
    fn new_path(&mut self) {
        self.path.reset();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.move_to((x as f32, y as f32));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.line_to((x as f32, y as f32));
    }

    fn stroke(&mut self) {
        self.paint_path(skia::paint::Style::Stroke);
    }

    fn fill(&mut self) {
        self.paint_path(skia::paint::Style::Fill);
    }

    fn set_source_color(&mut self, color: Rgb) {
        let (r, g, b) = color.to_u8();
        self.paint.set_color(skia::Color::from_rgb(r, g, b));
    }

    fn set_line_width(&mut self, width: f64) {
        self.paint.set_stroke_width(width.max(0.0) as f32);
    }

    fn show_text(&mut self, font: &FontSpec, x: f64, y: f64, text: &str) {
        let font = self.measurer.font(font);
        let mut paint = self.paint.clone();
        paint.set_style(skia::paint::Style::Fill);
        self.canvas.draw_str(text, (x as f32, y as f32), &font, &paint);
    }
}
