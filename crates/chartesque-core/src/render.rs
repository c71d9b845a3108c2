// File: crates/chartesque-core/src/render.rs
// Summary: Renderer adapter contract and an in-memory recording implementation.

use crate::style::Rgb;
use crate::text::{FontSpec, HeuristicTextMeasurer, TextExtents, TextMeasurer};

/// Path-based 2D drawing capability, borrowed for the duration of one render.
///
/// Semantics follow the usual "current path" model: `move_to`/`line_to` extend
/// the path, `stroke`/`fill` paint it with the current colour and consume it.
pub trait Renderer: TextMeasurer {
    fn new_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn fill(&mut self);
    fn set_source_color(&mut self, color: Rgb);
    fn set_line_width(&mut self, width: f64);
    /// Draw `text` with its baseline origin at `(x, y)` in the current colour.
    fn show_text(&mut self, font: &FontSpec, x: f64, y: f64, text: &str);
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    NewPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    Fill,
    SetColor(Rgb),
    SetLineWidth(f64),
    Text { font: FontSpec, x: f64, y: f64, text: String },
}

/// Renderer that records every call instead of painting.
///
/// Measurement is delegated to `M` so layouts match whatever backend the
/// host would use.
#[derive(Debug, Default)]
pub struct RecordingRenderer<M = HeuristicTextMeasurer> {
    measurer: M,
    ops: Vec<DrawOp>,
}

impl RecordingRenderer<HeuristicTextMeasurer> {
    pub fn new() -> Self { Self::with_measurer(HeuristicTextMeasurer) }
}

impl<M: TextMeasurer> RecordingRenderer<M> {
    pub fn with_measurer(measurer: M) -> Self { Self { measurer, ops: Vec::new() } }

    pub fn ops(&self) -> &[DrawOp] { &self.ops }

    pub fn take_ops(&mut self) -> Vec<DrawOp> { std::mem::take(&mut self.ops) }

    /// Recorded text calls as `(x, y, text)`.
    pub fn texts(&self) -> impl Iterator<Item = (f64, f64, &str)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { x, y, text, .. } => Some((*x, *y, text.as_str())),
            _ => None,
        })
    }

    /// Vertices of each stroked path, in drawing order.
    pub fn stroked_paths(&self) -> Vec<Vec<(f64, f64)>> {
        let mut out = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        for op in &self.ops {
            match *op {
                DrawOp::NewPath => current.clear(),
                DrawOp::MoveTo(x, y) | DrawOp::LineTo(x, y) => current.push((x, y)),
                DrawOp::Stroke => {
                    if !current.is_empty() { out.push(std::mem::take(&mut current)); }
                }
                DrawOp::Fill => current.clear(),
                _ => {}
            }
        }
        out
    }
}

impl<M: TextMeasurer> TextMeasurer for RecordingRenderer<M> {
    fn measure_text(&self, font: &FontSpec, text: &str) -> TextExtents {
        self.measurer.measure_text(font, text)
    }
}

impl<M: TextMeasurer> Renderer for RecordingRenderer<M> {
    fn new_path(&mut self) { self.ops.push(DrawOp::NewPath); }
    fn move_to(&mut self, x: f64, y: f64) { self.ops.push(DrawOp::MoveTo(x, y)); }
    fn line_to(&mut self, x: f64, y: f64) { self.ops.push(DrawOp::LineTo(x, y)); }
    fn stroke(&mut self) { self.ops.push(DrawOp::Stroke); }
    fn fill(&mut self) { self.ops.push(DrawOp::Fill); }
    fn set_source_color(&mut self, color: Rgb) { self.ops.push(DrawOp::SetColor(color)); }
    fn set_line_width(&mut self, width: f64) { self.ops.push(DrawOp::SetLineWidth(width)); }
    fn show_text(&mut self, font: &FontSpec, x: f64, y: f64, text: &str) {
        self.ops.push(DrawOp::Text { font: font.clone(), x, y, text: text.to_string() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroked_paths_split_on_stroke() {
        let mut r = RecordingRenderer::new();
        r.new_path();
        r.move_to(0.0, 0.0);
        r.line_to(1.0, 1.0);
        r.stroke();
        r.move_to(5.0, 5.0);
        r.fill();
        r.move_to(2.0, 2.0);
        r.line_to(3.0, 3.0);
        r.stroke();
        assert_eq!(
            r.stroked_paths(),
            vec![vec![(0.0, 0.0), (1.0, 1.0)], vec![(2.0, 2.0), (3.0, 3.0)]]
        );
    }

    #[test]
    fn take_ops_drains() {
        let mut r = RecordingRenderer::new();
        r.show_text(&FontSpec::default(), 1.0, 2.0, "1.0");
        assert_eq!(r.texts().collect::<Vec<_>>(), vec![(1.0, 2.0, "1.0")]);
        assert_eq!(r.take_ops().len(), 1);
        assert!(r.ops().is_empty());
    }
}
