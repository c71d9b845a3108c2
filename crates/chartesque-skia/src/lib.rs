// File: crates/chartesque-skia/src/lib.rs
// Summary: Skia renderer crate: CPU raster drawing, text metrics and PNG output for chartesque charts.

pub mod png;
pub mod renderer;

pub use png::{render_to_file, render_to_path, render_to_png_bytes, write_png, PngOptions};
pub use renderer::{SkiaRenderer, SkiaTextMeasurer};
