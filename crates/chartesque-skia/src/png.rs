// File: crates/chartesque-skia/src/png.rs
// Summary: Headless PNG output using Skia CPU raster surfaces.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chartesque_core::{Chart, ChartError};
use skia_safe as skia;
use tracing::info;

use crate::renderer::SkiaRenderer;

pub struct PngOptions {
    pub background: skia::Color,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self { background: skia::Color::TRANSPARENT }
    }
}

/// Render `chart` into an in-memory PNG.
///
/// Configuration is validated before a surface is allocated, so nothing is
/// drawn or encoded for an invalid chart.
pub fn render_to_png_bytes(chart: &mut Chart, opts: &PngOptions) -> Result<Vec<u8>> {
    chart.validate()?;
    let (width, height) = (chart.width(), chart.height());
    let dims = (
        i32::try_from(width).context("width exceeds surface limits")?,
        i32::try_from(height).context("height exceeds surface limits")?,
    );
    let mut surface = skia::surfaces::raster_n32_premul(dims)
        .ok_or_else(|| ChartError::Surface(format!("failed to create {width}x{height} raster surface")))?;

    let canvas = surface.canvas();
    canvas.clear(opts.background);
    chart.render(&mut SkiaRenderer::new(canvas))?;

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| ChartError::Surface("encode PNG failed".into()))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `chart` and stream the PNG into `sink`.
pub fn write_png<W: Write>(chart: &mut Chart, opts: &PngOptions, mut sink: W) -> Result<()> {
    let bytes = render_to_png_bytes(chart, opts)?;
    sink.write_all(&bytes)
        .and_then(|()| sink.flush())
        .map_err(ChartError::from)
        .context("writing PNG stream")?;
    Ok(())
}

/// Render `chart` to its configured output file, creating parent directories.
/// The file is only created once rendering has succeeded.
pub fn render_to_file(chart: &mut Chart, opts: &PngOptions) -> Result<PathBuf> {
    let path = chart.output_filename().to_path_buf();
    render_to_path(chart, opts, &path)?;
    Ok(path)
}

/// Render `chart` to an explicit path, ignoring the chart's output filename.
pub fn render_to_path(chart: &mut Chart, opts: &PngOptions, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = render_to_png_bytes(chart, opts)?;
    write_file(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote PNG");
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> chartesque_core::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
