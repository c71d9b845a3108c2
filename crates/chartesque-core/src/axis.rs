// File: crates/chartesque-core/src/axis.rs
// Summary: Axis model: limits, label metrics, tick sizing/generation and value-to-pixel mapping.

use tracing::{debug, warn};

use crate::error::{ChartError, Result};
use crate::grid::linspace;
use crate::scale::LinearScale;
use crate::text::{FontSpec, TextMeasurer};
use crate::types::{format_label, TickDensity, LABEL_SAMPLE_COUNT};

/// Fewest ticks an axis will ever carry; spacing divides by `ticks_count - 1`.
pub const MIN_TICKS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One dimension of a chart.
///
/// Layout runs in two passes per render: [`measure_label_extents`](Self::measure_label_extents)
/// first, then [`set_size`](Self::set_size) followed by [`generate_ticks`](Self::generate_ticks).
#[derive(Clone, Debug)]
pub struct Axis {
    orientation: Orientation,
    limit_min: f64,
    limit_max: f64,
    label_font: FontSpec,
    label_padding: f64,
    label_max_width: f64,
    label_max_height: f64,
    density: TickDensity,
    length: f64,
    ticks_count: usize,
    ticks_value_spacing: f64,
    ticks_positions: Vec<f64>,
    ticks_labels: Vec<String>,
}

impl Axis {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            limit_min: 0.0,
            limit_max: 1.0,
            label_font: FontSpec::default(),
            label_padding: 4.0,
            label_max_width: 0.0,
            label_max_height: 0.0,
            density: TickDensity::default(),
            length: 0.0,
            ticks_count: MIN_TICKS,
            ticks_value_spacing: 1.0,
            ticks_positions: Vec::new(),
            ticks_labels: Vec::new(),
        }
    }

    pub fn horizontal() -> Self { Self::new(Orientation::Horizontal) }

    pub fn vertical() -> Self { Self::new(Orientation::Vertical) }

    pub fn orientation(&self) -> Orientation { self.orientation }

    /// Set the domain bounds. Rejects `min >= max` and non-finite values,
    /// leaving the previous limits in place.
    pub fn set_limit(&mut self, min: f64, max: f64) -> Result<()> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidLimits { min, max });
        }
        self.limit_min = min;
        self.limit_max = max;
        Ok(())
    }

    pub fn limits(&self) -> (f64, f64) { (self.limit_min, self.limit_max) }

    pub fn label_font(&self) -> &FontSpec { &self.label_font }

    pub fn set_label_fontfamily(&mut self, family: impl Into<String>) {
        self.label_font.family = family.into();
    }

    pub fn set_label_fontsize(&mut self, size: f64) -> Result<()> {
        if !size.is_finite() || size <= 0.0 {
            return Err(ChartError::InvalidFontSize(size));
        }
        self.label_font.size = size;
        Ok(())
    }

    pub fn label_padding(&self) -> f64 { self.label_padding }

    /// Negative or NaN padding is treated as zero.
    pub fn set_label_padding(&mut self, padding: f64) {
        self.label_padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };
    }

    pub fn density(&self) -> TickDensity { self.density }

    /// Rejects non-finite or non-positive factors, keeping the previous density.
    pub fn set_density(&mut self, density: TickDensity) -> Result<()> {
        if !density.is_valid() {
            return Err(ChartError::InvalidDensity {
                vertical_divisor: density.vertical_divisor,
                horizontal_font_factor: density.horizontal_font_factor,
            });
        }
        self.density = density;
        Ok(())
    }

    pub fn label_max_width(&self) -> f64 { self.label_max_width }

    pub fn label_max_height(&self) -> f64 { self.label_max_height }

    /// Horizontal space a vertical axis reserves for its label column.
    pub fn reserved_width(&self) -> f64 { self.label_padding * 2.0 + self.label_max_width }

    /// Vertical space a horizontal axis reserves for its label row.
    pub fn reserved_height(&self) -> f64 { self.label_padding * 2.0 + self.label_max_height }

    /// Measure `sample_count` evenly spaced labels across the limits and keep
    /// the largest width and height seen.
    pub fn measure_label_extents<M: TextMeasurer + ?Sized>(&mut self, measurer: &M, sample_count: usize) {
        let mut max_w = 0.0f64;
        let mut max_h = 0.0f64;
        for value in linspace(self.limit_min, self.limit_max, sample_count) {
            let ext = measurer.measure_text(&self.label_font, &format_label(value));
            if ext.width > max_w { max_w = ext.width; }
            if ext.height > max_h { max_h = ext.height; }
        }
        self.label_max_width = max_w;
        self.label_max_height = max_h;
        debug!(orientation = ?self.orientation, width = max_w, height = max_h, "measured label extents");
    }

    /// [`measure_label_extents`](Self::measure_label_extents) with the default sample of 11.
    pub fn measure_labels<M: TextMeasurer + ?Sized>(&mut self, measurer: &M) {
        self.measure_label_extents(measurer, LABEL_SAMPLE_COUNT);
    }

    /// Set the axis pixel length and derive the tick count from it.
    pub fn set_size(&mut self, available_pixels: f64) {
        self.length = if available_pixels.is_finite() && available_pixels > 0.0 {
            available_pixels
        } else {
            warn!(orientation = ?self.orientation, available_pixels, "no room left for axis; collapsing to zero length");
            0.0
        };

        let raw = match self.orientation {
            Orientation::Vertical => {
                let label_slot = self.label_padding * 2.0 + self.label_max_height;
                let divisor = self.density.vertical_divisor;
                if label_slot > 0.0 && divisor > 0.0 { self.length / label_slot / divisor } else { 0.0 }
            }
            Orientation::Horizontal => {
                let per_tick = self.label_font.size * self.density.horizontal_font_factor;
                if per_tick > 0.0 { self.length / per_tick } else { 0.0 }
            }
        }
        .floor();
        // Saturating cast: NaN and negatives become 0, huge values usize::MAX.
        let raw = raw as usize;
        // At most one tick per pixel.
        let max_ticks = (self.length.floor() as usize).max(MIN_TICKS);
        if raw < MIN_TICKS || raw > max_ticks {
            warn!(orientation = ?self.orientation, raw, max_ticks, length = self.length, "tick count out of range; clamping");
        }
        self.ticks_count = raw.clamp(MIN_TICKS, max_ticks);
        self.ticks_value_spacing = (self.limit_max - self.limit_min) / (self.ticks_count - 1) as f64;
        debug!(orientation = ?self.orientation, length = self.length, ticks = self.ticks_count, "axis sized");
    }

    pub fn length(&self) -> f64 { self.length }

    pub fn ticks_count(&self) -> usize { self.ticks_count }

    pub fn ticks_value_spacing(&self) -> f64 { self.ticks_value_spacing }

    /// Recompute tick positions and labels, replacing the previous ones.
    pub fn generate_ticks(&mut self) {
        let scale = self.scale();
        let (positions, labels): (Vec<f64>, Vec<String>) = (0..self.ticks_count)
            .map(|i| {
                let value = self.limit_min + i as f64 * self.ticks_value_spacing;
                (scale.to_px(value), format_label(value))
            })
            .unzip();
        self.ticks_positions = positions;
        self.ticks_labels = labels;
    }

    pub fn ticks_positions(&self) -> &[f64] { &self.ticks_positions }

    pub fn ticks_labels(&self) -> &[String] { &self.ticks_labels }

    /// `(pixel offset, label)` pairs in value order.
    pub fn ticks(&self) -> impl Iterator<Item = (f64, &str)> {
        self.ticks_positions.iter().copied().zip(self.ticks_labels.iter().map(String::as_str))
    }

    pub fn scale(&self) -> LinearScale {
        LinearScale::new(
            self.limit_min,
            self.limit_max,
            self.length,
            self.orientation == Orientation::Vertical,
        )
    }

    /// Data value to pixel offset along the axis, excluding margins.
    pub fn convert_to_scale(&self, value: f64) -> f64 { self.scale().to_px(value) }

    /// Pixel offset along the axis back to a data value.
    pub fn convert_from_scale(&self, px: f64) -> f64 { self.scale().from_px(px) }
}
