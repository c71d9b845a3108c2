// File: crates/chartesque-core/src/chart.rs
// Summary: Chart struct: configuration, two-pass axis layout and drawing through a Renderer.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::axis::Axis;
use crate::error::{ChartError, Result};
use crate::geometry::{AxisLines, Point, Rect};
use crate::layout::{LabelPlacement, PlotLayout};
use crate::render::Renderer;
use crate::series::Dataset;
use crate::style::ChartStyle;
use crate::text::TextMeasurer;
use crate::types::{Margins, HEIGHT, OUTPUT_FILENAME, WIDTH};

/// A single-series line chart.
///
/// Configure with the setters, then call [`render`](Self::render) as often as
/// needed; every call recomputes the layout from scratch.
#[derive(Clone, Debug)]
pub struct Chart {
    width: u32,
    height: u32,
    margins: Margins,
    x_axis: Axis,
    y_axis: Axis,
    output_filename: PathBuf,
    data: Dataset,
    pub style: ChartStyle,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            margins: Margins::default(),
            x_axis: Axis::horizontal(),
            y_axis: Axis::vertical(),
            output_filename: PathBuf::from(OUTPUT_FILENAME),
            data: Dataset::new(),
            style: ChartStyle::default(),
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn set_width(&mut self, width: u32) { self.width = width; }
    pub fn set_height(&mut self, height: u32) { self.height = height; }

    pub fn margins(&self) -> Margins { self.margins }
    pub fn set_margins(&mut self, margins: Margins) { self.margins = margins.sanitized(); }

    pub fn output_filename(&self) -> &Path { &self.output_filename }
    pub fn set_output_file(&mut self, filename: impl Into<PathBuf>) {
        self.output_filename = filename.into();
    }

    pub fn x_axis(&self) -> &Axis { &self.x_axis }
    pub fn y_axis(&self) -> &Axis { &self.y_axis }
    pub fn x_axis_mut(&mut self) -> &mut Axis { &mut self.x_axis }
    pub fn y_axis_mut(&mut self) -> &mut Axis { &mut self.y_axis }

    pub fn data(&self) -> &Dataset { &self.data }

    /// Replace the dataset with copies of `x` and `y`. On a length mismatch the
    /// previous data is kept.
    pub fn set_data(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        self.data = Dataset::try_new(x.to_vec(), y.to_vec())?;
        Ok(())
    }

    pub fn set_dataset(&mut self, data: Dataset) { self.data = data; }

    /// Configuration checks that must pass before anything is drawn.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidSize { width: self.width, height: self.height });
        }
        for axis in [&self.x_axis, &self.y_axis] {
            let (min, max) = axis.limits();
            if min.is_nan() || max.is_nan() || min >= max {
                return Err(ChartError::InvalidLimits { min, max });
            }
        }
        Ok(())
    }

    /// Size both axes, generate their ticks and compute all pixel geometry.
    pub fn layout<M: TextMeasurer + ?Sized>(&mut self, measurer: &M) -> Result<PlotLayout> {
        self.validate()?;
        let m = self.margins;
        let (w, h) = (self.width as f64, self.height as f64);

        // Label extents first: each axis' length depends on the other's labels.
        self.x_axis.measure_labels(measurer);
        self.y_axis.measure_labels(measurer);

        let y_axis_pixel_width = self.y_axis.reserved_width();
        let x_axis_pixel_height = self.x_axis.reserved_height();

        self.x_axis.set_size(w - m.hsum() - y_axis_pixel_width);
        self.y_axis.set_size(h - m.vsum() - x_axis_pixel_height);

        self.x_axis.generate_ticks();
        self.y_axis.generate_ticks();

        let origin_x = m.left + y_axis_pixel_width;
        let plot_area = Rect::from_ltrb(
            origin_x,
            m.top,
            origin_x + self.x_axis.length(),
            m.top + self.y_axis.length(),
        );
        let axis_lines = AxisLines {
            top: Point::new(plot_area.left, plot_area.top),
            corner: Point::new(plot_area.left, plot_area.bottom),
            right: Point::new(plot_area.right, plot_area.bottom),
        };

        let y = &self.y_axis;
        let y_labels = y
            .ticks()
            .map(|(pos, text)| {
                let extents = measurer.measure_text(y.label_font(), text);
                LabelPlacement {
                    text: text.to_string(),
                    x: m.left + y.label_padding() + y.label_max_width() - extents.width,
                    y: m.top + y.label_padding() + pos,
                    extents,
                }
            })
            .collect();

        let x = &self.x_axis;
        let x_label_y = h - m.bottom - x.label_padding();
        let x_labels = x
            .ticks()
            .map(|(pos, text)| {
                let extents = measurer.measure_text(x.label_font(), text);
                LabelPlacement {
                    text: text.to_string(),
                    x: origin_x + pos - extents.width / 2.0,
                    y: x_label_y,
                    extents,
                }
            })
            .collect();

        let polyline = self
            .data
            .points()
            .map(|(dx, dy)| Point::new(origin_x + x.convert_to_scale(dx), m.top + y.convert_to_scale(dy)))
            .collect::<Vec<_>>();

        debug!(
            y_axis_pixel_width,
            x_axis_pixel_height,
            x_ticks = x.ticks_count(),
            y_ticks = y.ticks_count(),
            points = polyline.len(),
            "chart layout computed"
        );

        Ok(PlotLayout {
            y_axis_pixel_width,
            x_axis_pixel_height,
            plot_area,
            axis_lines,
            y_labels,
            x_labels,
            polyline,
        })
    }

    /// Lay out the chart and draw it: axis lines, tick labels, then the data line.
    /// Configuration errors are reported before the first drawing call.
    pub fn render<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<PlotLayout> {
        let layout = self.layout(&*renderer)?;
        draw_axes(renderer, &self.style, &layout);
        draw_labels(renderer, &self.style, &self.x_axis, &self.y_axis, &layout);
        draw_polyline(renderer, &self.style, &layout.polyline);
        Ok(layout)
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axes<R: Renderer + ?Sized>(r: &mut R, style: &ChartStyle, layout: &PlotLayout) {
    let AxisLines { top, corner, right } = layout.axis_lines;
    r.set_source_color(style.axis_color);
    r.set_line_width(style.axis_width);
    r.new_path();
    r.move_to(top.x, top.y);
    r.line_to(corner.x, corner.y);
    r.line_to(right.x, right.y);
    r.stroke();
}

fn draw_labels<R: Renderer + ?Sized>(r: &mut R, style: &ChartStyle, x_axis: &Axis, y_axis: &Axis, layout: &PlotLayout) {
    r.set_source_color(style.label_color);
    for label in &layout.y_labels {
        r.show_text(y_axis.label_font(), label.x, label.y, &label.text);
    }
    for label in &layout.x_labels {
        r.show_text(x_axis.label_font(), label.x, label.y, &label.text);
    }
}

fn draw_polyline<R: Renderer + ?Sized>(r: &mut R, style: &ChartStyle, points: &[Point]) {
    let Some((first, rest)) = points.split_first() else { return };
    r.set_source_color(style.line_color);
    r.set_line_width(style.line_width);
    r.new_path();
    r.move_to(first.x, first.y);
    for p in rest {
        r.line_to(p.x, p.y);
    }
    r.stroke();
}
