// File: crates/chartesque-core/src/layout.rs
// Summary: Pixel geometry produced by a layout pass, ready to hand to a renderer.

use crate::geometry::{AxisLines, Point, Rect};
use crate::text::TextExtents;

/// A tick label and where its baseline origin sits.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPlacement {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub extents: TextExtents,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotLayout {
    /// Width reserved left of the plot for y-axis labels (padding included).
    pub y_axis_pixel_width: f64,
    /// Height reserved below the plot for x-axis labels (padding included).
    pub x_axis_pixel_height: f64,
    /// Region data points map into.
    pub plot_area: Rect,
    pub axis_lines: AxisLines,
    pub y_labels: Vec<LabelPlacement>,
    pub x_labels: Vec<LabelPlacement>,
    /// Data polyline vertices in dataset order; empty when there is no data.
    pub polyline: Vec<Point>,
}
