// File: crates/chartesque-core/src/lib.rs
// Summary: Core library entry point; exports axis layout, chart orchestration and the renderer contract.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod render;
pub mod scale;
pub mod series;
pub mod style;
pub mod text;
pub mod types;

pub use axis::{Axis, Orientation, MIN_TICKS};
pub use chart::Chart;
pub use error::{ChartError, Result};
pub use geometry::{AxisLines, Point, Rect};
pub use layout::{LabelPlacement, PlotLayout};
pub use render::{DrawOp, RecordingRenderer, Renderer};
pub use scale::LinearScale;
pub use series::Dataset;
pub use style::{ChartStyle, Rgb};
pub use text::{FontSlant, FontSpec, FontWeight, HeuristicTextMeasurer, TextExtents, TextMeasurer};
pub use types::{format_label, Margins, TickDensity};
