// File: crates/chartesque-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, tick density).

/// Default surface width in pixels.
pub const WIDTH: u32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 600;
/// Default output path for the standalone PNG variant.
pub const OUTPUT_FILENAME: &str = "output.png";
/// Number of candidate values measured when sizing labels.
pub const LABEL_SAMPLE_COUNT: usize = 11;
/// Tick labels always carry one decimal digit.
pub const LABEL_PRECISION: usize = 1;

/// Outer padding around the plot, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }

    /// Negative or NaN sides collapse to zero.
    pub fn sanitized(self) -> Self {
        let f = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self::new(f(self.top), f(self.right), f(self.bottom), f(self.left))
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

/// Tick density heuristics. Larger available length yields more ticks.
///
/// Vertical axes get one tick per `vertical_divisor * (2 * padding + label_height)`
/// pixels, horizontal axes one tick per `horizontal_font_factor * font_size` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickDensity {
    pub vertical_divisor: f64,
    pub horizontal_font_factor: f64,
}

impl Default for TickDensity {
    fn default() -> Self {
        Self { vertical_divisor: 2.0, horizontal_font_factor: 5.0 }
    }
}

impl TickDensity {
    pub fn is_valid(&self) -> bool {
        [self.vertical_divisor, self.horizontal_font_factor]
            .iter()
            .all(|f| f.is_finite() && *f > 0.0)
    }
}

/// Format a value the way tick labels are printed.
pub fn format_label(value: f64) -> String {
    format!("{:.*}", LABEL_PRECISION, value)
}
