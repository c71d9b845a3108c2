// File: crates/chartesque-core/src/style.rs
// Summary: Fixed stroke and fill settings used when drawing a chart.

/// Colour with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self { Self { r, g, b } }

    /// 8-bit channels, clamped and rounded.
    pub fn to_u8(self) -> (u8, u8, u8) {
        let c = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (c(self.r), c(self.g), c(self.b))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartStyle {
    pub axis_color: Rgb,
    pub axis_width: f64,
    pub label_color: Rgb,
    pub line_color: Rgb,
    pub line_width: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            axis_color: Rgb::new(0.2, 0.2, 0.2),
            axis_width: 2.0,
            label_color: Rgb::BLACK,
            line_color: Rgb::new(0.2, 0.4, 0.8),
            line_width: 1.5,
        }
    }
}
