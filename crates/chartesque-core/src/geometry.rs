// File: crates/chartesque-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Self { x, y } }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    /// Inclusive containment, with a small tolerance for float noise.
    pub fn contains(&self, p: Point) -> bool {
        const EPS: f64 = 1e-9;
        p.x >= self.left - EPS && p.x <= self.right + EPS && p.y >= self.top - EPS && p.y <= self.bottom + EPS
    }
}

/// The "L" drawn for the two axes: down the y-axis, then right along the x-axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLines {
    /// Top end of the vertical axis line.
    pub top: Point,
    /// Where the two axis lines meet.
    pub corner: Point,
    /// Right end of the horizontal axis line.
    pub right: Point,
}
