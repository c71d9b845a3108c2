// File: crates/chartesque-core/src/scale.rs
// Summary: Linear value-to-pixel transform with optional inversion for vertical axes.

/// Maps `[vmin, vmax]` onto `[0, length]` pixels.
///
/// When `inverted` is set the mapping runs from `length` down to `0`, which is
/// what a vertical axis needs because pixel y grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub length: f64,
    pub inverted: bool,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, length: f64, inverted: bool) -> Self {
        Self { vmin, vmax, length, inverted }
    }

    #[inline]
    pub fn ratio(&self, v: f64) -> f64 {
        (v - self.vmin) / (self.vmax - self.vmin)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let r = self.ratio(v);
        if self.inverted {
            self.length - self.length * r
        } else {
            self.length * r
        }
    }

    /// Inverse of [`to_px`](Self::to_px). A zero-length scale maps everything to `vmin`.
    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        if self.length <= 0.0 {
            return self.vmin;
        }
        let r = if self.inverted { (self.length - px) / self.length } else { px / self.length };
        self.vmin + r * (self.vmax - self.vmin)
    }
}
