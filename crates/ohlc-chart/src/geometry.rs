// File: crates/ohlc-chart/src/geometry.rs
// Summary: Plot rectangle and small pixel-math helpers.

use crate::types::Insets;

/// Drawable area inside the insets, in pixel coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// Plot area of a `width x height` surface after removing `insets`.
    pub fn inset(width: i32, height: i32, insets: &Insets) -> Self {
        Self {
            left: insets.left as f32,
            top: insets.top as f32,
            right: (width as i64 - insets.right as i64) as f32,
            bottom: (height as i64 - insets.bottom as i64) as f32,
        }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Clamp a y coordinate into `[top, bottom]`. NaN lands on the bottom edge.
    #[inline]
    pub fn clamp_y(&self, y: f32) -> f32 {
        if y.is_nan() {
            return self.bottom;
        }
        clamp(y, self.top, self.bottom)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
