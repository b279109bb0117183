// File: crates/ohlc-chart/src/types.rs
// Summary: Shared constants (canvas size, padding, ratios) and screen insets.

/// Default surface width in pixels.
pub const WIDTH: i32 = 900;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 450;
/// Default margin on every side, reserved for price and date labels.
pub const PADDING: u32 = 40;

/// Fraction of a bar slot taken by the candle body.
pub const CANDLE_RATIO: f32 = 0.7;
/// Horizontal grid lines, including the top and bottom edges of the plot.
pub const GRID_LINES: usize = 5;
/// Date labels sampled along the x-axis.
pub const DATE_LABELS: usize = 4;
/// Smallest price span used for scaling; keeps flat series finite.
pub const PRICE_RANGE_EPSILON: f64 = 1e-9;
/// Label font size in pixels.
pub const FONT_SIZE: f32 = 10.0;
/// Most fraction digits a price label may carry.
pub const MAX_LABEL_DECIMALS: usize = 10;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on all four sides.
    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
    /// Total horizontal inset (left + right). Widened so it cannot overflow.
    pub const fn hsum(&self) -> i64 { self.left as i64 + self.right as i64 }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> i64 { self.top as i64 + self.bottom as i64 }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(PADDING)
    }
}
