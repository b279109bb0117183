// File: crates/ohlc-chart/src/scale.rs
// Summary: Linear price (Y) scale and equal-slot index (X) scale.

use crate::types::PRICE_RANGE_EPSILON;

/// Price value (same currency unit for every bar).
pub type Price = f64;

/// Vertical scale mapping `[min, max]` onto `[bottom, top]` pixels.
/// Higher prices map to smaller y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub min: Price,
    pub max: Price,
}

impl PriceScale {
    pub fn new(top_px: f64, bottom_px: f64, min: Price, max: Price) -> Self {
        Self { top_px, bottom_px, min, max }
    }

    /// Raw `max - min`, possibly zero.
    #[inline]
    pub fn range(&self) -> Price {
        self.max - self.min
    }

    /// Span used for division; never below `PRICE_RANGE_EPSILON`.
    #[inline]
    pub fn span(&self) -> Price {
        self.range().max(PRICE_RANGE_EPSILON)
    }

    pub fn is_flat(&self) -> bool {
        self.range() < PRICE_RANGE_EPSILON
    }

    #[inline]
    pub fn to_px(&self, price: Price) -> f64 {
        let h = self.bottom_px - self.top_px;
        self.bottom_px - ((price - self.min) / self.span()) * h
    }
}

/// Horizontal scale splitting the plot width into one equal slot per bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotScale {
    pub left_px: f64,
    pub slot_width: f64,
    pub candle_width: f64,
}

impl SlotScale {
    pub fn new(left_px: f64, plot_width: f64, count: usize, candle_ratio: f64) -> Self {
        let slot_width = plot_width / count.max(1) as f64;
        Self { left_px, slot_width, candle_width: slot_width * candle_ratio }
    }

    /// Centre x of slot `index`.
    #[inline]
    pub fn center(&self, index: usize) -> f64 {
        self.left_px + index as f64 * self.slot_width + self.slot_width / 2.0
    }
}
