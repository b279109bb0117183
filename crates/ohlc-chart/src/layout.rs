// File: crates/ohlc-chart/src/layout.rs
// Summary: Pure geometry of one candlestick render: scales, candles, grid and date labels.
// Notes:
// - Everything the painter draws comes from here, so layout and pixels cannot
//   disagree. Coordinates are f32 screen pixels with y growing downward.

use tracing::debug;

use crate::bar::{price_extent, Direction, OhlcBar};
use crate::chart::{FlatRangePolicy, RenderOptions};
use crate::error::DegenerateInput;
use crate::geometry::PlotRect;
use crate::grid::{price_levels, sample_indices};
use crate::label::{format_date, format_price};
use crate::scale::{PriceScale, SlotScale};

/// Filled candle body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BodyRect {
    pub fn right(&self) -> f32 { self.left + self.width }
    pub fn bottom(&self) -> f32 { self.top + self.height }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleGeometry {
    pub index: usize,
    /// Slot centre; the wick is drawn here.
    pub x: f32,
    /// y of `high`.
    pub wick_top: f32,
    /// y of `low`.
    pub wick_bottom: f32,
    pub body: BodyRect,
    pub direction: Direction,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLine {
    pub y: f32,
    pub price: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateLabel {
    pub index: usize,
    pub x: f32,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotRect,
    pub prices: PriceScale,
    pub slots: SlotScale,
    pub candles: Vec<CandleGeometry>,
    pub grid: Vec<GridLine>,
    pub date_labels: Vec<DateLabel>,
}

impl ChartLayout {
    /// Lay out `bars` for a surface described by `opts`.
    ///
    /// Fails only on degenerate input: no bars, a non-finite price, a range too
    /// wide for `f64`, or a zero price range under `FlatRangePolicy::Blank`.
    /// Options are assumed valid
    /// (see `RenderOptions::validate`).
    pub fn compute(bars: &[OhlcBar], opts: &RenderOptions) -> Result<Self, DegenerateInput> {
        if let Some(index) = bars.iter().position(|b| !b.is_finite()) {
            return Err(DegenerateInput::NonFinite { index });
        }
        let (min_p, max_p) = price_extent(bars).ok_or(DegenerateInput::Empty)?;
        if !(max_p - min_p).is_finite() {
            return Err(DegenerateInput::RangeOverflow { min: min_p, max: max_p });
        }

        let plot = PlotRect::inset(opts.width, opts.height, &opts.insets);
        let prices = PriceScale::new(plot.top as f64, plot.bottom as f64, min_p, max_p);
        if prices.is_flat() {
            match opts.flat_range {
                FlatRangePolicy::Blank => return Err(DegenerateInput::FlatRange { price: min_p }),
                FlatRangePolicy::Floor => debug!(price = min_p, "flat price range; flooring span"),
            }
        }
        let slots = SlotScale::new(plot.left as f64, plot.width() as f64, bars.len(), opts.candle_ratio as f64);

        let y = |price: f64| plot.clamp_y(prices.to_px(price) as f32);

        let candles = bars
            .iter()
            .enumerate()
            .map(|(index, bar)| {
                let x = slots.center(index);
                let y_open = y(bar.open);
                let y_close = y(bar.close);
                let height = (y_open - y_close).abs().max(1.0);
                // keep the 1 px floor inside the plot
                let top = y_open.min(y_close).min(plot.bottom - height);
                CandleGeometry {
                    index,
                    x: x as f32,
                    wick_top: y(bar.high),
                    wick_bottom: y(bar.low),
                    body: BodyRect {
                        left: (x - slots.candle_width / 2.0) as f32,
                        top,
                        width: slots.candle_width as f32,
                        height,
                    },
                    direction: bar.direction(),
                }
            })
            .collect();

        let grid = price_levels(max_p, prices.range(), opts.grid_lines)
            .into_iter()
            .map(|(frac, price)| GridLine {
                y: plot.top + (plot.height() as f64 * frac) as f32,
                price,
                label: format_price(price, opts.label_decimals),
            })
            .collect();

        let date_labels = sample_indices(bars.len(), opts.date_labels)
            .into_iter()
            .map(|index| DateLabel {
                index,
                x: slots.center(index) as f32,
                text: format_date(&bars[index].date),
            })
            .collect();

        Ok(Self { plot, prices, slots, candles, grid, date_labels })
    }

    /// Highest `high` across the laid-out bars.
    pub fn max_price(&self) -> f64 { self.prices.max }
    /// Lowest `low` across the laid-out bars.
    pub fn min_price(&self) -> f64 { self.prices.min }
    /// `max_price - min_price`, unfloored.
    pub fn price_range(&self) -> f64 { self.prices.range() }
}
