// File: crates/ohlc-chart/src/bar.rs
// Summary: OHLC bar model, wire form with optional fields, and boundary defaulting.
// Notes:
// - `RawBar` mirrors the backend payload, where any numeric field may be absent.
//   Defaults are applied once in `RawBar::into_bar`; nothing downstream sees an
//   `Option`.
// - `OhlcBar` fields stay public, so the renderer still clamps malformed bars.

use serde::Deserialize;

use crate::error::BarError;

/// Number of most recent daily bars the chart shows (roughly six months).
pub const DEFAULT_WINDOW: usize = 180;

/// One trading day.
#[derive(Clone, Debug, PartialEq)]
pub struct OhlcBar {
    pub date: String, // YYYY-MM-DD
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl OhlcBar {
    /// Construct a bar enforcing OHLC invariants:
    /// `low <= min(open, close)`, `high >= max(open, close)`, `low <= high`,
    /// and all prices finite.
    pub fn try_new(
        date: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Result<Self, BarError> {
        for (field, v) in [("open", open), ("high", high), ("low", low), ("close", close)] {
            if !v.is_finite() {
                return Err(BarError::NonFinite(field));
            }
        }
        if low > high {
            return Err(BarError::InvertedRange { low, high });
        }
        for (field, value) in [("open", open), ("close", close)] {
            if value < low || value > high {
                return Err(BarError::OutsideRange { field, value, low, high });
            }
        }
        Ok(Self { date: date.into(), open, high, low, close, volume })
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::of(self.open, self.close)
    }

    /// True when every price is a finite number.
    pub fn is_finite(&self) -> bool {
        self.open.is_finite() && self.high.is_finite() && self.low.is_finite() && self.close.is_finite()
    }
}

/// Candle direction, keyed on `close >= open`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    #[inline]
    pub fn of(open: f64, close: f64) -> Self {
        if close >= open { Direction::Up } else { Direction::Down }
    }
}

/// Bar as it arrives on the wire. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawBar {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
}

impl RawBar {
    /// Apply boundary defaults and validate.
    ///
    /// A missing `volume` becomes `0` and a missing `date` becomes empty. A
    /// missing or non-finite price rejects the row, since no price can be
    /// invented without distorting the scale. Bars whose open/close sit
    /// outside `low..=high` are accepted as-is; the renderer clamps them.
    pub fn into_bar(self) -> Result<OhlcBar, BarError> {
        let open = require("open", self.open)?;
        let high = require("high", self.high)?;
        let low = require("low", self.low)?;
        let close = require("close", self.close)?;
        if low > high {
            return Err(BarError::InvertedRange { low, high });
        }
        let volume = self.volume.filter(|v| v.is_finite()).unwrap_or(0.0);
        Ok(OhlcBar { date: self.date.unwrap_or_default(), open, high, low, close, volume })
    }
}

fn require(field: &'static str, v: Option<f64>) -> Result<f64, BarError> {
    match v {
        None => Err(BarError::Missing(field)),
        Some(x) if !x.is_finite() => Err(BarError::NonFinite(field)),
        Some(x) => Ok(x),
    }
}

/// The `n` most recent bars (the tail of a chronological slice).
pub fn latest(bars: &[OhlcBar], n: usize) -> &[OhlcBar] {
    &bars[bars.len().saturating_sub(n)..]
}

/// Highest high and lowest low across `bars`, or `None` when empty.
pub fn price_extent(bars: &[OhlcBar]) -> Option<(f64, f64)> {
    if bars.is_empty() {
        return None;
    }
    let mut min_p = f64::INFINITY;
    let mut max_p = f64::NEG_INFINITY;
    for b in bars {
        min_p = min_p.min(b.low);
        max_p = max_p.max(b.high);
    }
    Some((min_p, max_p))
}
