// File: crates/ohlc-chart/src/error.rs
// Summary: Error types for option validation, bar ingestion, degenerate input, and rendering.

use thiserror::Error;

/// Input that cannot be mapped onto the plot. Rendering reports these as a
/// blank canvas instead of failing.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DegenerateInput {
    #[error("no bars to render")]
    Empty,
    #[error("bar {index} carries a non-finite price")]
    NonFinite { index: usize },
    #[error("price range is zero (every price is {price})")]
    FlatRange { price: f64 },
    #[error("price range {min}..{max} is too wide to scale")]
    RangeOverflow { min: f64, max: f64 },
}

/// Render options that cannot describe a drawable chart.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("plot area is {plot_width}x{plot_height} px after insets; both must be positive")]
    PlotTooSmall { plot_width: i64, plot_height: i64 },
    #[error("candle ratio {0} must lie in (0, 1]")]
    CandleRatio(f32),
    #[error("font size {0} must be positive")]
    FontSize(f32),
    #[error("label decimals {0} exceed the maximum of {max}", max = crate::types::MAX_LABEL_DECIMALS)]
    LabelDecimals(usize),
}

/// Per-row fault found while turning a wire record into an `OhlcBar`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BarError {
    #[error("row is not a bar record: {0}")]
    Malformed(String),
    #[error("missing `{0}`")]
    Missing(&'static str),
    #[error("`{0}` is not a finite number")]
    NonFinite(&'static str),
    #[error("`{field}` value {text:?} is not a number")]
    NotANumber { field: &'static str, text: String },
    #[error("low {low} is above high {high}")]
    InvertedRange { low: f64, high: f64 },
    #[error("{field} {value} lies outside low..=high ({low}..={high})")]
    OutsideRange { field: &'static str, value: f64, low: f64, high: f64 },
}

/// Top-level error returned by the public API.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid render options: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("CSV has no `{0}` column")]
    MissingColumn(&'static str),
    #[error("backend reported an error: {0}")]
    Backend(String),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
