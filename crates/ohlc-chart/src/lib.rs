// File: crates/ohlc-chart/src/lib.rs
// Summary: Core library entry point; exports the candlestick layout and rendering API.

pub mod bar;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod label;
pub mod layout;
pub mod scale;
pub mod source;
pub mod text;
pub mod theme;
pub mod types;

pub use bar::{Direction, OhlcBar, RawBar, DEFAULT_WINDOW};
pub use chart::{CandleChart, FlatRangePolicy, RenderOptions, RenderOutcome, RgbaFrame};
pub use error::{BarError, ChartError, ConfigError, DegenerateInput};
pub use layout::ChartLayout;
pub use source::LoadedBars;
pub use theme::{ColorConvention, Theme};
pub use types::Insets;
