// File: crates/ohlc-chart/src/source.rs
// Summary: Loaders for the backend chart payload (JSON) and OHLC tables (CSV).
// Notes:
// - Both paths go through `RawBar::into_bar`, so defaulting and validation
//   rules are identical whatever the input format.
// - Bad rows are skipped and reported, never fatal; a malformed document is.

use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::bar::{OhlcBar, RawBar};
use crate::error::{BarError, ChartError, Result};

/// A row that was dropped during loading.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedRow {
    /// Zero-based position among the data rows.
    pub row: usize,
    pub error: BarError,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadedBars {
    pub bars: Vec<OhlcBar>,
    pub skipped: Vec<SkippedRow>,
}

impl LoadedBars {
    fn collect(raw: impl IntoIterator<Item = std::result::Result<RawBar, BarError>>) -> Self {
        let mut out = Self::default();
        for (row, rec) in raw.into_iter().enumerate() {
            match rec.and_then(RawBar::into_bar) {
                Ok(bar) => out.bars.push(bar),
                Err(error) => {
                    warn!(row, %error, "skipping bar");
                    out.skipped.push(SkippedRow { row, error });
                }
            }
        }
        debug!(loaded = out.bars.len(), skipped = out.skipped.len(), "bars loaded");
        out
    }
}

/// Parse a chart payload: either an array of bar objects or `{"error": "..."}`.
pub fn bars_from_json_str(s: &str) -> Result<LoadedBars> {
    bars_from_json_value(serde_json::from_str(s)?)
}

pub fn bars_from_json_reader<R: Read>(reader: R) -> Result<LoadedBars> {
    bars_from_json_value(serde_json::from_reader(reader)?)
}

fn bars_from_json_value(value: Value) -> Result<LoadedBars> {
    match value {
        Value::Array(items) => Ok(LoadedBars::collect(items.into_iter().map(|item| {
            serde_json::from_value::<RawBar>(item).map_err(|e| BarError::Malformed(e.to_string()))
        }))),
        Value::Object(map) => match map.get("error") {
            Some(Value::String(msg)) => Err(ChartError::Backend(msg.clone())),
            Some(other) => Err(ChartError::Backend(other.to_string())),
            None => Err(ChartError::Backend(String::from("expected an array of bars"))),
        },
        other => Err(ChartError::Backend(format!("expected an array of bars, got {other}"))),
    }
}

const DATE_COLUMNS: &[&str] = &["date", "time", "timestamp", "datetime", "open_time"];
const OPEN_COLUMNS: &[&str] = &["open", "o"];
const HIGH_COLUMNS: &[&str] = &["high", "h"];
const LOW_COLUMNS: &[&str] = &["low", "l"];
const CLOSE_COLUMNS: &[&str] = &["close", "c", "adj_close", "close_price"];
const VOLUME_COLUMNS: &[&str] = &["volume", "vol", "v"];

/// Load a headered OHLC CSV. Column names are matched case-insensitively.
pub fn bars_from_csv_reader<R: Read>(reader: R) -> Result<LoadedBars> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.iter().any(|n| *n == h.as_str()));

    let cols = CsvColumns {
        date: idx(DATE_COLUMNS),
        open: idx(OPEN_COLUMNS).ok_or(ChartError::MissingColumn("open"))?,
        high: idx(HIGH_COLUMNS).ok_or(ChartError::MissingColumn("high"))?,
        low: idx(LOW_COLUMNS).ok_or(ChartError::MissingColumn("low"))?,
        close: idx(CLOSE_COLUMNS).ok_or(ChartError::MissingColumn("close"))?,
        volume: idx(VOLUME_COLUMNS),
    };

    let mut rows = Vec::new();
    for rec in rdr.records() {
        rows.push(cols.raw_bar(&rec?));
    }
    Ok(LoadedBars::collect(rows))
}

struct CsvColumns {
    date: Option<usize>,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    volume: Option<usize>,
}

impl CsvColumns {
    fn raw_bar(&self, rec: &csv::StringRecord) -> std::result::Result<RawBar, BarError> {
        Ok(RawBar {
            date: self.date.and_then(|ix| rec.get(ix)).map(str::to_string),
            open: number(rec, "open", Some(self.open))?,
            high: number(rec, "high", Some(self.high))?,
            low: number(rec, "low", Some(self.low))?,
            close: number(rec, "close", Some(self.close))?,
            volume: number(rec, "volume", self.volume)?,
        })
    }
}

/// Empty or absent cells are `None`; text that is not a number rejects the row.
fn number(rec: &csv::StringRecord, field: &'static str, ix: Option<usize>) -> std::result::Result<Option<f64>, BarError> {
    match ix.and_then(|i| rec.get(i)).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(text) => text
            .parse::<f64>()
            .map(Some)
            .map_err(|_| BarError::NotANumber { field, text: text.to_string() }),
    }
}

pub fn bars_from_csv_path(path: impl AsRef<Path>) -> Result<LoadedBars> {
    let file = std::fs::File::open(path.as_ref())?;
    bars_from_csv_reader(std::io::BufReader::new(file))
}

pub fn bars_from_json_path(path: impl AsRef<Path>) -> Result<LoadedBars> {
    let file = std::fs::File::open(path.as_ref())?;
    bars_from_json_reader(std::io::BufReader::new(file))
}

/// Load by extension: `.json` as a chart payload, anything else as CSV.
pub fn bars_from_path(path: impl AsRef<Path>) -> Result<LoadedBars> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json { bars_from_json_path(path) } else { bars_from_csv_path(path) }
}
