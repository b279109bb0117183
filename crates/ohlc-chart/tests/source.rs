// File: crates/ohlc-chart/tests/source.rs
// Purpose: JSON payload and CSV loading, including boundary defaults and skipped rows.

use ohlc_chart::source::{bars_from_csv_reader, bars_from_json_str, bars_from_path};
use ohlc_chart::{BarError, ChartError, RawBar};

#[test]
fn json_array_loads_bars() {
    let payload = r#"[
        {"date": "2024-01-01", "open": 100, "high": 110, "low": 95, "close": 105, "volume": 12000},
        {"date": "2024-01-02", "open": 105, "high": 108, "low": 100, "close": 102}
    ]"#;
    let loaded = bars_from_json_str(payload).expect("payload");
    assert!(loaded.skipped.is_empty());
    assert_eq!(loaded.bars.len(), 2);
    assert_eq!(loaded.bars[0].volume, 12_000.0);
    // Missing volume defaults at the boundary
    assert_eq!(loaded.bars[1].volume, 0.0);
    assert_eq!(loaded.bars[1].close, 102.0);
}

#[test]
fn json_rows_without_prices_are_skipped() {
    let payload = r#"[
        {"date": "2024-01-01", "open": 100, "high": 110, "low": 95, "close": 105},
        {"date": "2024-01-02", "open": 105, "high": 108, "low": 100},
        {"date": "2024-01-03", "open": 105, "high": 90, "low": 100, "close": 101},
        "garbage",
        {"open": 101, "high": 103, "low": 99, "close": 100}
    ]"#;
    let loaded = bars_from_json_str(payload).expect("payload");
    assert_eq!(loaded.bars.len(), 2);
    assert_eq!(loaded.bars[1].date, "");

    let rows: Vec<usize> = loaded.skipped.iter().map(|s| s.row).collect();
    assert_eq!(rows, vec![1, 2, 3]);
    assert_eq!(loaded.skipped[0].error, BarError::Missing("close"));
    assert_eq!(loaded.skipped[1].error, BarError::InvertedRange { low: 100.0, high: 90.0 });
    assert!(matches!(loaded.skipped[2].error, BarError::Malformed(_)));
}

#[test]
fn json_error_object_is_a_backend_error() {
    let err = bars_from_json_str(r#"{"error": "No data found"}"#).unwrap_err();
    assert!(matches!(err, ChartError::Backend(ref msg) if msg == "No data found"));

    let err = bars_from_json_str("not json").unwrap_err();
    assert!(matches!(err, ChartError::Json(_)));
}

#[test]
fn raw_bar_defaults_only_optional_fields() {
    let raw = RawBar { open: Some(1.0), high: Some(2.0), low: Some(0.5), close: Some(1.5), ..RawBar::default() };
    let bar = raw.into_bar().expect("defaults apply");
    assert_eq!(bar.date, "");
    assert_eq!(bar.volume, 0.0);

    let raw = RawBar { open: Some(f64::INFINITY), high: Some(2.0), low: Some(0.5), close: Some(1.5), ..RawBar::default() };
    assert_eq!(raw.into_bar().unwrap_err(), BarError::NonFinite("open"));
}

#[test]
fn csv_matches_header_aliases() {
    let data = "Date,O,H,L,Adj_Close,Vol\n\
                2024-01-01,100,110,95,105,1000\n\
                2024-01-02, 105 ,108,100,102,\n\
                2024-01-03,abc,108,100,102,5\n";
    let loaded = bars_from_csv_reader(data.as_bytes()).expect("csv");
    assert_eq!(loaded.bars.len(), 2);
    assert_eq!(loaded.bars[0].high, 110.0);
    assert_eq!(loaded.bars[1].open, 105.0);
    assert_eq!(loaded.bars[1].volume, 0.0);
    assert_eq!(loaded.skipped.len(), 1);
    assert_eq!(loaded.skipped[0].row, 2);
    assert!(matches!(loaded.skipped[0].error, BarError::NotANumber { field: "open", .. }));
}

#[test]
fn csv_without_close_column_fails() {
    let err = bars_from_csv_reader("date,open,high,low\n2024-01-01,1,2,0.5\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ChartError::MissingColumn("close")));
}

#[test]
fn path_loader_dispatches_on_extension() {
    let dir = std::path::PathBuf::from("target/test_out/source");
    std::fs::create_dir_all(&dir).expect("mkdir");

    let json = dir.join("bars.json");
    std::fs::write(&json, r#"[{"date":"2024-01-01","open":1,"high":2,"low":0.5,"close":1.5}]"#).expect("write json");
    assert_eq!(bars_from_path(&json).expect("json").bars.len(), 1);

    let csv = dir.join("bars.csv");
    std::fs::write(&csv, "date,open,high,low,close\n2024-01-01,1,2,0.5,1.5\n2024-01-02,1.5,2,1,1.2\n").expect("write csv");
    assert_eq!(bars_from_path(&csv).expect("csv").bars.len(), 2);
}
