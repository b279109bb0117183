// File: crates/ohlc-chart/tests/labels.rs
// Purpose: Price and date label text.

use ohlc_chart::grid::sample_indices;
use ohlc_chart::label::{format_date, format_price};

#[test]
fn prices_round_half_up_with_grouping() {
    assert_eq!(format_price(0.0, 0), "0");
    assert_eq!(format_price(999.4, 0), "999");
    assert_eq!(format_price(102.5, 0), "103");
    assert_eq!(format_price(1_234_567.4, 0), "1,234,567");
    assert_eq!(format_price(-1_234.5, 0), "-1,234");
    assert_eq!(format_price(-0.4, 0), "0");
    assert_eq!(format_price(1_234.5678, 2), "1,234.57");
    assert_eq!(format_price(f64::NAN, 0), "-");
}

#[test]
fn oversized_decimals_stay_numeric() {
    assert_eq!(format_price(1.5, 400), "1.5000000000");
    let huge = format_price(1e300, 10);
    assert!(!huge.contains("NaN") && !huge.contains("inf"));
}

#[test]
fn dates_become_month_day() {
    assert_eq!(format_date("2024-01-02"), "01/02");
    assert_eq!(format_date("2024-12-31 00:00:00"), "12/31");
    assert_eq!(format_date("x-07-09"), "07/09");
    assert_eq!(format_date(""), "");
}

#[test]
fn sampling_handles_short_inputs() {
    assert_eq!(sample_indices(0, 4), Vec::<usize>::new());
    assert_eq!(sample_indices(5, 0), Vec::<usize>::new());
    assert_eq!(sample_indices(5, 1), vec![0]);
    assert_eq!(sample_indices(180, 4), vec![0, 59, 119, 179]);
}
