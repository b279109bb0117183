// File: crates/ohlc-chart/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a labelled candlestick PNG.

use ohlc_chart::{CandleChart, OhlcBar, RenderOptions, RenderOutcome};

fn sample_bars() -> Vec<OhlcBar> {
    let closes = [1520.0, 1534.0, 1528.0, 1551.0, 1547.0, 1563.0, 1558.0, 1572.0];
    let mut prev = 1510.0;
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let o = prev;
            prev = c;
            OhlcBar::try_new(format!("2024-05-{:02}", i + 1), o, o.max(c) + 6.0, o.min(c) - 4.0, c, 12_000.0)
                .expect("well-formed bar")
        })
        .collect()
}

#[test]
fn render_smoke_png() {
    let chart = CandleChart::new(sample_bars());
    let mut opts = RenderOptions::default();
    opts.title = Some("Toyota Motor (7203)".to_string());

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    let outcome = chart.render_to_png(&opts, &out).expect("render should succeed");
    assert_eq!(outcome, RenderOutcome::Drawn { candles: 8 });
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let decoded = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(decoded.dimensions(), (900, 450));
}

#[test]
fn empty_chart_still_writes_png() {
    let bytes = CandleChart::default()
        .render_to_png_bytes(&RenderOptions::default())
        .expect("blank render must not fail");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
