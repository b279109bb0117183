// File: crates/ohlc-chart/tests/properties.rs
// Purpose: Randomized checks of layout invariants (determinism, containment, colour, body height).

use ohlc_chart::chart::candle_color;
use ohlc_chart::{ChartLayout, ColorConvention, Direction, OhlcBar, RenderOptions, Theme};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Build well-formed bars from arbitrary integers: open/close anywhere, the
/// wick extending a little past the body on both sides.
fn bars_from(seed: &[(u16, u16, u8, u8)]) -> Vec<OhlcBar> {
    seed.iter()
        .take(180)
        .enumerate()
        .map(|(i, &(o, c, up, down))| {
            let open = o as f64 / 4.0;
            let close = c as f64 / 4.0;
            OhlcBar {
                date: format!("2024-{:02}-{:02}", i / 28 + 1, i % 28 + 1),
                open,
                high: open.max(close) + up as f64 / 8.0,
                low: open.min(close) - down as f64 / 8.0,
                close,
                volume: 0.0,
            }
        })
        .collect()
}

fn options(w: u16, h: u16) -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.width = 200 + (w % 1400) as i32;
    opts.height = 120 + (h % 800) as i32;
    opts
}

#[quickcheck]
fn layout_is_deterministic(seed: Vec<(u16, u16, u8, u8)>, w: u16, h: u16) -> TestResult {
    let bars = bars_from(&seed);
    if bars.is_empty() {
        return TestResult::discard();
    }
    let opts = options(w, h);
    let a = ChartLayout::compute(&bars, &opts).expect("layout a");
    let b = ChartLayout::compute(&bars, &opts).expect("layout b");
    TestResult::from_bool(a == b)
}

#[quickcheck]
fn wicks_stay_inside_plot(seed: Vec<(u16, u16, u8, u8)>, w: u16, h: u16) -> TestResult {
    let bars = bars_from(&seed);
    if bars.is_empty() {
        return TestResult::discard();
    }
    let layout = ChartLayout::compute(&bars, &options(w, h)).expect("layout");
    let plot = layout.plot;
    let inside = |y: f32| y >= plot.top && y <= plot.bottom;
    TestResult::from_bool(
        layout.candles.iter().all(|c| inside(c.wick_top) && inside(c.wick_bottom) && c.wick_top <= c.wick_bottom),
    )
}

#[quickcheck]
fn bodies_are_at_least_one_pixel(seed: Vec<(u16, u16, u8, u8)>) -> TestResult {
    let bars = bars_from(&seed);
    if bars.is_empty() {
        return TestResult::discard();
    }
    let layout = ChartLayout::compute(&bars, &RenderOptions::default()).expect("layout");
    let plot = layout.plot;
    TestResult::from_bool(layout.candles.iter().all(|c| {
        c.body.height >= 1.0 && c.body.top >= plot.top && c.body.bottom() <= plot.bottom + 1e-3
    }))
}

#[quickcheck]
fn colour_follows_close_vs_open(seed: Vec<(u16, u16, u8, u8)>, green_up: bool) -> TestResult {
    let bars = bars_from(&seed);
    if bars.is_empty() {
        return TestResult::discard();
    }
    let convention = if green_up { ColorConvention::GreenUp } else { ColorConvention::RedUp };
    let theme = Theme::slate().with_convention(convention);
    let layout = ChartLayout::compute(&bars, &RenderOptions::default()).expect("layout");
    let ok = layout.candles.iter().zip(&bars).all(|(c, b)| {
        let want = if b.close >= b.open { theme.candle_up } else { theme.candle_down };
        let expected_dir = if b.close >= b.open { Direction::Up } else { Direction::Down };
        c.direction == expected_dir && candle_color(&theme, c.direction) == want
    });
    TestResult::from_bool(ok)
}

#[quickcheck]
fn candles_fill_their_slots_in_order(seed: Vec<(u16, u16, u8, u8)>) -> TestResult {
    let bars = bars_from(&seed);
    if bars.is_empty() {
        return TestResult::discard();
    }
    let layout = ChartLayout::compute(&bars, &RenderOptions::default()).expect("layout");
    let plot = layout.plot;
    let ordered = layout.candles.windows(2).all(|w| w[0].x < w[1].x);
    let inside = layout
        .candles
        .iter()
        .all(|c| c.body.left >= plot.left - 1e-3 && c.body.right() <= plot.right + 1e-3);
    TestResult::from_bool(ordered && inside && layout.candles.len() == bars.len())
}
