// File: crates/ohlc-chart/src/grid.rs
// Summary: Grid level and axis-label sampling helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Evenly spaced grid levels from top to bottom as `(fraction, price)` pairs,
/// where `fraction` is 0.0 at the top edge and 1.0 at the bottom edge.
/// A single line sits on the top edge at `max`.
pub fn price_levels(max: f64, range: f64, lines: usize) -> Vec<(f64, f64)> {
    match lines {
        0 => Vec::new(),
        1 => vec![(0.0, max)],
        n => linspace(0.0, 1.0, n).into_iter().map(|f| (f, max - range * f)).collect(),
    }
}

/// Indices of `count` date labels over `len` bars: `floor((len-1) * i/(count-1))`.
///
/// Sampling is by index, not calendar time: with weekend or holiday gaps the
/// label spacing does not track real elapsed days. Repeated indices (when
/// `len < count`) are emitted once.
pub fn sample_indices(len: usize, count: usize) -> Vec<usize> {
    if len == 0 || count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![0];
    }
    let mut out: Vec<usize> = Vec::with_capacity(count);
    for i in 0..count {
        let idx = ((len - 1) as f64 * (i as f64 / (count - 1) as f64)).floor() as usize;
        if out.last() != Some(&idx) {
            out.push(idx);
        }
    }
    out
}
