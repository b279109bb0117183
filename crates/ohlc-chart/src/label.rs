// File: crates/ohlc-chart/src/label.rs
// Summary: Text for price axis labels (grouped thousands) and date labels (MM/DD).

use chrono::NaiveDate;

use crate::types::MAX_LABEL_DECIMALS;

/// Format a price with `decimals` fraction digits and comma-grouped thousands.
/// Rounding is half-up, so `2.5 -> "3"` and `-2.5 -> "-2"`. `decimals` is
/// capped at `MAX_LABEL_DECIMALS`.
pub fn format_price(price: f64, decimals: usize) -> String {
    if !price.is_finite() {
        return String::from("-");
    }
    let decimals = decimals.min(MAX_LABEL_DECIMALS);
    let scale = 10f64.powi(decimals as i32);
    let scaled = price * scale;
    let rounded = if scaled.is_finite() { (scaled + 0.5).floor() / scale } else { price };
    let text = format!("{:.*}", decimals, rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `YYYY-MM-DD[...]` to `MM/DD`.
///
/// Strings that are not a calendar date fall back to joining every `-`
/// separated part after the first with `/`, which keeps odd inputs readable.
pub fn format_date(date: &str) -> String {
    let head = date.trim().get(..10).unwrap_or(date.trim());
    if let Ok(d) = NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        return d.format("%m/%d").to_string();
    }
    date.split('-').skip(1).collect::<Vec<_>>().join("/")
}
