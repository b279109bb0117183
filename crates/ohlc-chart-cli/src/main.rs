// File: crates/ohlc-chart-cli/src/main.rs
// Summary: Loads daily OHLC bars from a JSON chart payload or CSV and renders a candlestick PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ohlc_chart::source::bars_from_path;
use ohlc_chart::{
    theme, CandleChart, ColorConvention, FlatRangePolicy, Insets, RenderOptions, RenderOutcome, DEFAULT_WINDOW,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Largest `--padding`; two of them still fit in an `i32` surface dimension.
const MAX_PADDING: i64 = i32::MAX as i64 / 2;

/// Render daily OHLC bars as a candlestick chart.
#[derive(Parser, Debug)]
#[command(name = "ohlc-chart", version, about)]
struct Cli {
    /// Input file: `.json` chart payload or `.csv` table (`.cvs` also accepted)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PNG path (default: target/out/chart_<stem>.png)
    #[arg(short, long)]
    out: Option<PathBuf>,

    #[arg(long, env = "OHLC_CHART_WIDTH", default_value_t = ohlc_chart::types::WIDTH)]
    width: i32,

    #[arg(long, env = "OHLC_CHART_HEIGHT", default_value_t = ohlc_chart::types::HEIGHT)]
    height: i32,

    /// Margin on every side, reserved for labels
    #[arg(long, default_value_t = ohlc_chart::types::PADDING,
          value_parser = clap::value_parser!(u32).range(..=MAX_PADDING))]
    padding: u32,

    /// Keep only the most recent N bars
    #[arg(long, default_value_t = DEFAULT_WINDOW)]
    window: usize,

    /// Palette preset (slate, dark, light)
    #[arg(long, env = "OHLC_CHART_THEME", default_value = "slate")]
    theme: String,

    /// Which colour marks a rising candle
    #[arg(long, env = "OHLC_CHART_CONVENTION", value_enum, default_value_t = Convention::RedUp)]
    convention: Convention,

    /// Title drawn above the plot, e.g. "Toyota Motor (7203)"
    #[arg(short, long)]
    title: Option<String>,

    /// Fraction digits on price labels (at most 10)
    #[arg(long, default_value_t = 0)]
    decimals: usize,

    /// Behaviour when every price is identical
    #[arg(long, value_enum, default_value_t = Flat::Floor)]
    flat: Flat,

    /// Skip all text (grid prices, dates, title)
    #[arg(long)]
    no_labels: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Convention {
    RedUp,
    GreenUp,
}

impl From<Convention> for ColorConvention {
    fn from(c: Convention) -> Self {
        match c {
            Convention::RedUp => ColorConvention::RedUp,
            Convention::GreenUp => ColorConvention::GreenUp,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Flat {
    Floor,
    Blank,
}

impl From<Flat> for FlatRangePolicy {
    fn from(f: Flat) -> Self {
        match f {
            Flat::Floor => FlatRangePolicy::Floor,
            Flat::Blank => FlatRangePolicy::Blank,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let (path, used_alt) = resolve_path(&cli.input)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let loaded = bars_from_path(&path).with_context(|| format!("failed to load '{}'", path.display()))?;
    if !loaded.skipped.is_empty() {
        warn!(skipped = loaded.skipped.len(), "some rows were not usable bars");
    }
    info!(bars = loaded.bars.len(), "loaded bars");

    let chart = CandleChart::new(loaded.bars).with_window(cli.window);
    let opts = build_options(&cli)?;
    let out = cli.out.clone().unwrap_or_else(|| out_name_for(&path));

    match chart.render_to_png(&opts, &out)? {
        RenderOutcome::Drawn { candles } => info!(candles, out = %out.display(), "wrote chart"),
        RenderOutcome::Blank(reason) => warn!(%reason, out = %out.display(), "wrote blank chart"),
    }
    Ok(())
}

fn build_options(cli: &Cli) -> Result<RenderOptions> {
    let base = theme::find(&cli.theme).with_context(|| {
        let names: Vec<&str> = theme::presets().iter().map(|t| t.name).collect();
        format!("unknown theme '{}' (available: {})", cli.theme, names.join(", "))
    })?;

    let opts = RenderOptions {
        width: cli.width,
        height: cli.height,
        insets: Insets::uniform(cli.padding),
        theme: base.with_convention(cli.convention.into()),
        label_decimals: cli.decimals,
        draw_labels: !cli.no_labels,
        flat_range: cli.flat.into(),
        title: cli.title.clone(),
        ..RenderOptions::default()
    };
    opts.validate().context("invalid chart options")?;
    Ok(opts)
}

/// Resolve path, trying the .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(p: &Path) -> Result<(PathBuf, bool)> {
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Output file name like target/out/chart_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let mut out = PathBuf::from("target/out");
    if stem.is_empty() {
        out.push("chart.png");
    } else {
        out.push(format!("chart_{stem}.png"));
    }
    out
}
