// File: crates/ohlc-chart/src/chart.rs
// Summary: CandleChart and the headless rendering pipeline on Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::{debug, instrument};

use crate::bar::{latest, Direction, OhlcBar};
use crate::error::{ChartError, ConfigError, DegenerateInput, Result};
use crate::layout::ChartLayout;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, CANDLE_RATIO, DATE_LABELS, FONT_SIZE, GRID_LINES, HEIGHT, MAX_LABEL_DECIMALS, WIDTH};

/// What to do when every price in the window is identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FlatRangePolicy {
    /// Floor the price span at `PRICE_RANGE_EPSILON` and draw anyway.
    #[default]
    Floor,
    /// Leave the canvas blank.
    Blank,
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub candle_ratio: f32,
    pub grid_lines: usize,
    pub date_labels: usize,
    /// Fraction digits on price labels, at most `MAX_LABEL_DECIMALS`.
    pub label_decimals: usize,
    pub font_size: f32,
    pub draw_labels: bool,
    pub flat_range: FlatRangePolicy,
    pub title: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            candle_ratio: CANDLE_RATIO,
            grid_lines: GRID_LINES,
            date_labels: DATE_LABELS,
            label_decimals: 0,
            font_size: FONT_SIZE,
            draw_labels: true,
            flat_range: FlatRangePolicy::default(),
            title: None,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let plot_width = self.width as i64 - self.insets.hsum();
        let plot_height = self.height as i64 - self.insets.vsum();
        if plot_width <= 0 || plot_height <= 0 {
            return Err(ConfigError::PlotTooSmall { plot_width, plot_height });
        }
        if !(self.candle_ratio > 0.0 && self.candle_ratio <= 1.0) {
            return Err(ConfigError::CandleRatio(self.candle_ratio));
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ConfigError::FontSize(self.font_size));
        }
        if self.label_decimals > MAX_LABEL_DECIMALS {
            return Err(ConfigError::LabelDecimals(self.label_decimals));
        }
        Ok(())
    }
}

/// Result of a successful render call.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOutcome {
    Drawn { candles: usize },
    /// Only the background was painted.
    Blank(DegenerateInput),
}

/// Unpremultiplied RGBA8 pixels read back from a render.
#[derive(Clone, Debug)]
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: i32,
    pub height: i32,
    pub stride: usize,
    pub outcome: RenderOutcome,
}

impl RgbaFrame {
    /// RGBA at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride + x as usize * 4;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }
}

/// A chronological run of daily bars, ready to draw.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandleChart {
    pub bars: Vec<OhlcBar>,
}

impl CandleChart {
    pub fn new(bars: Vec<OhlcBar>) -> Self {
        Self { bars }
    }

    /// Keep only the `n` most recent bars.
    pub fn with_window(mut self, n: usize) -> Self {
        let skip = self.bars.len() - latest(&self.bars, n).len();
        self.bars.drain(..skip);
        self
    }

    pub fn layout(&self, opts: &RenderOptions) -> std::result::Result<ChartLayout, DegenerateInput> {
        ChartLayout::compute(&self.bars, opts)
    }

    /// Draw onto a caller-owned canvas sized `opts.width x opts.height`.
    ///
    /// The canvas is cleared to the theme background first. Degenerate input
    /// leaves it that way and comes back as `RenderOutcome::Blank`.
    #[instrument(level = "debug", skip_all, fields(bars = self.bars.len(), width = opts.width, height = opts.height))]
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> Result<RenderOutcome> {
        opts.validate()?;
        canvas.clear(opts.theme.background);

        let layout = match self.layout(opts) {
            Ok(layout) => layout,
            Err(reason) => {
                debug!(%reason, "rendering blank canvas");
                return Ok(RenderOutcome::Blank(reason));
            }
        };

        let text = opts.draw_labels.then(TextShaper::new);
        draw_grid(canvas, &layout, opts, text.as_ref());
        draw_candles(canvas, &layout, &opts.theme);
        if let Some(text) = &text {
            draw_date_labels(canvas, &layout, opts, text);
            if let Some(title) = &opts.title {
                text.draw_left(canvas, title, layout.plot.left, layout.plot.top - 14.0, opts.font_size + 4.0, opts.theme.title);
            }
        }
        Ok(RenderOutcome::Drawn { candles: layout.candles.len() })
    }

    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<RgbaFrame> {
        let (mut surface, outcome) = self.render_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok(RgbaFrame { pixels, width: opts.width, height: opts.height, stride, outcome })
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (mut surface, _) = self.render_surface(opts)?;
        encode_png(&mut surface)
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<RenderOutcome> {
        let (mut surface, outcome) = self.render_surface(opts)?;
        let bytes = encode_png(&mut surface)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(outcome)
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<(skia::Surface, RenderOutcome)> {
        opts.validate()?;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        let outcome = self.draw(surface.canvas(), opts)?;
        Ok((surface, outcome))
    }
}

fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(ChartError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, layout: &ChartLayout, opts: &RenderOptions, text: Option<&TextShaper>) {
    let mut paint = skia::Paint::default();
    paint.set_color(opts.theme.grid);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);

    let plot = &layout.plot;
    for line in &layout.grid {
        canvas.draw_line((plot.left, line.y), (plot.right, line.y), &paint);
        if let Some(text) = text {
            text.draw_left(canvas, &line.label, plot.right + 5.0, line.y + 3.0, opts.font_size, opts.theme.label);
        }
    }
}

fn draw_candles(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    let mut wick = skia::Paint::default();
    wick.set_anti_alias(true);
    wick.set_style(skia::paint::Style::Stroke);
    wick.set_stroke_width(1.0);

    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    for c in &layout.candles {
        let color = candle_color(theme, c.direction);
        wick.set_color(color);
        body.set_color(color);

        canvas.draw_line((c.x, c.wick_top), (c.x, c.wick_bottom), &wick);
        let rect = skia::Rect::from_xywh(c.body.left, c.body.top, c.body.width, c.body.height);
        canvas.draw_rect(rect, &body);
    }
}

fn draw_date_labels(canvas: &skia::Canvas, layout: &ChartLayout, opts: &RenderOptions, text: &TextShaper) {
    let baseline = layout.plot.bottom + 15.0;
    for label in &layout.date_labels {
        text.draw_left(canvas, &label.text, label.x - 15.0, baseline, opts.font_size, opts.theme.label);
    }
}

/// Body and wick colour for a candle.
pub fn candle_color(theme: &Theme, direction: Direction) -> skia::Color {
    match direction {
        Direction::Up => theme.candle_up,
        Direction::Down => theme.candle_down,
    }
}
