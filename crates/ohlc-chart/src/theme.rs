// File: crates/ohlc-chart/src/theme.rs
// Summary: Chart palettes and the rise/fall colour convention.

use skia_safe as skia;

/// Which colour marks a rising candle.
///
/// Markets disagree: East Asian dashboards paint rises red, most Western ones
/// paint them green. The convention is always chosen explicitly by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorConvention {
    /// Red for up, blue for down.
    #[default]
    RedUp,
    /// Green for up, red for down.
    GreenUp,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub label: skia::Color,
    pub title: skia::Color,
    pub candle_up: skia::Color,
    pub candle_down: skia::Color,
}

impl Theme {
    /// Slate dashboard palette with red rises and blue falls.
    pub fn slate() -> Self {
        Self {
            name: "slate",
            background: skia::Color::from_rgb(0x0f, 0x17, 0x2a),
            grid: skia::Color::from_rgb(0x1e, 0x29, 0x3b),
            label: skia::Color::from_rgb(0x64, 0x74, 0x8b),
            title: skia::Color::from_rgb(0xe2, 0xe8, 0xf0),
            candle_up: skia::Color::from_rgb(0xf8, 0x71, 0x71),
            candle_down: skia::Color::from_rgb(0x60, 0xa5, 0xfa),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_rgb(18, 18, 20),
            grid: skia::Color::from_rgb(40, 40, 45),
            label: skia::Color::from_rgb(150, 150, 160),
            title: skia::Color::from_rgb(235, 235, 245),
            candle_up: skia::Color::from_rgb(220, 80, 80),
            candle_down: skia::Color::from_rgb(64, 160, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_rgb(250, 250, 252),
            grid: skia::Color::from_rgb(230, 230, 235),
            label: skia::Color::from_rgb(100, 100, 110),
            title: skia::Color::from_rgb(20, 20, 30),
            candle_up: skia::Color::from_rgb(200, 60, 60),
            candle_down: skia::Color::from_rgb(40, 120, 200),
        }
    }

    /// Re-key the candle colours for `convention`. Red-up themes are the
    /// baseline; green-up swaps in a green rise and moves red to falls.
    pub fn with_convention(mut self, convention: ColorConvention) -> Self {
        if convention == ColorConvention::GreenUp {
            let red = self.candle_up;
            self.candle_up = skia::Color::from_rgb(40, 200, 120);
            self.candle_down = red;
        }
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::slate(), Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
