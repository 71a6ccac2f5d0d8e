use std::path::PathBuf;

use plotters::style::{FontDesc, IntoFont};

/// Directory, relative to the working directory, holding the input series.
pub const INPUT_DIR: &str = "csv";

/// Name of the rendered comparison figure.
pub const OUTPUT_FILE: &str = "pendulum_comparison_new_methods.png";

// ---------------------------------------------------------------------------
// Figure defaults
// ---------------------------------------------------------------------------

/// Saturation / lightness of the categorical method palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteConfig {
    pub saturation: f32,
    pub lightness: f32,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            saturation: 0.75,
            lightness: 0.55,
        }
    }
}

/// Rendering defaults for the whole run.
///
/// Sizes are in typographic points and inches; [`FigureConfig::px`] and
/// [`FigureConfig::canvas_size`] convert them to pixels at the configured DPI.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureConfig {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,

    pub font_family: String,
    pub font_pt: f64,
    pub title_pt: f64,
    pub label_pt: f64,
    pub suptitle_pt: f64,

    pub series_line_pt: f64,
    pub phase_line_pt: f64,

    pub grid_line_pt: f64,
    pub grid_dash_pt: f64,
    pub grid_gap_pt: f64,
    pub grid_alpha: f64,

    /// Rotation of the phase-portrait x tick labels, counter-clockwise.
    pub phase_tick_rotation_deg: f64,

    /// Whitespace kept around the content when cropping the canvas.
    pub tight_pad_in: f64,

    pub palette: PaletteConfig,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_in: 18.0,
            height_in: 22.0,
            dpi: 300.0,
            font_family: "sans-serif".to_string(),
            font_pt: 12.0,
            title_pt: 14.0,
            label_pt: 12.0,
            suptitle_pt: 20.0,
            series_line_pt: 1.5,
            phase_line_pt: 1.0,
            grid_line_pt: 0.8,
            grid_dash_pt: 2.96,
            grid_gap_pt: 1.28,
            grid_alpha: 0.6,
            phase_tick_rotation_deg: 45.0,
            tight_pad_in: 0.1,
            palette: PaletteConfig::default(),
        }
    }
}

impl FigureConfig {
    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi).round().max(1.0) as u32,
            (self.height_in * self.dpi).round().max(1.0) as u32,
        )
    }

    /// Convert points to (fractional) pixels.
    pub fn px(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }

    /// Convert points to whole pixels, never less than one.
    pub fn px_u32(&self, pt: f64) -> u32 {
        self.px(pt).round().max(1.0) as u32
    }

    pub fn tight_pad_px(&self) -> u32 {
        (self.tight_pad_in * self.dpi).round() as u32
    }

    pub fn font(&self, pt: f64) -> FontDesc<'_> {
        (self.font_family.as_str(), self.px(pt)).into_font()
    }
}

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Where to read series from and where to write the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub figure: FigureConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(INPUT_DIR),
            output_path: PathBuf::from(OUTPUT_FILE),
            figure: FigureConfig::default(),
        }
    }
}

impl RunConfig {
    /// Default layout rooted at `base` instead of the working directory.
    pub fn in_dir(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            input_dir: base.join(INPUT_DIR),
            output_path: base.join(OUTPUT_FILE),
            figure: FigureConfig::default(),
        }
    }
}
