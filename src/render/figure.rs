use std::path::Path;

use log::debug;
use plotters::prelude::*;

use super::layout::FigureGrid;
use super::panel::{draw_phase_portrait, draw_time_series, AxisLabels};
use super::{export, Area};
use crate::color::ColorMap;
use crate::config::FigureConfig;
use crate::data::filter::{phase_trajectory, time_series_by_method};
use crate::data::model::{CombinedDataset, Method, Scenario};
use crate::error::Result;

pub const FIGURE_TITLE: &str = "Pendulum Simulation Comparison: Gauss vs Romberg vs Adaptive";

/// Column the line colours are keyed on; also the legend heading.
pub const LEGEND_COLUMN: &str = "Method";

const TIME: &str = "Time (s)";
const ANGLE: &str = "Angle (rad)";
const ANGULAR_VELOCITY: &str = "Angular Velocity (rad/s)";

/// Render the comparison figure for `dataset` and write it to `output`.
///
/// The canvas lives only for the duration of this call.
pub fn render_figure(dataset: &CombinedDataset, cfg: &FigureConfig, output: &Path) -> Result<()> {
    let (width, height) = cfg.canvas_size();
    debug!("canvas {width}x{height} px at {} dpi", cfg.dpi);

    let mut buffer = vec![255u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_figure(&root, dataset, cfg)?;
        root.present()?;
    }

    export::save_png(buffer, (width, height), cfg.tight_pad_px(), output)
}

/// Draw the titled 5×3 grid onto `root`.
pub fn draw_figure(root: &Area<'_>, dataset: &CombinedDataset, cfg: &FigureConfig) -> Result<()> {
    root.fill(&WHITE)?;
    let body = root.titled(FIGURE_TITLE, cfg.font(cfg.suptitle_pt))?;
    let grid = FigureGrid::split(&body);
    let colors = ColorMap::new(LEGEND_COLUMN, &dataset.methods, &cfg.palette);

    let time_panels = [
        (
            &grid.forced,
            Scenario::WithForce,
            "Angle vs Time (With External Force)",
        ),
        (
            &grid.unforced,
            Scenario::NoForce,
            "Angle vs Time (Without External Force)",
        ),
    ];
    for (area, scenario, title) in time_panels {
        let series = time_series_by_method(dataset, scenario);
        debug!("{scenario}: {} method line(s)", series.len());
        let labels = AxisLabels {
            title,
            x: TIME,
            y: ANGLE,
        };
        draw_time_series(area, &labels, &series, &colors, cfg)?;
    }

    // Phase portraits exist for the forced runs only.
    for (area, method) in grid.phase.iter().zip(Method::ALL) {
        let name = method.display_name();
        let title = format!("{name} ({})", Scenario::WithForce);
        let points = phase_trajectory(dataset, name, Scenario::WithForce);
        let labels = AxisLabels {
            title: &title,
            x: ANGLE,
            y: ANGULAR_VELOCITY,
        };
        draw_phase_portrait(area, &labels, &points, colors.color_for(name), cfg)?;
    }

    Ok(())
}
