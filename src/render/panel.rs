use std::ops::Range;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::text::draw_rotated_text;
use super::Area;
use crate::color::ColorMap;
use crate::config::FigureConfig;
use crate::data::filter::Series;
use crate::error::Result;

/// Approximate number of ticks per axis.
const TICKS: usize = 8;

/// Spine colour and grid colour (light grey).
const SPINE: RGBColor = RGBColor(204, 204, 204);
const GRID: RGBColor = RGBColor(176, 176, 176);

type Chart<'a, 'b> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Title and axis descriptions of one panel.
#[derive(Debug, Clone, Copy)]
pub struct AxisLabels<'s> {
    pub title: &'s str,
    pub x: &'s str,
    pub y: &'s str,
}

// ---------------------------------------------------------------------------
// Panels
// ---------------------------------------------------------------------------

/// Angle-vs-time panel with one line per method and a legend headed by the
/// colour map's column name.
///
/// An empty `series` still draws the axes, title and grid. Lines break at
/// non-finite points.
pub fn draw_time_series(
    area: &Area<'_>,
    labels: &AxisLabels<'_>,
    series: &[Series],
    colors: &ColorMap,
    cfg: &FigureConfig,
) -> Result<()> {
    let x = axis_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.0)));
    let y = axis_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));

    let mut chart = build_chart(area, labels, x, y, cfg.px_u32(cfg.font_pt * 3.0), cfg)?;
    draw_axes(&mut chart, labels, cfg, false)?;
    draw_grid(&mut chart, cfg)?;

    if series.is_empty() {
        return Ok(());
    }

    let width = cfg.px_u32(cfg.series_line_pt);
    let swatch = cfg.px_u32(cfg.font_pt * 2.0);
    let swatch_len = swatch as i32;

    chart
        .draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?
        .label(colors.column.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y)], TRANSPARENT));

    for s in series {
        let color = colors.color_for(&s.method);
        let style = color.stroke_width(width);
        chart
            .draw_series(
                finite_runs(&s.points)
                    .into_iter()
                    .map(|run| PathElement::new(run.to_vec(), style)),
            )?
            .label(s.method.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + swatch_len, y)], color.stroke_width(width))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .margin(cfg.px_u32(6.0))
        .legend_area_size(swatch + cfg.px_u32(4.0))
        .label_font(cfg.font(cfg.font_pt))
        .background_style(WHITE.mix(0.8))
        .border_style(SPINE)
        .draw()?;

    Ok(())
}

/// Angular-velocity-vs-angle panel for one method.
///
/// X tick labels are drawn at `cfg.phase_tick_rotation_deg`.
pub fn draw_phase_portrait(
    area: &Area<'_>,
    labels: &AxisLabels<'_>,
    points: &[(f64, f64)],
    color: RGBColor,
    cfg: &FigureConfig,
) -> Result<()> {
    let x = axis_range(points.iter().map(|p| p.0));
    let y = axis_range(points.iter().map(|p| p.1));

    let mut chart = build_chart(area, labels, x, y, cfg.px_u32(cfg.font_pt * 5.0), cfg)?;
    draw_axes(&mut chart, labels, cfg, true)?;
    draw_rotated_x_ticks(area, &chart, cfg)?;
    draw_grid(&mut chart, cfg)?;

    let style = color.stroke_width(cfg.px_u32(cfg.phase_line_pt));
    chart.draw_series(
        finite_runs(points)
            .into_iter()
            .map(|run| PathElement::new(run.to_vec(), style)),
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

fn build_chart<'a, 'b>(
    area: &'a Area<'b>,
    labels: &AxisLabels<'_>,
    x: Range<f64>,
    y: Range<f64>,
    x_label_area: u32,
    cfg: &FigureConfig,
) -> Result<Chart<'a, 'b>> {
    let chart = ChartBuilder::on(area)
        .caption(labels.title, cfg.font(cfg.title_pt))
        .margin(cfg.px_u32(6.0))
        .x_label_area_size(x_label_area)
        .y_label_area_size(cfg.px_u32(cfg.font_pt * 5.0))
        .build_cartesian_2d(x, y)?;
    Ok(chart)
}

fn draw_axes(
    chart: &mut Chart<'_, '_>,
    labels: &AxisLabels<'_>,
    cfg: &FigureConfig,
    hide_x_labels: bool,
) -> Result<()> {
    let numeric: fn(&f64) -> String = format_tick;
    let blank: fn(&f64) -> String = blank_tick;
    let x_formatter = if hide_x_labels { &blank } else { &numeric };

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(TICKS)
        .y_labels(TICKS)
        .x_desc(labels.x)
        .y_desc(labels.y)
        .label_style(cfg.font(cfg.font_pt))
        .axis_desc_style(cfg.font(cfg.label_pt))
        .axis_style(SPINE.stroke_width(cfg.px_u32(0.8)))
        .x_label_formatter(x_formatter)
        .y_label_formatter(&numeric)
        .draw()?;
    Ok(())
}

/// Light dashed lines at every major tick, under the data.
fn draw_grid(chart: &mut Chart<'_, '_>, cfg: &FigureConfig) -> Result<()> {
    let (xs, ys, x_range, y_range) = {
        let spec = chart.as_coord_spec();
        (
            spec.x_spec().key_points(TICKS),
            spec.y_spec().key_points(TICKS),
            spec.x_spec().range(),
            spec.y_spec().range(),
        )
    };

    let style = GRID.mix(cfg.grid_alpha).stroke_width(cfg.px_u32(cfg.grid_line_pt));
    let dash = cfg.px_u32(cfg.grid_dash_pt);
    let gap = cfg.px_u32(cfg.grid_gap_pt);

    for x in xs {
        chart.draw_series(DashedLineSeries::new(
            vec![(x, y_range.start), (x, y_range.end)],
            dash,
            gap,
            style,
        ))?;
    }
    for y in ys {
        chart.draw_series(DashedLineSeries::new(
            vec![(x_range.start, y), (x_range.end, y)],
            dash,
            gap,
            style,
        ))?;
    }
    Ok(())
}

fn draw_rotated_x_ticks(area: &Area<'_>, chart: &Chart<'_, '_>, cfg: &FigureConfig) -> Result<()> {
    let spec = chart.as_coord_spec();
    let y_bottom = spec.y_spec().range().start;
    let (base_x, base_y) = area.get_base_pixel();
    // Tick length plus label pad.
    let offset = cfg.px(7.0).round() as i32;
    let style: TextStyle = cfg.font(cfg.font_pt).into();

    for x in spec.x_spec().key_points(TICKS) {
        let (px, py) = chart.backend_coord(&(x, y_bottom));
        draw_rotated_text(
            area,
            &format_tick(&x),
            (px - base_x, py - base_y + offset),
            &style,
            BLACK,
            cfg.phase_tick_rotation_deg,
        )?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Axis helpers
// ---------------------------------------------------------------------------

/// Data extent with 5 % margins. Empty input gives `0..1`; a single value is
/// widened so the axis is never degenerate.
pub fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        return 0.0..1.0;
    }
    let span = hi - lo;
    if span == 0.0 {
        let half = if lo == 0.0 { 0.05 } else { lo.abs() * 0.05 };
        return lo - half..hi + half;
    }
    let pad = span * 0.05;
    lo - pad..hi + pad
}

/// Maximal stretches of `points` with both coordinates finite.
pub fn finite_runs(points: &[(f64, f64)]) -> Vec<&[(f64, f64)]> {
    points
        .split(|(x, y)| !x.is_finite() || !y.is_finite())
        .filter(|run| !run.is_empty())
        .collect()
}

/// Shortest decimal form with at most three fractional digits.
pub fn format_tick(v: &f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn blank_tick(_: &f64) -> String {
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_axis_defaults_to_unit_range() {
        assert_eq!(axis_range(std::iter::empty()), 0.0..1.0);
        assert_eq!(axis_range([f64::NAN].into_iter()), 0.0..1.0);
    }

    #[test]
    fn axis_range_adds_five_percent_margin() {
        let r = axis_range([0.0, 2.0, 1.0].into_iter());
        assert!((r.start - -0.1).abs() < 1e-12);
        assert!((r.end - 2.1).abs() < 1e-12);
    }

    #[test]
    fn single_value_axis_is_widened() {
        let r = axis_range([0.0, 0.0].into_iter());
        assert!(r.start < 0.0 && r.end > 0.0);
        let r = axis_range([-2.0].into_iter());
        assert!((r.start - -2.1).abs() < 1e-12);
        assert!((r.end - -1.9).abs() < 1e-12);
    }

    #[test]
    fn lines_break_at_missing_values() {
        let points = [
            (0.0, 0.1),
            (1.0, f64::NAN),
            (2.0, 0.3),
            (3.0, 0.4),
            (f64::NAN, 0.5),
            (f64::NAN, f64::NAN),
        ];
        let runs = finite_runs(&points);
        assert_eq!(runs, vec![&points[0..1], &points[2..4]]);
        assert!(finite_runs(&[]).is_empty());
        assert!(finite_runs(&[(f64::NAN, 0.0)]).is_empty());
    }

    #[test]
    fn ticks_are_trimmed() {
        assert_eq!(format_tick(&0.0), "0");
        assert_eq!(format_tick(&-0.0001), "0");
        assert_eq!(format_tick(&0.05), "0.05");
        assert_eq!(format_tick(&-0.1), "-0.1");
        assert_eq!(format_tick(&20.0), "20");
        assert_eq!(format_tick(&2.5), "2.5");
    }
}
