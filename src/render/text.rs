//! Text at arbitrary angles.
//!
//! plotters only rotates text in quarter turns, so angled tick labels are
//! rasterised upright on a scratch canvas, rotated with `imageproc`, and
//! composited back as a coverage mask.

use image::{GrayImage, Luma};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};
use plotters::prelude::*;

use super::Area;
use crate::error::Result;

/// Coverage mask of `text` rotated counter-clockwise by `degrees`, cropped
/// to its ink.
pub fn rotated_mask(text: &str, style: &TextStyle, degrees: f64) -> Result<GrayImage> {
    let mut measure_buf = vec![255u8; 3];
    let (w, h) = BitMapBackend::with_buffer(&mut measure_buf, (1, 1))
        .into_drawing_area()
        .estimate_text_size(text, style)?;

    // Square canvas large enough for any rotation of the label.
    let side = w + h + 4;
    let mut buf = vec![255u8; (side * side * 3) as usize];
    {
        let scratch = BitMapBackend::with_buffer(&mut buf, (side, side)).into_drawing_area();
        let origin = (((side - w) / 2) as i32, ((side - h) / 2) as i32);
        scratch.draw_text(text, &style.color(&BLACK), origin)?;
        scratch.present()?;
    }

    let mask = GrayImage::from_fn(side, side, |x, y| {
        let i = ((y * side + x) * 3) as usize;
        Luma([255 - buf[i]])
    });
    let rotated = rotate_about_center(
        &mask,
        -(degrees.to_radians() as f32),
        Interpolation::Bilinear,
        Luma([0]),
    );

    Ok(crop_to_ink(&rotated))
}

fn crop_to_ink(mask: &GrayImage) -> GrayImage {
    let ink: Vec<(u32, u32)> = mask
        .enumerate_pixels()
        .filter(|(_, _, p)| p[0] > 0)
        .map(|(x, y, _)| (x, y))
        .collect();
    let Some(min_x) = ink.iter().map(|p| p.0).min() else {
        return GrayImage::new(0, 0);
    };
    let max_x = ink.iter().map(|p| p.0).max().unwrap_or(min_x);
    let min_y = ink.iter().map(|p| p.1).min().unwrap_or(0);
    let max_y = ink.iter().map(|p| p.1).max().unwrap_or(min_y);

    image::imageops::crop_imm(mask, min_x, min_y, max_x - min_x + 1, max_y - min_y + 1).to_image()
}

/// Draw `text` rotated by `degrees`, horizontally centred on `anchor.0` with
/// its top edge at `anchor.1`. `anchor` is relative to `area`.
pub fn draw_rotated_text(
    area: &Area<'_>,
    text: &str,
    anchor: (i32, i32),
    style: &TextStyle,
    color: RGBColor,
    degrees: f64,
) -> Result<()> {
    let mask = rotated_mask(text, style, degrees)?;
    let left = anchor.0 - (mask.width() / 2) as i32;
    let top = anchor.1;

    for (x, y, coverage) in mask.enumerate_pixels() {
        if coverage[0] == 0 {
            continue;
        }
        let alpha = f64::from(coverage[0]) / 255.0;
        area.draw_pixel((left + x as i32, top + y as i32), &color.mix(alpha))?;
    }
    Ok(())
}
