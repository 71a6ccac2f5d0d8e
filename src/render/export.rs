use std::path::Path;

use image::{imageops, ImageFormat, Rgb, RgbImage};
use log::debug;

use crate::error::{PlotError, Result};

/// Pixel rectangle `(x, y, width, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Bounding box of every pixel that differs from `background`.
///
/// `None` for a blank canvas.
pub fn content_bounds(img: &RgbImage, background: Rgb<u8>) -> Option<Bounds> {
    let (mut min_x, mut min_y) = (u32::MAX, u32::MAX);
    let (mut max_x, mut max_y) = (0u32, 0u32);
    let mut found = false;

    for (x, y, px) in img.enumerate_pixels() {
        if *px != background {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    found.then(|| Bounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Grow `bounds` by `pad` on every side, clamped to the image.
pub fn padded(bounds: Bounds, pad: u32, (width, height): (u32, u32)) -> Bounds {
    let x = bounds.x.saturating_sub(pad);
    let y = bounds.y.saturating_sub(pad);
    let right = (bounds.x + bounds.width).saturating_add(pad).min(width);
    let bottom = (bounds.y + bounds.height).saturating_add(pad).min(height);
    Bounds {
        x,
        y,
        width: right - x,
        height: bottom - y,
    }
}

/// Crop to the content plus `pad` pixels of background.
pub fn tight_crop(img: &RgbImage, background: Rgb<u8>, pad: u32) -> RgbImage {
    match content_bounds(img, background) {
        Some(bounds) => {
            let b = padded(bounds, pad, img.dimensions());
            imageops::crop_imm(img, b.x, b.y, b.width, b.height).to_image()
        }
        None => img.clone(),
    }
}

/// Encode an RGB canvas as PNG at `path`, tight-cropped, replacing any
/// existing file.
pub fn save_png(
    buffer: Vec<u8>,
    (width, height): (u32, u32),
    pad: u32,
    path: &Path,
) -> Result<()> {
    let canvas = RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| PlotError::drawing("canvas buffer does not match its dimensions"))?;
    let cropped = tight_crop(&canvas, Rgb([255, 255, 255]), pad);
    debug!(
        "cropped {}x{} canvas to {}x{}",
        width,
        height,
        cropped.width(),
        cropped.height()
    );

    cropped
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| PlotError::Export {
            path: path.to_path_buf(),
            source,
        })
}
