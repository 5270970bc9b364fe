//! Frame preparation: 2:3 portrait canvas sizing and center cropping.
//!
//! A captured frame is cropped around its center to the canvas aspect
//! ratio, then scaled to exactly the canvas size.

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::error::ImageError;

/// Canvas aspect ratio numerator (width).
pub const ASPECT_WIDTH: u32 = 2;

/// Canvas aspect ratio denominator (height).
pub const ASPECT_HEIGHT: u32 = 3;

/// Source region of a frame, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute the portrait canvas size for a requested width.
///
/// Height is `width * 3 / 2` with halves rounded up.
pub fn canvas_size(width: u32) -> Result<(u32, u32), ImageError> {
    if width == 0 {
        return Err(ImageError::InvalidWidth(width));
    }

    let height = (u64::from(width) * u64::from(ASPECT_HEIGHT)).div_ceil(u64::from(ASPECT_WIDTH));
    let height = u32::try_from(height).map_err(|_| ImageError::InvalidWidth(width))?;
    Ok((width, height))
}

/// Compute the centered 2:3 region of a `src_width` x `src_height` frame.
///
/// Frames wider than 2:3 lose columns on both sides; taller frames lose
/// rows at the top and bottom.
pub fn center_crop_rect(src_width: u32, src_height: u32) -> Result<CropRect, ImageError> {
    if src_width == 0 || src_height == 0 {
        return Err(ImageError::EmptyFrame);
    }

    let (sw, sh) = (f64::from(src_width), f64::from(src_height));
    let target = f64::from(ASPECT_WIDTH) / f64::from(ASPECT_HEIGHT);

    let rect = if sw / sh > target {
        let width = ((sh * target).round() as u32).clamp(1, src_width);
        CropRect {
            x: (src_width - width) / 2,
            y: 0,
            width,
            height: src_height,
        }
    } else {
        let height = ((sw / target).round() as u32).clamp(1, src_height);
        CropRect {
            x: 0,
            y: (src_height - height) / 2,
            width: src_width,
            height,
        }
    };

    debug!(
        src_width,
        src_height,
        x = rect.x,
        y = rect.y,
        width = rect.width,
        height = rect.height,
        "Computed center crop"
    );
    Ok(rect)
}

/// Crop a frame to 2:3 around its center and scale it to the canvas size.
pub fn prepare_frame(frame: &DynamicImage, width: u32) -> Result<RgbaImage, ImageError> {
    let (canvas_w, canvas_h) = canvas_size(width)?;
    let rect = center_crop_rect(frame.width(), frame.height())?;

    let cropped = frame.crop_imm(rect.x, rect.y, rect.width, rect.height);
    if cropped.width() == canvas_w && cropped.height() == canvas_h {
        debug!(canvas_w, canvas_h, "Frame already at canvas size, skipping resize");
        return Ok(cropped.to_rgba8());
    }

    debug!(
        crop_w = rect.width,
        crop_h = rect.height,
        canvas_w,
        canvas_h,
        "Scaling frame to canvas"
    );
    Ok(cropped
        .resize_exact(canvas_w, canvas_h, FilterType::Triangle)
        .to_rgba8())
}
