//! Grayscale reduction and display re-expansion.
//!
//! Source frames are interleaved RGBA (4 samples per pixel, row-major).
//! Intensity is the truncated mean of the three color channels; alpha
//! does not participate.

use image::{GrayImage, RgbaImage};
use tracing::debug;

use crate::error::{ImageError, check_dimensions};

/// Samples per pixel in a source frame.
pub const RGBA_CHANNELS: usize = 4;

/// Reduce an RGBA buffer to one intensity value per pixel.
///
/// Each value is `(c0 + c1 + c2) / 3` rounded toward zero.
pub fn reduce_to_grayscale(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ImageError> {
    check_dimensions(width, height, RGBA_CHANNELS, pixels.len())?;
    debug!(width, height, "Reducing frame to grayscale");

    Ok(pixels
        .chunks_exact(RGBA_CHANNELS)
        .map(|px| ((u16::from(px[0]) + u16::from(px[1]) + u16::from(px[2])) / 3) as u8)
        .collect())
}

/// Replicate a single-channel buffer into opaque RGBA.
pub fn expand_to_rgba(values: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ImageError> {
    let count = check_dimensions(width, height, 1, values.len())?;

    let mut out = Vec::with_capacity(count * RGBA_CHANNELS);
    for &v in values {
        out.extend_from_slice(&[v, v, v, 255]);
    }
    Ok(out)
}

/// [`reduce_to_grayscale`] over an `image` RGBA buffer.
pub fn grayscale_image(img: &RgbaImage) -> Result<GrayImage, ImageError> {
    let (width, height) = img.dimensions();
    let luma = reduce_to_grayscale(img.as_raw(), width, height)?;

    // Length already checked against width * height.
    let mut out = GrayImage::new(width, height);
    out.copy_from_slice(&luma);
    Ok(out)
}

/// [`expand_to_rgba`] over an `image` grayscale buffer.
pub fn to_rgba_image(img: &GrayImage) -> Result<RgbaImage, ImageError> {
    let (width, height) = img.dimensions();
    let rgba = expand_to_rgba(img.as_raw(), width, height)?;

    let mut out = RgbaImage::new(width, height);
    out.copy_from_slice(&rgba);
    Ok(out)
}
