//! Error-diffusion dithering for converting intensity buffers to black-and-white.
//!
//! The kernel spreads the quantization error over four not-yet-visited
//! neighbors with weights 5/3/5/3 (sum 16). This is not the textbook
//! Floyd-Steinberg 7/3/5/1 kernel, and output images depend on it.

use image::GrayImage;
use tracing::debug;

use crate::error::{ImageError, check_dimensions};

/// Binarization threshold: values at or above become white.
const THRESHOLD: i32 = 128;

/// Divisor shared by all kernel weights.
const DIVISOR: i32 = 16;

/// (dx, dy, weight) for each neighbor receiving error.
const KERNEL: [(isize, usize, i32); 4] = [
    (1, 0, 5),  // right
    (-1, 1, 3), // bottom-left
    (0, 1, 5),  // bottom
    (1, 1, 3),  // bottom-right
];

/// Dither an intensity buffer to a binary (0/255) buffer.
///
/// Pixels are visited in raster order. Each neighbor share is
/// `weight * error / 16` truncated toward zero.
pub fn dither_error_diffusion(
    intensity: &[u8],
    width: u32,
    height: u32,
) -> Result<Vec<u8>, ImageError> {
    check_dimensions(width, height, 1, intensity.len())?;
    debug!(width, height, "Applying error-diffusion dithering");

    let w = width as usize;
    let h = height as usize;

    // Signed working copy; accumulated error can leave [0, 255].
    let mut buffer: Vec<i32> = intensity.iter().map(|&v| i32::from(v)).collect();
    let mut output = vec![0u8; intensity.len()];

    for y in 0..h {
        for x in 0..w {
            let idx = y * w + x;
            let old_pixel = buffer[idx];
            let new_pixel = if old_pixel >= THRESHOLD { 255 } else { 0 };
            let error = old_pixel - new_pixel;
            output[idx] = new_pixel as u8;

            distribute_error(&mut buffer, x, y, w, h, error);
        }
    }

    debug!("Error-diffusion dithering complete");
    Ok(output)
}

/// Distribute quantization error to neighboring pixels that are in bounds.
fn distribute_error(
    buffer: &mut [i32],
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    error: i32,
) {
    for &(dx, dy, weight) in &KERNEL {
        let Some(nx) = x.checked_add_signed(dx) else {
            continue;
        };
        let ny = y + dy;
        if nx >= width || ny >= height {
            continue;
        }
        buffer[ny * width + nx] += weight * error / DIVISOR;
    }
}

/// [`dither_error_diffusion`] over an `image` grayscale buffer.
pub fn dither_image(img: &GrayImage) -> Result<GrayImage, ImageError> {
    let (width, height) = img.dimensions();
    let binary = dither_error_diffusion(img.as_raw(), width, height)?;

    // Length already checked against width * height.
    let mut out = GrayImage::new(width, height);
    out.copy_from_slice(&binary);
    Ok(out)
}
