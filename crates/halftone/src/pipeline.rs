//! End-to-end halftone conversion of a captured frame.

use image::{DynamicImage, RgbaImage};
use tracing::{debug, info};

use crate::dither::dither_image;
use crate::error::ImageError;
use crate::frame::prepare_frame;
use crate::grayscale::{grayscale_image, to_rgba_image};

/// Grayscale, dither, and re-expand an RGBA frame to an opaque black-and-white image.
pub fn halftone_rgba(img: &RgbaImage) -> Result<RgbaImage, ImageError> {
    let gray = grayscale_image(img)?;
    let binary = dither_image(&gray)?;
    to_rgba_image(&binary)
}

/// Crop and scale a captured frame to the portrait canvas, then halftone it.
pub fn halftone_frame(frame: &DynamicImage, width: u32) -> Result<RgbaImage, ImageError> {
    debug!(
        src_width = frame.width(),
        src_height = frame.height(),
        width,
        "Processing captured frame"
    );

    let prepared = prepare_frame(frame, width)?;
    let result = halftone_rgba(&prepared)?;

    info!(
        width = result.width(),
        height = result.height(),
        "Halftone frame ready"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn halftone_rgba_white_stays_white() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        let result = halftone_rgba(&img).unwrap();
        for px in result.pixels() {
            assert_eq!(px, &Rgba([255, 255, 255, 255]));
        }
    }

    #[test]
    fn halftone_rgba_is_opaque_black_and_white() {
        // Translucent mid-gray input
        let img = RgbaImage::from_pixel(5, 4, Rgba([100, 110, 90, 40]));
        let result = halftone_rgba(&img).unwrap();
        for px in result.pixels() {
            assert!(px[0] == 0 || px[0] == 255);
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn halftone_rgba_matches_known_row() {
        let img = RgbaImage::from_pixel(3, 1, Rgba([100, 100, 100, 255]));
        let result = halftone_rgba(&img).unwrap();
        let values: Vec<u8> = result.pixels().map(|p| p[0]).collect();
        assert_eq!(values, vec![0, 255, 0]);
    }

    #[test]
    fn halftone_rgba_matches_buffer_functions() {
        use crate::dither::dither_error_diffusion;
        use crate::grayscale::{expand_to_rgba, reduce_to_grayscale};

        let pixels: Vec<u8> = (0..9 * 7 * 4).map(|i| (i * 29 % 256) as u8).collect();
        let img = RgbaImage::from_raw(9, 7, pixels.clone()).unwrap();

        let gray = reduce_to_grayscale(&pixels, 9, 7).unwrap();
        let binary = dither_error_diffusion(&gray, 9, 7).unwrap();
        let expected = expand_to_rgba(&binary, 9, 7).unwrap();

        let result = halftone_rgba(&img).unwrap();
        assert_eq!(result.dimensions(), (9, 7));
        assert_eq!(result.as_raw(), &expected);
    }

    #[test]
    fn halftone_frame_outputs_canvas_size() {
        let frame = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            320,
            240,
            Rgba([128, 128, 128, 255]),
        ));
        let result = halftone_frame(&frame, 40).unwrap();
        assert_eq!(result.dimensions(), (40, 60));
    }

    #[test]
    fn halftone_frame_rejects_empty_frame() {
        let frame = DynamicImage::ImageRgba8(RgbaImage::new(0, 0));
        assert!(matches!(halftone_frame(&frame, 40), Err(ImageError::EmptyFrame)));
    }

    #[test]
    fn halftone_rgba_rejects_empty_image() {
        let img = RgbaImage::new(0, 3);
        match halftone_rgba(&img) {
            Err(ImageError::InvalidDimensions {
                width,
                height,
                channels,
                ..
            }) => assert_eq!((width, height, channels), (0, 3, 4)),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
