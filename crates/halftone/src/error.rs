/// Errors that can occur while processing a captured frame.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error(
        "Invalid dimensions: {width}x{height}x{channels} (size must be nonzero and match {expected} samples, got {actual})"
    )]
    InvalidDimensions {
        width: u32,
        height: u32,
        channels: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid canvas width: {0} (must be greater than zero)")]
    InvalidWidth(u32),

    #[error("Frame is empty (camera not ready?)")]
    EmptyFrame,

    #[error("Failed to parse font data (TTF/OTF)")]
    FontParse,
}

/// Check that `actual` samples cover exactly `width * height * channels`.
///
/// Zero dimensions and overflowing products are rejected as well.
pub(crate) fn check_dimensions(
    width: u32,
    height: u32,
    channels: usize,
    actual: usize,
) -> Result<usize, ImageError> {
    let pixels = (width as usize).checked_mul(height as usize);
    let expected = pixels.and_then(|p| p.checked_mul(channels));

    match (pixels, expected) {
        (Some(pixels), Some(expected)) if pixels > 0 && expected == actual => Ok(pixels),
        _ => Err(ImageError::InvalidDimensions {
            width,
            height,
            channels,
            expected: expected.unwrap_or(usize::MAX),
            actual,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_dimensions_accepts_exact_length() {
        assert_eq!(check_dimensions(3, 2, 4, 24).unwrap(), 6);
        assert_eq!(check_dimensions(3, 2, 1, 6).unwrap(), 6);
    }

    #[test]
    fn check_dimensions_rejects_mismatch() {
        let err = check_dimensions(3, 2, 4, 23).unwrap_err();
        match err {
            ImageError::InvalidDimensions {
                expected, actual, ..
            } => {
                assert_eq!(expected, 24);
                assert_eq!(actual, 23);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn check_dimensions_rejects_zero_size() {
        assert!(matches!(
            check_dimensions(0, 5, 1, 0),
            Err(ImageError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            check_dimensions(5, 0, 4, 0),
            Err(ImageError::InvalidDimensions { .. })
        ));
    }
}
