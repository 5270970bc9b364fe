//! Setting value validation.

use std::path::Path;

use super::ConfigError;

/// Smallest accepted output width.
pub const MIN_WIDTH: u32 = 1;

/// Largest accepted output width.
pub const MAX_WIDTH: u32 = 4096;

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];

pub fn validate_width(width: u32) -> Result<(), ConfigError> {
    if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        return Err(ConfigError::WidthOutOfRange {
            value: width,
            min: MIN_WIDTH,
            max: MAX_WIDTH,
        });
    }
    Ok(())
}

pub fn validate_font_path(path: &Path) -> Result<(), ConfigError> {
    if has_extension(path, FONT_EXTENSIONS) {
        Ok(())
    } else {
        Err(ConfigError::InvalidFontFormat(path.to_path_buf()))
    }
}

pub fn validate_png_output(path: &Path) -> Result<(), ConfigError> {
    if has_extension(path, &["png"]) {
        Ok(())
    } else {
        Err(ConfigError::InvalidOutput(path.to_path_buf()))
    }
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| allowed.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_bounds() {
        assert!(validate_width(1).is_ok());
        assert!(validate_width(384).is_ok());
        assert!(validate_width(4096).is_ok());
        assert!(matches!(
            validate_width(0),
            Err(ConfigError::WidthOutOfRange { value: 0, .. })
        ));
        assert!(validate_width(4097).is_err());
    }

    #[test]
    fn font_extension_is_case_insensitive() {
        assert!(validate_font_path(Path::new("fonts/NotoSansJP.ttf")).is_ok());
        assert!(validate_font_path(Path::new("Font.OTF")).is_ok());
        assert!(validate_font_path(Path::new("font.woff2")).is_err());
        assert!(validate_font_path(Path::new("font")).is_err());
    }

    #[test]
    fn output_must_be_png() {
        assert!(validate_png_output(Path::new("out/halftone.png")).is_ok());
        assert!(validate_png_output(Path::new("halftone.jpg")).is_err());
    }
}
