//! Text rendering helpers for the print composite.
//!
//! Positions are given as baselines, the way a 2D canvas places text;
//! `imageproc` draws from the top of the glyph box, so baselines are
//! shifted up by the font ascent before drawing.

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

use crate::error::ImageError;

/// Parse TTF/OTF font data.
pub fn parse_font(data: &[u8]) -> Result<FontRef<'_>, ImageError> {
    FontRef::try_from_slice(data).map_err(|_| ImageError::FontParse)
}

/// Measure the pixel width of a string at the given font and scale.
pub fn measure_text_width<F: Font>(font: &F, scale: PxScale, text: &str) -> u32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width.ceil() as u32
}

/// Compute the line height for the given font and scale.
pub fn line_height<F: Font>(font: &F, scale: PxScale) -> u32 {
    let scaled = font.as_scaled(scale);
    (scaled.ascent() - scaled.descent() + scaled.line_gap()).ceil() as u32
}

/// Distance from the glyph-box top to the baseline.
fn ascent<F: Font>(font: &F, scale: PxScale) -> i32 {
    font.as_scaled(scale).ascent().round() as i32
}

/// Draw left-aligned text with its baseline at `baseline`.
pub fn draw_text_at_baseline<F: Font>(
    img: &mut RgbaImage,
    font: &F,
    scale: PxScale,
    x: i32,
    baseline: i32,
    text: &str,
    color: Rgba<u8>,
) {
    let y = baseline - ascent(font, scale);
    draw_text_mut(img, color, x, y, scale, font, text);
}

/// Draw text horizontally centered on the image with its baseline at `baseline`.
pub fn draw_centered_text<F: Font>(
    img: &mut RgbaImage,
    font: &F,
    scale: PxScale,
    baseline: i32,
    text: &str,
    color: Rgba<u8>,
) {
    let text_width = measure_text_width(font, scale, text) as i32;
    let x = ((img.width() as i32) - text_width).max(0) / 2;
    draw_text_at_baseline(img, font, scale, x, baseline, text, color);
}

/// Read the first available system TTF for rendering tests.
#[cfg(test)]
pub(crate) fn system_font_data() -> Option<Vec<u8>> {
    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    CANDIDATES.iter().find_map(|path| std::fs::read(path).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_font_rejects_garbage() {
        assert!(matches!(
            parse_font(b"definitely not a font"),
            Err(ImageError::FontParse)
        ));
        assert!(matches!(parse_font(&[]), Err(ImageError::FontParse)));
    }

    #[test]
    fn line_height_covers_font_size() {
        let Some(data) = system_font_data() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let font = parse_font(&data).unwrap();

        let small = line_height(&font, PxScale::from(24.0));
        let large = line_height(&font, PxScale::from(26.0));
        assert!(small >= 24, "line height {small} below font size");
        assert!(large >= small);
    }

    #[test]
    fn measure_text_width_grows_with_text() {
        let Some(data) = system_font_data() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let font = parse_font(&data).unwrap();
        let scale = PxScale::from(24.0);

        assert_eq!(measure_text_width(&font, scale, ""), 0);
        let short = measure_text_width(&font, scale, "Date");
        let long = measure_text_width(&font, scale, "Date : 2024/03/07");
        assert!(short > 0);
        assert!(long > short);
    }

    #[test]
    fn draw_text_at_baseline_stays_above_baseline() {
        let Some(data) = system_font_data() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let font = parse_font(&data).unwrap();
        let mut img = RgbaImage::from_pixel(200, 60, Rgba([255, 255, 255, 255]));

        // Capital letters have no descenders.
        draw_text_at_baseline(
            &mut img,
            &font,
            PxScale::from(24.0),
            10,
            40,
            "HELLO",
            Rgba([0, 0, 0, 255]),
        );

        let dark_rows: Vec<u32> = (0..img.height())
            .filter(|&y| (0..img.width()).any(|x| img.get_pixel(x, y)[0] < 128))
            .collect();
        assert!(!dark_rows.is_empty());
        let last = *dark_rows.last().unwrap();
        assert!((38..=41).contains(&last), "glyphs end at row {last}");
    }
}
