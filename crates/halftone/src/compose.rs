//! Print composite: header, halftone photo, and footer on a white sheet.

use ab_glyph::{Font, PxScale};
use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::stamp::{HEADER_LINES, PrintCaptions};
use crate::text;

/// Header font size in pixels.
pub const HEADER_FONT_SIZE: u32 = 26;

/// Footer font size in pixels.
pub const FOOTER_FONT_SIZE: u32 = 24;

/// Extra space below the two header lines and below the two footer lines.
pub const MARGIN: u32 = 20;

/// Left inset of the footer lines.
pub const FOOTER_X: i32 = 10;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Geometry of the print sheet for a given photo size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintLayout {
    pub width: u32,
    pub height: u32,
    pub photo_y: u32,
    pub header_baselines: [i32; 2],
    pub footer_baselines: [i32; 2],
}

impl PrintLayout {
    pub fn header_height() -> u32 {
        HEADER_FONT_SIZE * 2 + MARGIN
    }

    pub fn footer_height() -> u32 {
        FOOTER_FONT_SIZE * 2 + MARGIN
    }

    /// Lay out a sheet as wide as the photo.
    pub fn for_photo(photo_width: u32, photo_height: u32) -> Self {
        let header = Self::header_height();
        let footer_top = (header + photo_height) as i32;
        let (hs, fs) = (HEADER_FONT_SIZE as i32, FOOTER_FONT_SIZE as i32);

        Self {
            width: photo_width,
            height: header + photo_height + Self::footer_height(),
            photo_y: header,
            header_baselines: [hs, hs * 2],
            footer_baselines: [footer_top + fs, footer_top + fs * 2],
        }
    }

    /// White sheet with the photo placed below the header band.
    pub fn blank_canvas(&self, photo: &RgbaImage) -> RgbaImage {
        let mut sheet = RgbaImage::from_pixel(self.width, self.height, WHITE);
        image::imageops::replace(&mut sheet, photo, 0, i64::from(self.photo_y));
        sheet
    }
}

/// Render the print sheet: centered header, photo, left-aligned date and place.
pub fn compose_print<F: Font>(
    photo: &RgbaImage,
    captions: &PrintCaptions,
    font: &F,
) -> RgbaImage {
    let layout = PrintLayout::for_photo(photo.width(), photo.height());
    debug!(
        width = layout.width,
        height = layout.height,
        "Composing print sheet"
    );

    let mut sheet = layout.blank_canvas(photo);

    let header_scale = PxScale::from(HEADER_FONT_SIZE as f32);
    for (line, baseline) in HEADER_LINES.iter().zip(layout.header_baselines) {
        text::draw_centered_text(&mut sheet, font, header_scale, baseline, line, BLACK);
    }

    let footer_scale = PxScale::from(FOOTER_FONT_SIZE as f32);
    let footer_lines = [captions.date.as_str(), captions.place.as_str()];
    for (line, baseline) in footer_lines.iter().zip(layout.footer_baselines) {
        text::draw_text_at_baseline(
            &mut sheet,
            font,
            footer_scale,
            FOOTER_X,
            baseline,
            line,
            BLACK,
        );
    }

    sheet
}
