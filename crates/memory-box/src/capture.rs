//! Capture flow: load a frame, halftone it, and write the outputs.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;

use halftone::{PrintCaptions, compose_print, halftone_frame, parse_font};

use crate::config::{AppConfig, PrintConfig};

/// Files written by a capture run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureReport {
    pub halftone: PathBuf,
    pub print_sheet: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
}

/// Run one capture with the given configuration.
pub fn run(config: &AppConfig) -> anyhow::Result<CaptureReport> {
    let frame = image::open(&config.input)
        .with_context(|| format!("failed to read frame {}", config.input.display()))?;

    let photo = halftone_frame(&frame, config.width)
        .with_context(|| format!("failed to process frame {}", config.input.display()))?;
    save_png(&photo, &config.output)?;
    tracing::info!(path = %config.output.display(), "Halftone written");

    let print_sheet = match &config.print {
        Some(print) => {
            let captions = PrintCaptions::at(&chrono::Local::now(), print.place.as_str());
            write_print_sheet(&photo, &captions, print)?;
            Some(print.output.clone())
        }
        None => None,
    };

    Ok(CaptureReport {
        halftone: config.output.clone(),
        print_sheet,
        width: photo.width(),
        height: photo.height(),
    })
}

fn write_print_sheet(
    photo: &RgbaImage,
    captions: &PrintCaptions,
    print: &PrintConfig,
) -> anyhow::Result<()> {
    let font_data = std::fs::read(&print.font)
        .with_context(|| format!("failed to read font {}", print.font.display()))?;
    let font = parse_font(&font_data)
        .with_context(|| format!("failed to load font {}", print.font.display()))?;

    let sheet = compose_print(photo, captions, &font);
    save_png(&sheet, &print.output)?;
    tracing::info!(path = %print.output.display(), "Print sheet written");
    Ok(())
}

fn save_png(img: &RgbaImage, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))
}
