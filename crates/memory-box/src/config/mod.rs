//! Configuration: command-line flags with environment fallbacks.

pub mod app_config;
pub mod validation;

pub use app_config::{AppConfig, PrintConfig};

use std::path::PathBuf;

use clap::Parser;

/// Convert a captured photo into a printable halftone.
#[derive(Parser, Debug, Clone)]
#[command(name = "memory-box")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Captured frame (PNG or JPEG)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Halftone PNG output path
    #[arg(short, long, value_name = "FILE", default_value = "halftone.png")]
    pub output: PathBuf,

    /// Output width in pixels; height follows the 2:3 portrait ratio
    #[arg(long, env = "MEMORY_BOX_WIDTH", default_value_t = halftone::DEFAULT_WIDTH)]
    pub width: u32,

    /// Also write the header/footer print sheet to this PNG
    #[arg(long, value_name = "FILE")]
    pub print: Option<PathBuf>,

    /// TTF/OTF font for the print sheet captions
    #[arg(long, env = "MEMORY_BOX_FONT", value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Second footer line of the print sheet
    #[arg(long, env = "MEMORY_BOX_PLACE", default_value = "Place : ")]
    pub place: String,
}

/// Invalid configuration values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Width must be between {min} and {max} pixels, got {value}")]
    WidthOutOfRange { value: u32, min: u32, max: u32 },

    #[error("A font (--font or MEMORY_BOX_FONT) is required to render the print sheet")]
    MissingFont,

    #[error("Invalid font format (only TTF/OTF supported): {0}")]
    InvalidFontFormat(PathBuf),

    #[error("Output must be a .png file: {0}")]
    InvalidOutput(PathBuf),
}
