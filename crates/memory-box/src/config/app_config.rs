//! Runtime configuration resolved from flags and environment.

use std::path::PathBuf;

use super::validation::{validate_font_path, validate_png_output, validate_width};
use super::{Cli, ConfigError};

/// Print sheet output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintConfig {
    pub output: PathBuf,
    pub font: PathBuf,
    pub place: String,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub print: Option<PrintConfig>,
}

impl AppConfig {
    /// Validate parsed flags into a runtime configuration.
    pub fn load(cli: Cli) -> Result<Self, ConfigError> {
        validate_width(cli.width)?;
        validate_png_output(&cli.output)?;

        let print = match cli.print {
            Some(output) => {
                validate_png_output(&output)?;
                let font = cli.font.ok_or(ConfigError::MissingFont)?;
                validate_font_path(&font)?;
                Some(PrintConfig {
                    output,
                    font,
                    place: cli.place,
                })
            }
            None => {
                if cli.font.is_some() {
                    tracing::warn!("Font configured without --print; it will not be used");
                }
                None
            }
        };

        Ok(Self {
            input: cli.input,
            output: cli.output,
            width: cli.width,
            print,
        })
    }
}
