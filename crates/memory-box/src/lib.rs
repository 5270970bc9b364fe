//! memory-box host: turns a captured camera frame into a printable halftone.

pub mod capture;
pub mod config;

use std::path::{Path, PathBuf};

pub use capture::{CaptureReport, run};
pub use config::{AppConfig, Cli, ConfigError};

/// Candidate .env locations, in priority order.
pub const DOTENV_CANDIDATES: &[&str] = &[".env", "../.env"];

/// Load the first readable .env among `candidates`.
///
/// Runs before the tracing subscriber exists so `RUST_LOG` from the file
/// applies; the caller logs the returned path.
pub fn load_dotenv_from<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    for candidate in candidates {
        let path = candidate.as_ref();
        if dotenvy::from_filename(path).is_ok() {
            return Some(path.to_path_buf());
        }
    }
    None
}

/// Load .env from [`DOTENV_CANDIDATES`].
pub fn load_dotenv() -> Option<PathBuf> {
    load_dotenv_from(DOTENV_CANDIDATES)
}
