//! Halftone photo processing for the memory-box printer page.
//!
//! Provides grayscale reduction, 4-neighbor error-diffusion dithering,
//! 2:3 portrait frame preparation, and the header/footer print composite.

pub mod compose;
pub mod dither;
pub mod error;
pub mod frame;
pub mod grayscale;
pub mod pipeline;
pub mod stamp;
pub mod text;

// Re-exports for convenience
pub use compose::{PrintLayout, compose_print};
pub use dither::{dither_error_diffusion, dither_image};
pub use error::ImageError;
pub use frame::{CropRect, canvas_size, center_crop_rect, prepare_frame};
pub use grayscale::{expand_to_rgba, grayscale_image, reduce_to_grayscale, to_rgba_image};
pub use pipeline::{halftone_frame, halftone_rgba};
pub use stamp::{HEADER_LINES, PrintCaptions, date_stamp};
pub use text::parse_font;

/// Default output width in pixels (thermal printer paper width).
pub const DEFAULT_WIDTH: u32 = 384;
