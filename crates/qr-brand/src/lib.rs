//! Branded QR code generation.
//!
//! Encodes a payload into a QR symbol, renders it in custom colors and
//! optionally stamps a logo in the center after stripping the logo's
//! near-white background.

pub mod background;
pub mod color;
pub mod compose;
pub mod filename;
pub mod generate;
pub mod output;
pub mod render;
pub mod resize;
pub mod theme;

use std::path::PathBuf;

// Re-exports for convenience
pub use background::{DEFAULT_THRESHOLD, remove_white_background};
pub use color::{HexColor, validate_hex_color};
pub use compose::{LogoOverlay, LogoPlacement, MAX_LOGO_SCALE, composite_logo};
pub use filename::{qr_filename_from_url, qr_stem_from_url, with_format_extension};
pub use generate::{QrRequest, generate};
pub use output::OutputFormat;
pub use render::{RenderOptions, encode, render_raster, render_svg};
pub use theme::Theme;

/// Errors that can occur while generating a QR image.
#[derive(Debug, thiserror::Error)]
pub enum QrBrandError {
    #[error("QR encode error: {0}")]
    Encode(String),

    #[error("Failed to decode logo {}: {source}", .path.display())]
    LogoDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {}: {source}", .path.display())]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid color: {0} (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("Invalid logo scale {0}: must be a finite value greater than 0")]
    InvalidLogoScale(f64),

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid render options: {0}")]
    InvalidRenderOptions(String),
}

/// Result type alias for qr-brand operations.
pub type Result<T> = std::result::Result<T, QrBrandError>;
