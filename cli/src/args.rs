//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use qr_brand::render::{MAX_BORDER, MAX_BOX_SIZE};
use qr_brand::{OutputFormat, Theme};

/// Generate a branded QR code with an optional centered logo.
///
/// Settings not given on the command line come from `QR_BRAND_*`
/// environment variables (or a `.env` file), then built-in defaults.
#[derive(Debug, Default, Parser)]
#[command(name = "qr-brand", version)]
pub struct Args {
    /// URL (or any text) to encode. Prompted for when omitted.
    pub url: Option<String>,

    /// Output file name. The format's extension is added when missing.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format: png, jpg, bmp, tiff or svg.
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Color theme (see --list-themes).
    #[arg(short, long)]
    pub theme: Option<Theme>,

    /// Foreground color as #RRGGBB. Invalid values fall back to the theme.
    #[arg(long)]
    pub fg: Option<String>,

    /// Background color as #RRGGBB. Invalid values fall back to the theme.
    #[arg(long)]
    pub bg: Option<String>,

    /// Logo image, overriding the theme's logo.
    #[arg(long, conflicts_with = "no_logo")]
    pub logo: Option<PathBuf>,

    /// Generate without a logo.
    #[arg(long)]
    pub no_logo: bool,

    /// Logo side as a fraction of the QR image (0, 0.5].
    #[arg(long)]
    pub scale: Option<f64>,

    /// Pixel width of one QR module (1-100).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_BOX_SIZE)))]
    pub box_size: Option<u32>,

    /// Blank modules around the symbol (0-20).
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_BORDER)))]
    pub border: Option<u32>,

    /// Derive the output name from the URL, e.g. qr_example_page.png.
    #[arg(long, conflicts_with = "output")]
    pub name_from_url: bool,

    /// Prompt for the output name even when a URL is given.
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the available themes and exit.
    #[arg(long)]
    pub list_themes: bool,

    /// Print the QR_BRAND_* settings with their defaults and exit.
    #[arg(long)]
    pub list_settings: bool,
}
