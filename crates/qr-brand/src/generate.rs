//! End-to-end generation: encode, render, composite, persist.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::Result;
use crate::color::HexColor;
use crate::compose::{LogoOverlay, composite_logo};
use crate::output::{OutputFormat, write_raster, write_text};
use crate::render::{RenderOptions, encode, render_raster, render_svg};

/// Everything needed for one generation call.
#[derive(Debug, Clone)]
pub struct QrRequest {
    pub payload: String,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub foreground: HexColor,
    pub background: HexColor,
    pub render: RenderOptions,
    pub logo: Option<LogoOverlay>,
}

impl QrRequest {
    /// Black on white PNG with default layout and no logo.
    pub fn new(payload: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            payload: payload.into(),
            output: output.into(),
            format: OutputFormat::default(),
            foreground: HexColor::BLACK,
            background: HexColor::WHITE,
            render: RenderOptions::default(),
            logo: None,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_colors(mut self, foreground: HexColor, background: HexColor) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    pub fn with_logo(mut self, logo: Option<LogoOverlay>) -> Self {
        self.logo = logo;
        self
    }
}

/// Generate a QR code file and return the path written.
///
/// Raster formats get the logo composited in; SVG output is written
/// straight from the module grid and never carries a logo. Any failure
/// happens before the output path is touched.
pub fn generate(request: QrRequest) -> Result<PathBuf> {
    info!(
        output = %request.output.display(),
        format = %request.format,
        fg = %request.foreground,
        bg = %request.background,
        "Generating QR code"
    );

    let code = encode(&request.payload, &request.render)?;

    if request.format.is_vector() {
        if request.logo.is_some() {
            debug!("Logo is not applied to vector output");
        }
        let svg = render_svg(&code, &request.render, request.foreground, request.background);
        write_text(&svg, &request.output)?;
    } else {
        let base = render_raster(&code, &request.render, request.foreground, request.background);
        let img = composite_logo(base, request.logo.as_ref(), request.background)?;
        write_raster(img, &request.output, request.format)?;
    }

    info!(path = %request.output.display(), "QR code saved");
    Ok(request.output)
}
