//! QR symbol encoding and rendering.
//!
//! Symbols always use error-correction level High so a centered logo can
//! cover part of the code. The version is a lower bound: longer payloads
//! move up to the smallest version that fits.

use std::fmt::Write as _;

use image::RgbaImage;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode, Version};
use tracing::debug;

use crate::color::HexColor;
use crate::{QrBrandError, Result};

pub const DEFAULT_BOX_SIZE: u32 = 50;
pub const DEFAULT_BORDER: u32 = 4;
pub const DEFAULT_MIN_VERSION: i16 = 6;
pub const MAX_BOX_SIZE: u32 = 100;
pub const MAX_BORDER: u32 = 20;
const MAX_VERSION: i16 = 40;

/// Symbol and pixel layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixel width of one module.
    pub box_size: u32,
    /// Blank modules around the symbol.
    pub border: u32,
    /// Smallest symbol version to use.
    pub min_version: i16,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            box_size: DEFAULT_BOX_SIZE,
            border: DEFAULT_BORDER,
            min_version: DEFAULT_MIN_VERSION,
        }
    }
}

impl RenderOptions {
    /// Reject layouts outside `1..=MAX_BOX_SIZE` pixels per module or
    /// `0..=MAX_BORDER` border modules. Within these bounds the largest
    /// raster is `(177 + 40) * 100` pixels per side.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_BOX_SIZE).contains(&self.box_size) {
            return Err(QrBrandError::InvalidRenderOptions(format!(
                "box size must be between 1 and {MAX_BOX_SIZE}, got {}",
                self.box_size
            )));
        }
        if self.border > MAX_BORDER {
            return Err(QrBrandError::InvalidRenderOptions(format!(
                "border must be between 0 and {MAX_BORDER}, got {}",
                self.border
            )));
        }
        if !(1..=MAX_VERSION).contains(&self.min_version) {
            return Err(QrBrandError::InvalidRenderOptions(format!(
                "version must be between 1 and {MAX_VERSION}, got {}",
                self.min_version
            )));
        }
        Ok(())
    }

    /// Side length in modules, border included.
    fn dimension(&self, code: &QrCode) -> u32 {
        code.width() as u32 + 2 * self.border
    }
}

/// Encode `payload` at level High, starting from `options.min_version`.
pub fn encode(payload: &str, options: &RenderOptions) -> Result<QrCode> {
    options.validate()?;

    for v in options.min_version..=MAX_VERSION {
        match QrCode::with_version(payload.as_bytes(), Version::Normal(v), EcLevel::H) {
            Ok(code) => {
                debug!(version = v, len = payload.len(), "Encoded QR symbol");
                return Ok(code);
            }
            Err(QrError::DataTooLong) => continue,
            Err(e) => return Err(QrBrandError::Encode(e.to_string())),
        }
    }

    Err(QrBrandError::Encode(format!(
        "payload of {} bytes does not fit version {MAX_VERSION}",
        payload.len()
    )))
}

/// Render a symbol to an opaque RGBA bitmap.
///
/// The image side is `(modules + 2 * border) * box_size` pixels. `options`
/// must have passed [`RenderOptions::validate`], which [`encode`] does.
pub fn render_raster(
    code: &QrCode,
    options: &RenderOptions,
    foreground: HexColor,
    background: HexColor,
) -> RgbaImage {
    let modules = code.width() as u32;
    let scale = options.box_size;
    let img_size = options.dimension(code) * scale;

    let mut img = RgbaImage::from_pixel(img_size, img_size, background.to_rgba());
    let dark = foreground.to_rgba();

    for (i, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x = (i as u32 % modules + options.border) * scale;
        let y = (i as u32 / modules + options.border) * scale;
        draw_filled_rect_mut(&mut img, Rect::at(x as i32, y as i32).of_size(scale, scale), dark);
    }

    debug!(modules, img_size, "Rendered QR raster");
    img
}

/// Render a symbol as an SVG document, one path segment per dark module.
///
/// The viewBox is in modules; `width` and `height` are in pixels.
pub fn render_svg(
    code: &QrCode,
    options: &RenderOptions,
    foreground: HexColor,
    background: HexColor,
) -> String {
    let modules = code.width() as u32;
    let dimension = options.dimension(code);
    let pixels = dimension * options.box_size;

    let mut path = String::new();
    for (i, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        if !path.is_empty() {
            path.push(' ');
        }
        let x = i as u32 % modules + options.border;
        let y = i as u32 / modules + options.border;
        let _ = write!(path, "M{x},{y}h1v1h-1z");
    }

    let mut svg = String::new();
    svg += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{pixels}\" height=\"{pixels}\" viewBox=\"0 0 {dimension} {dimension}\" stroke=\"none\">"
    );
    let _ = writeln!(svg, "\t<rect width=\"100%\" height=\"100%\" fill=\"{background}\"/>");
    let _ = writeln!(svg, "\t<path d=\"{path}\" fill=\"{foreground}\"/>");
    svg += "</svg>\n";

    debug!(modules, pixels, "Rendered QR SVG");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn small_options() -> RenderOptions {
        RenderOptions {
            box_size: 2,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_default_options() {
        let o = RenderOptions::default();
        assert_eq!((o.box_size, o.border, o.min_version), (50, 4, 6));
    }

    #[test]
    fn test_encode_uses_min_version() {
        let code = encode("https://www.usaa.com/banking", &small_options()).unwrap();
        assert_eq!(code.version(), Version::Normal(6));
        assert_eq!(code.width(), 41);
        assert_eq!(code.error_correction_level(), EcLevel::H);
    }

    #[test]
    fn test_encode_grows_version_for_long_payload() {
        let payload = format!("https://example.com/{}", "a".repeat(200));
        let code = encode(&payload, &small_options()).unwrap();
        match code.version() {
            Version::Normal(v) => assert!(v > 6, "expected version above 6, got {v}"),
            other => panic!("unexpected version {other:?}"),
        }
    }

    #[test]
    fn test_encode_payload_too_long() {
        let payload = "x".repeat(4000);
        assert!(matches!(
            encode(&payload, &small_options()),
            Err(QrBrandError::Encode(_))
        ));
    }

    #[test]
    fn test_invalid_options() {
        let zero_box = RenderOptions { box_size: 0, ..RenderOptions::default() };
        assert!(matches!(
            encode("x", &zero_box),
            Err(QrBrandError::InvalidRenderOptions(_))
        ));
        let bad_version = RenderOptions { min_version: 41, ..RenderOptions::default() };
        assert!(encode("x", &bad_version).is_err());
    }

    #[test]
    fn test_oversized_layout_is_rejected() {
        for options in [
            RenderOptions { box_size: 200_000_000, ..RenderOptions::default() },
            RenderOptions { box_size: 100_000, ..RenderOptions::default() },
            RenderOptions { box_size: MAX_BOX_SIZE + 1, ..RenderOptions::default() },
            RenderOptions { border: 3_000_000_000, ..RenderOptions::default() },
            RenderOptions { border: MAX_BORDER + 1, ..RenderOptions::default() },
        ] {
            assert!(
                matches!(
                    encode("https://example.org", &options),
                    Err(QrBrandError::InvalidRenderOptions(_))
                ),
                "{options:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_layout_limits_are_accepted() {
        let options = RenderOptions {
            box_size: MAX_BOX_SIZE,
            border: MAX_BORDER,
            min_version: 1,
        };
        assert!(options.validate().is_ok());
        let thin = RenderOptions { box_size: 1, border: 0, min_version: 1 };
        assert!(thin.validate().is_ok());
    }

    #[test]
    fn test_raster_dimensions() {
        let options = RenderOptions { box_size: 3, border: 2, min_version: 1 };
        let code = encode("hi", &options).unwrap();
        let img = render_raster(&code, &options, HexColor::BLACK, HexColor::WHITE);
        let expected = (code.width() as u32 + 4) * 3;
        assert_eq!(img.dimensions(), (expected, expected));
    }

    #[test]
    fn test_raster_colors() {
        let options = small_options();
        let code = encode("https://example.org", &options).unwrap();
        let img = render_raster(&code, &options, HexColor::NAVY, HexColor::WHITE);

        // Border is background
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
        // Top-left finder pattern corner is dark
        let corner = options.border * options.box_size;
        assert_eq!(*img.get_pixel(corner, corner), Rgba([0x1A, 0x32, 0x58, 255]));
        assert!(img.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_svg_uses_colors_and_border() {
        let options = small_options();
        let code = encode("https://example.org", &options).unwrap();
        let svg = render_svg(&code, &options, HexColor::NAVY, HexColor::WHITE);

        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.contains("viewBox=\"0 0 49 49\""));
        assert!(svg.contains("width=\"98\""));
        assert!(svg.contains("fill=\"#FFFFFF\""));
        assert!(svg.contains("fill=\"#1A3258\""));
        // First dark module is the finder corner at (border, border)
        assert!(svg.contains("d=\"M4,4h1v1h-1z"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
