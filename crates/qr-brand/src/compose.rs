//! Logo compositing onto a rendered QR image.
//!
//! The area under the logo is cleared to the background color before the
//! logo is pasted, so no QR module edges show through the logo's
//! transparent parts.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use tracing::{debug, warn};

use crate::background::{DEFAULT_THRESHOLD, remove_white_background};
use crate::color::HexColor;
use crate::resize::resize_square;
use crate::{QrBrandError, Result};

/// Default logo side as a fraction of the QR image's shorter side.
pub const DEFAULT_LOGO_SCALE: f64 = 0.2;

/// Largest accepted logo scale. Larger values are clamped.
pub const MAX_LOGO_SCALE: f64 = 0.5;

/// A logo to stamp in the center of a QR image.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoOverlay {
    pub path: PathBuf,
    pub scale: f64,
    pub threshold: u8,
}

impl LogoOverlay {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            scale: DEFAULT_LOGO_SCALE,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Centered square occupied by the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPlacement {
    pub size: u32,
    pub x: u32,
    pub y: u32,
}

impl LogoPlacement {
    /// Compute the logo square for a `width x height` image.
    ///
    /// `size = floor(min(width, height) * scale)`, placed at the integer
    /// center. `scale` must already be within `(0, MAX_LOGO_SCALE]`.
    pub fn compute(width: u32, height: u32, scale: f64) -> Self {
        let size = (f64::from(width.min(height)) * scale).floor() as u32;
        Self {
            size,
            x: (width - size) / 2,
            y: (height - size) / 2,
        }
    }

    /// Area cleared before pasting: both corners inclusive, so one pixel
    /// wider and taller than the logo itself.
    pub fn backing_rect(&self) -> Rect {
        Rect::at(self.x as i32, self.y as i32).of_size(self.size + 1, self.size + 1)
    }
}

/// Validate a logo scale, clamping values above [`MAX_LOGO_SCALE`].
pub fn effective_scale(scale: f64) -> Result<f64> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(QrBrandError::InvalidLogoScale(scale));
    }
    if scale > MAX_LOGO_SCALE {
        warn!(scale, max = MAX_LOGO_SCALE, "Logo scale too large, clamping");
        return Ok(MAX_LOGO_SCALE);
    }
    Ok(scale)
}

/// Stamp `logo` onto the center of `base`.
///
/// Returns `base` untouched when no logo is given or its path is not an
/// existing file. A logo that exists but cannot be decoded is an error.
pub fn composite_logo(
    mut base: RgbaImage,
    logo: Option<&LogoOverlay>,
    background: HexColor,
) -> Result<RgbaImage> {
    let Some(logo) = logo else {
        debug!("No logo requested");
        return Ok(base);
    };
    if !logo.path.is_file() {
        debug!(path = %logo.path.display(), "Logo file not found, skipping overlay");
        return Ok(base);
    }

    let scale = effective_scale(logo.scale)?;
    let source = load_logo(&logo.path)?;
    let cleared = remove_white_background(source, logo.threshold);

    let (width, height) = base.dimensions();
    let placement = LogoPlacement::compute(width, height, scale);
    if placement.size == 0 {
        warn!(width, height, scale, "Logo would be empty, skipping overlay");
        return Ok(base);
    }

    let resized = resize_square(&cleared, placement.size);

    debug!(
        size = placement.size,
        x = placement.x,
        y = placement.y,
        "Compositing logo"
    );
    draw_filled_rect_mut(&mut base, placement.backing_rect(), background.to_rgba());
    overlay(&mut base, &resized, placement.x, placement.y);

    Ok(base)
}

fn load_logo(path: &Path) -> Result<image::DynamicImage> {
    image::open(path).map_err(|source| QrBrandError::LogoDecode {
        path: path.to_path_buf(),
        source,
    })
}

/// Paste `top` onto `base` at the given position, using `top`'s alpha as
/// the mask. Pixels falling outside `base` are dropped.
pub fn overlay(base: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    for (dx, dy, pixel) in top.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x >= base.width() || target_y >= base.height() {
            continue;
        }
        match pixel[3] {
            0 => {}
            255 => base.put_pixel(target_x, target_y, *pixel),
            a => {
                let bg = *base.get_pixel(target_x, target_y);
                base.put_pixel(target_x, target_y, blend_pixel(&bg, pixel, a));
            }
        }
    }
}

fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let alpha = f32::from(alpha) / 255.0;
    let inv = 1.0 - alpha;
    let mix = |i: usize| (f32::from(fg[i]) * alpha + f32::from(bg[i]) * inv).round() as u8;
    Rgba([mix(0), mix(1), mix(2), 255])
}
