//! Near-white background removal for logos.

use image::{DynamicImage, Rgba, RgbaImage};
use tracing::debug;

/// Default channel threshold above which a pixel counts as background.
pub const DEFAULT_THRESHOLD: u8 = 240;

const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Make every near-white pixel fully transparent.
///
/// A pixel is background when its red, green and blue channels are all
/// strictly greater than `threshold`. Background pixels become
/// `(255, 255, 255, 0)`; all others keep their color and alpha.
///
/// This is a per-pixel rule with no flood fill, so white details inside a
/// logo are cleared as well.
pub fn remove_white_background(img: DynamicImage, threshold: u8) -> RgbaImage {
    let mut rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();

    let mut cleared = 0usize;
    for pixel in rgba.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        if r > threshold && g > threshold && b > threshold {
            *pixel = TRANSPARENT_WHITE;
            cleared += 1;
        }
    }

    debug!(width, height, threshold, cleared, "Removed white background");
    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_from(pixels: &[[u8; 4]]) -> DynamicImage {
        let mut img = RgbaImage::new(pixels.len() as u32, 1);
        for (x, p) in pixels.iter().enumerate() {
            img.put_pixel(x as u32, 0, Rgba(*p));
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_near_white_becomes_transparent() {
        let out = remove_white_background(image_from(&[[250, 250, 250, 255]]), DEFAULT_THRESHOLD);
        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
    }

    #[test]
    fn test_threshold_is_strict() {
        let out = remove_white_background(image_from(&[[240, 240, 240, 255]]), DEFAULT_THRESHOLD);
        assert_eq!(*out.get_pixel(0, 0), Rgba([240, 240, 240, 255]));
    }

    #[test]
    fn test_all_channels_must_exceed_threshold() {
        let pixels = [
            [255, 255, 200, 255],
            [241, 10, 241, 128],
            [26, 50, 88, 255],
            [241, 241, 241, 17],
        ];
        let out = remove_white_background(image_from(&pixels), DEFAULT_THRESHOLD);
        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 255, 200, 255]));
        assert_eq!(*out.get_pixel(1, 0), Rgba([241, 10, 241, 128]));
        assert_eq!(*out.get_pixel(2, 0), Rgba([26, 50, 88, 255]));
        // Alpha is ignored when deciding; the pixel is cleared
        assert_eq!(*out.get_pixel(3, 0), Rgba([255, 255, 255, 0]));
    }

    #[test]
    fn test_custom_threshold() {
        let out = remove_white_background(image_from(&[[201, 201, 201, 255]]), 200);
        assert_eq!(out.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn test_converts_non_rgba_input() {
        let gray = image::GrayImage::from_pixel(3, 2, image::Luma([250]));
        let out = remove_white_background(DynamicImage::ImageLuma8(gray), DEFAULT_THRESHOLD);
        assert_eq!(out.dimensions(), (3, 2));
        assert!(out.pixels().all(|p| *p == Rgba([255, 255, 255, 0])));
    }

    #[test]
    fn test_idempotent() {
        let pixels = [
            [250, 250, 250, 255],
            [240, 240, 240, 255],
            [0, 0, 0, 255],
            [255, 0, 0, 64],
        ];
        let once = remove_white_background(image_from(&pixels), DEFAULT_THRESHOLD);
        let twice =
            remove_white_background(DynamicImage::ImageRgba8(once.clone()), DEFAULT_THRESHOLD);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_preserves_row_major_order() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([1, 2, 3, 255]));
        img.put_pixel(0, 1, Rgba([4, 5, 6, 255]));
        let out = remove_white_background(DynamicImage::ImageRgba8(img), DEFAULT_THRESHOLD);
        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
        assert_eq!(*out.get_pixel(1, 0), Rgba([1, 2, 3, 255]));
        assert_eq!(*out.get_pixel(0, 1), Rgba([4, 5, 6, 255]));
        assert_eq!(*out.get_pixel(1, 1), Rgba([255, 255, 255, 0]));
    }
}
