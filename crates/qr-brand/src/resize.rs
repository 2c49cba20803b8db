//! Logo resizing.
//!
//! Logos are always scaled to a square using Lanczos3 filtering.

use image::RgbaImage;
use image::imageops::{self, FilterType};
use tracing::debug;

/// Resize an image to `size x size`, ignoring its aspect ratio.
///
/// Uses Lanczos3 filtering so shrinking a detailed logo does not alias.
/// Returns a copy of the input if it is already the target size.
pub fn resize_square(img: &RgbaImage, size: u32) -> RgbaImage {
    let (orig_w, orig_h) = img.dimensions();

    if orig_w == size && orig_h == size {
        debug!(size, "Logo already at target size, skipping resize");
        return img.clone();
    }

    debug!(orig_w, orig_h, size, "Resizing logo to square");
    imageops::resize(img, size, size, FilterType::Lanczos3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn create_test_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([26, 50, 88, 255]))
    }

    #[test]
    fn test_resize_square_downscale() {
        let result = resize_square(&create_test_image(400, 400), 124);
        assert_eq!(result.dimensions(), (124, 124));
    }

    #[test]
    fn test_resize_square_forces_square() {
        let result = resize_square(&create_test_image(300, 100), 60);
        assert_eq!(result.dimensions(), (60, 60));
    }

    #[test]
    fn test_resize_square_upscale() {
        let result = resize_square(&create_test_image(10, 20), 50);
        assert_eq!(result.dimensions(), (50, 50));
    }

    #[test]
    fn test_resize_square_same_size() {
        let img = create_test_image(32, 32);
        let result = resize_square(&img, 32);
        assert_eq!(result, img);
    }

    #[test]
    fn test_resize_keeps_solid_color() {
        let result = resize_square(&create_test_image(64, 64), 16);
        assert_eq!(*result.get_pixel(8, 8), Rgba([26, 50, 88, 255]));
    }
}
