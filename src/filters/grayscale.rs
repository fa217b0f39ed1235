//! Grayscale filter.
//!
//! In HSLA, removing color is a single channel write: saturation goes to 0
//! while hue, luminance and alpha are kept. Because hue survives, a later
//! saturation boost can bring the original tint back.

use tracing::{debug, instrument};

use super::core::par_for_each_pixel;
use crate::hsla::HslaImage;

/// Desaturate every pixel.
///
/// # Arguments
/// * `image` - Image to modify, returned after the change
///
/// # Returns
/// The same image with `s = 0` everywhere
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn grayscale(mut image: HslaImage) -> HslaImage {
    let (width, height) = (image.width(), image.height());

    for y in 0..height {
        for x in 0..width {
            image.pixel_mut(x, y).s = 0.0;
        }
    }

    debug!(pixels = width * height, "grayscale applied");
    image
}

/// Parallel [`grayscale`].
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn grayscale_par(mut image: HslaImage) -> HslaImage {
    par_for_each_pixel(&mut image, |_, _, pixel| pixel.s = 0.0);

    debug!(pixels = image.width() * image.height(), "grayscale applied");
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hsla::HslaPixel;

    fn sample_image() -> HslaImage {
        HslaImage::from_fn(6, 4, |x, y| {
            HslaPixel::new(x as f64 * 50.0, 0.8, 0.1 + y as f64 * 0.2, 0.5 + x as f64 * 0.05)
        })
    }

    #[test]
    fn test_grayscale_zeroes_saturation() {
        let result = grayscale(sample_image());

        for y in 0..result.height() {
            for x in 0..result.width() {
                assert_eq!(result.pixel(x, y).s, 0.0);
            }
        }
    }

    #[test]
    fn test_grayscale_preserves_other_channels() {
        let input = sample_image();
        let result = grayscale(input.clone());

        for y in 0..input.height() {
            for x in 0..input.width() {
                let before = input.pixel(x, y);
                let after = result.pixel(x, y);
                assert_eq!(after.h, before.h);
                assert_eq!(after.l, before.l);
                assert_eq!(after.a, before.a);
            }
        }
    }

    #[test]
    fn test_grayscale_idempotent() {
        let once = grayscale(sample_image());
        let twice = grayscale(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_grayscale_empty_image() {
        let result = grayscale(HslaImage::new(0, 3));
        assert_eq!(result.height(), 3);
        assert_eq!(result.width(), 0);
    }

    #[test]
    fn test_grayscale_par_matches_sequential() {
        assert_eq!(grayscale_par(sample_image()), grayscale(sample_image()));
    }
}
