//! Spotlight filter: radial luminance falloff around a center point.
//!
//! Luminance drops by 0.5% per pixel of euclidean distance from the center.
//! From 160 pixels out the drop is a flat 80%, which is exactly where the
//! linear falloff would reach it, so the two regions meet without a seam.
//!
//! | Distance | Luminance factor |
//! |----------|------------------|
//! | 0 | 1.0 |
//! | 5 | 0.975 |
//! | 100 | 0.5 |
//! | >= 160 | 0.2 |

use tracing::{debug, instrument};

use super::core::par_for_each_pixel;
use crate::hsla::HslaImage;

/// Falloff parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotlightParams {
    /// Distance at which the flat floor takes over.
    pub radius: f64,
    /// Fraction of luminance removed per unit of distance inside `radius`.
    pub falloff: f64,
    /// Luminance factor at and beyond `radius`.
    pub floor: f64,
}

impl Default for SpotlightParams {
    fn default() -> Self {
        Self {
            radius: 160.0,
            falloff: 0.005,
            floor: 0.2,
        }
    }
}

impl SpotlightParams {
    /// Luminance after dimming `luminance` at `distance` from the center.
    #[inline]
    pub fn dim(&self, luminance: f64, distance: f64) -> f64 {
        let dimmed = if distance >= self.radius {
            luminance * self.floor
        } else {
            luminance - luminance * (distance * self.falloff)
        };
        dimmed.clamp(0.0, 1.0)
    }
}

/// Euclidean distance from `(x, y)` to the center.
#[inline]
fn distance(center_x: i64, center_y: i64, x: usize, y: usize) -> f64 {
    // f64 before subtracting so extreme centers can't overflow
    let dx = center_x as f64 - x as f64;
    let dy = center_y as f64 - y as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Darken the image with increasing distance from `(center_x, center_y)`.
///
/// The center may lie outside the image.
///
/// # Arguments
/// * `image` - Image to modify, returned after the change
/// * `center_x` - Spotlight center column
/// * `center_y` - Spotlight center row
pub fn spotlight(image: HslaImage, center_x: i64, center_y: i64) -> HslaImage {
    spotlight_with(image, center_x, center_y, &SpotlightParams::default())
}

/// [`spotlight`] with custom falloff parameters.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn spotlight_with(
    mut image: HslaImage,
    center_x: i64,
    center_y: i64,
    params: &SpotlightParams,
) -> HslaImage {
    let (width, height) = (image.width(), image.height());

    for y in 0..height {
        for x in 0..width {
            let d = distance(center_x, center_y, x, y);
            let pixel = image.pixel_mut(x, y);
            pixel.l = params.dim(pixel.l, d);
        }
    }

    debug!(pixels = width * height, "spotlight applied");
    image
}

/// Parallel [`spotlight`].
pub fn spotlight_par(image: HslaImage, center_x: i64, center_y: i64) -> HslaImage {
    spotlight_par_with(image, center_x, center_y, &SpotlightParams::default())
}

/// Parallel [`spotlight_with`].
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn spotlight_par_with(
    mut image: HslaImage,
    center_x: i64,
    center_y: i64,
    params: &SpotlightParams,
) -> HslaImage {
    par_for_each_pixel(&mut image, |x, y, pixel| {
        pixel.l = params.dim(pixel.l, distance(center_x, center_y, x, y));
    });

    debug!(pixels = image.width() * image.height(), "spotlight applied");
    image
}
