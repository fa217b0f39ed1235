//! Illinify filter: snap every hue to one of two palette hues.
//!
//! The default palette is Illini orange (11°) and Illini blue (216°).
//! Each pixel takes whichever palette hue is closer on the color wheel,
//! so 350° goes to orange through the 0° wrap rather than to blue.
//!
//! Distances are compared as real numbers. The two hues that sit exactly
//! between the palette entries (113.5° and 293.5° for the default palette)
//! resolve to the first entry.

use tracing::{debug, instrument};

use super::core::{circular_distance, par_for_each_pixel};
use crate::hsla::HslaImage;

/// Illini orange hue in degrees.
pub const ILLINI_ORANGE: f64 = 11.0;
/// Illini blue hue in degrees.
pub const ILLINI_BLUE: f64 = 216.0;

/// Two target hues. `first` wins exact ties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HuePalette {
    pub first: f64,
    pub second: f64,
}

impl Default for HuePalette {
    fn default() -> Self {
        Self::illini()
    }
}

impl HuePalette {
    /// Orange (11°) and blue (216°).
    pub fn illini() -> Self {
        Self {
            first: ILLINI_ORANGE,
            second: ILLINI_BLUE,
        }
    }

    /// Palette hue closest to `hue` on the wheel.
    #[inline]
    pub fn nearest(&self, hue: f64) -> f64 {
        if circular_distance(hue, self.first) <= circular_distance(hue, self.second) {
            self.first
        } else {
            self.second
        }
    }
}

/// Snap every hue to Illini orange or Illini blue.
///
/// # Arguments
/// * `image` - Image to modify, returned after the change
///
/// # Returns
/// The same image with only palette hues; saturation, luminance and alpha kept
pub fn illinify(image: HslaImage) -> HslaImage {
    illinify_with(image, &HuePalette::illini())
}

/// [`illinify`] with a custom palette.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn illinify_with(mut image: HslaImage, palette: &HuePalette) -> HslaImage {
    let (width, height) = (image.width(), image.height());

    for y in 0..height {
        for x in 0..width {
            let pixel = image.pixel_mut(x, y);
            pixel.h = palette.nearest(pixel.h);
        }
    }

    debug!(pixels = width * height, "illinify applied");
    image
}

/// Parallel [`illinify`].
pub fn illinify_par(image: HslaImage) -> HslaImage {
    illinify_par_with(image, &HuePalette::illini())
}

/// Parallel [`illinify_with`].
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn illinify_par_with(mut image: HslaImage, palette: &HuePalette) -> HslaImage {
    par_for_each_pixel(&mut image, |_, _, pixel| pixel.h = palette.nearest(pixel.h));

    debug!(pixels = image.width() * image.height(), "illinify applied");
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hsla::HslaPixel;

    fn hue_after(h: f64) -> f64 {
        let img = HslaImage::filled(1, 1, HslaPixel::new(h, 0.7, 0.4, 0.6));
        illinify(img).pixel(0, 0).h
    }

    #[test]
    fn test_palette_hues_are_fixed_points() {
        assert_eq!(hue_after(11.0), 11.0);
        assert_eq!(hue_after(216.0), 216.0);
    }

    #[test]
    fn test_ties_go_to_orange() {
        assert_eq!(hue_after(113.5), ILLINI_ORANGE);
        assert_eq!(hue_after(293.5), ILLINI_ORANGE);
    }

    #[test]
    fn test_wraparound() {
        // 21° to orange through 0°, 134° to blue
        assert_eq!(hue_after(350.0), ILLINI_ORANGE);
        assert_eq!(hue_after(0.0), ILLINI_ORANGE);
    }

    #[test]
    fn test_fractional_distance() {
        // Truncating both distances to 102 would make these ties
        assert_eq!(hue_after(113.4), ILLINI_ORANGE);
        assert_eq!(hue_after(113.6), ILLINI_BLUE);
        assert_eq!(hue_after(293.4), ILLINI_BLUE);
        assert_eq!(hue_after(293.6), ILLINI_ORANGE);
    }

    #[test]
    fn test_blue_side() {
        assert_eq!(hue_after(180.0), ILLINI_BLUE);
        assert_eq!(hue_after(240.0), ILLINI_BLUE);
    }

    #[test]
    fn test_other_channels_preserved() {
        let img = HslaImage::filled(2, 2, HslaPixel::new(90.0, 0.7, 0.4, 0.6));
        let result = illinify(img);
        let p = result.pixel(1, 1);
        assert_eq!(p.s, 0.7);
        assert_eq!(p.l, 0.4);
        assert_eq!(p.a, 0.6);
    }

    #[test]
    fn test_illinify_idempotent() {
        let img = HslaImage::from_fn(36, 2, |x, y| {
            HslaPixel::new(x as f64 * 10.0 + y as f64 * 3.5, 0.5, 0.5, 1.0)
        });
        let once = illinify(img);
        let twice = illinify(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_palette() {
        let palette = HuePalette {
            first: 0.0,
            second: 120.0,
        };
        let img = HslaImage::filled(1, 1, HslaPixel::new(100.0, 1.0, 0.5, 1.0));
        assert_eq!(illinify_with(img, &palette).pixel(0, 0).h, 120.0);
    }

    #[test]
    fn test_illinify_par_matches_sequential() {
        let img = HslaImage::from_fn(60, 7, |x, y| {
            HslaPixel::new(x as f64 * 6.0 + y as f64 * 0.5, 0.5, 0.5, 1.0)
        });
        assert_eq!(illinify_par(img.clone()), illinify(img));
    }
}
