//! Watermark filter: brighten a base image wherever a stencil is pure white.
//!
//! Only the region both images cover, anchored at (0, 0), is touched.
//! The stencil is borrowed and never modified.

use ndarray::{s, Zip};
use tracing::{debug, instrument};

use crate::hsla::{HslaImage, HslaPixel};

/// Stencil test and brightening amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatermarkParams {
    /// Stencil luminance that marks a pixel. Compared for exact equality.
    pub threshold: f64,
    /// Luminance added to marked base pixels, result clamped to [0, 1].
    pub boost: f64,
}

impl Default for WatermarkParams {
    fn default() -> Self {
        Self {
            threshold: 1.0,
            boost: 0.2,
        }
    }
}

impl WatermarkParams {
    #[inline]
    fn apply(&self, base: &mut HslaPixel, stencil: &HslaPixel) {
        if stencil.l == self.threshold {
            base.l = (base.l + self.boost).clamp(0.0, 1.0);
        }
    }
}

/// Overlap of two images as (width, height).
#[inline]
fn overlap(base: &HslaImage, stencil: &HslaImage) -> (usize, usize) {
    (
        base.width().min(stencil.width()),
        base.height().min(stencil.height()),
    )
}

/// Add 0.2 luminance to `base` wherever `stencil` has luminance exactly 1.0.
///
/// # Arguments
/// * `base` - Image to modify, returned after the change
/// * `stencil` - Read-only mask; may differ in size from `base`
///
/// # Returns
/// The base image with the overlap region watermarked
pub fn watermark(base: HslaImage, stencil: &HslaImage) -> HslaImage {
    watermark_with(base, stencil, &WatermarkParams::default())
}

/// [`watermark`] with a custom threshold and boost.
#[instrument(skip_all, fields(
    width = base.width(),
    height = base.height(),
    stencil_width = stencil.width(),
    stencil_height = stencil.height()
))]
pub fn watermark_with(
    mut base: HslaImage,
    stencil: &HslaImage,
    params: &WatermarkParams,
) -> HslaImage {
    let (width, height) = overlap(&base, stencil);

    for y in 0..height {
        for x in 0..width {
            params.apply(base.pixel_mut(x, y), stencil.pixel(x, y));
        }
    }

    debug!(pixels = width * height, "watermark applied");
    base
}

/// Parallel [`watermark`].
pub fn watermark_par(base: HslaImage, stencil: &HslaImage) -> HslaImage {
    watermark_par_with(base, stencil, &WatermarkParams::default())
}

/// Parallel [`watermark_with`].
#[instrument(skip_all, fields(
    width = base.width(),
    height = base.height(),
    stencil_width = stencil.width(),
    stencil_height = stencil.height()
))]
pub fn watermark_par_with(
    mut base: HslaImage,
    stencil: &HslaImage,
    params: &WatermarkParams,
) -> HslaImage {
    let (width, height) = overlap(&base, stencil);

    let base_region = base.pixels_mut().slice_move(s![..height, ..width]);
    let stencil_region = stencil.pixels().slice_move(s![..height, ..width]);

    Zip::from(base_region)
        .and(stencil_region)
        .par_for_each(|pixel, mask| params.apply(pixel, mask));

    debug!(pixels = width * height, "watermark applied");
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn gray(width: usize, height: usize, l: f64) -> HslaImage {
        HslaImage::filled(width, height, HslaPixel::new(30.0, 0.4, l, 1.0))
    }

    #[test]
    fn test_white_stencil_brightens() {
        let result = watermark(gray(1, 1, 0.5), &gray(1, 1, 1.0));
        assert!((result.pixel(0, 0).l - 0.7).abs() < EPS);
    }

    #[test]
    fn test_clamped_at_one() {
        let result = watermark(gray(1, 1, 0.9), &gray(1, 1, 1.0));
        assert_eq!(result.pixel(0, 0).l, 1.0);
    }

    #[test]
    fn test_near_white_stencil_ignored() {
        let result = watermark(gray(1, 1, 0.5), &gray(1, 1, 0.999));
        assert_eq!(result.pixel(0, 0).l, 0.5);
    }

    #[test]
    fn test_only_luminance_changes() {
        let result = watermark(gray(1, 1, 0.5), &gray(1, 1, 1.0));
        let p = result.pixel(0, 0);
        assert_eq!(p.h, 30.0);
        assert_eq!(p.s, 0.4);
        assert_eq!(p.a, 1.0);
    }

    #[test]
    fn test_smaller_stencil_limits_region() {
        let result = watermark(gray(10, 10, 0.5), &gray(5, 5, 1.0));

        for y in 0..10 {
            for x in 0..10 {
                let l = result.pixel(x, y).l;
                if x < 5 && y < 5 {
                    assert!((l - 0.7).abs() < EPS, "({}, {}) should be brightened", x, y);
                } else {
                    assert_eq!(l, 0.5, "({}, {}) should be untouched", x, y);
                }
            }
        }
    }

    #[test]
    fn test_larger_stencil() {
        let result = watermark(gray(3, 2, 0.1), &gray(8, 8, 1.0));
        assert_eq!(result.width(), 3);
        assert_eq!(result.height(), 2);
        assert!((result.pixel(2, 1).l - 0.3).abs() < EPS);
    }

    #[test]
    fn test_stencil_pattern() {
        let stencil = HslaImage::from_fn(4, 1, |x, _| {
            HslaPixel::new(0.0, 0.0, if x % 2 == 0 { 1.0 } else { 0.0 }, 1.0)
        });
        let result = watermark(gray(4, 1, 0.2), &stencil);

        assert!((result.pixel(0, 0).l - 0.4).abs() < EPS);
        assert_eq!(result.pixel(1, 0).l, 0.2);
        assert!((result.pixel(2, 0).l - 0.4).abs() < EPS);
        assert_eq!(result.pixel(3, 0).l, 0.2);
    }

    #[test]
    fn test_stencil_untouched() {
        let stencil = gray(2, 2, 1.0);
        let copy = stencil.clone();
        let _ = watermark(gray(2, 2, 0.3), &stencil);
        assert_eq!(stencil, copy);
    }

    #[test]
    fn test_not_idempotent() {
        let stencil = gray(1, 1, 1.0);
        let once = watermark(gray(1, 1, 0.5), &stencil);
        let twice = watermark(once.clone(), &stencil);
        assert!((twice.pixel(0, 0).l - 0.9).abs() < EPS);
    }

    #[test]
    fn test_empty_overlap() {
        let result = watermark(gray(4, 4, 0.5), &gray(0, 0, 1.0));
        assert_eq!(result, gray(4, 4, 0.5));
    }

    #[test]
    fn test_watermark_par_matches_sequential() {
        let base = HslaImage::from_fn(12, 9, |x, y| {
            HslaPixel::new(0.0, 0.0, (x * y) as f64 / 100.0, 1.0)
        });
        let stencil = HslaImage::from_fn(7, 11, |x, y| {
            HslaPixel::new(0.0, 0.0, if (x + y) % 3 == 0 { 1.0 } else { 0.5 }, 1.0)
        });
        assert_eq!(
            watermark_par(base.clone(), &stencil),
            watermark(base, &stencil)
        );
    }
}
