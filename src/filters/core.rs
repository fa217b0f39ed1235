//! Core utilities shared by the HSLA filters.
//!
//! - Circular hue distance
//! - Parallel pixel walker (rayon, one task per row)

use ndarray::Axis;
use rayon::prelude::*;

use crate::hsla::{HslaImage, HslaPixel};

/// Shortest arc between two hues on the 360° wheel.
///
/// Result is fractional and lies in [0, 180].
#[inline]
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    diff.min(360.0 - diff)
}

/// Visit every pixel in parallel, passing its `(x, y)` coordinate.
///
/// Rows are distributed across the rayon pool. `f` must only touch the
/// pixel it is handed.
pub fn par_for_each_pixel<F>(image: &mut HslaImage, f: F)
where
    F: Fn(usize, usize, &mut HslaPixel) + Sync + Send,
{
    let mut pixels = image.pixels_mut();
    pixels
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                f(x, y, pixel);
            }
        });
}
