//! HSLA pixel and image container.
//!
//! Images are stored as an `Array2<HslaPixel>` of shape (height, width),
//! indexed `[y, x]` like every other array in the crate. Public accessors
//! take `(x, y)` so callers address pixels the way they address a picture.
//!
//! ## Channel Ranges
//!
//! | Channel | Range | Meaning |
//! |---------|-------|---------|
//! | `h` | 0.0-360.0 (exclusive) | hue in degrees, circular |
//! | `s` | 0.0-1.0 | saturation |
//! | `l` | 0.0-1.0 | luminance |
//! | `a` | 0.0-1.0 | alpha |
//!
//! ## RGBA Bridge
//!
//! Filters work on HSLA, but pixel data usually arrives as RGBA. The
//! `from_rgba_*` / `to_rgba_*` methods convert (height, width, 3|4) arrays
//! using the standard hexcone HSL model.

use ndarray::{Array2, Array3, ArrayView2, ArrayView3, ArrayViewMut2};

use crate::error::ImageError;

/// Values closer than this are treated as equal when classifying RGB.
const EPSILON: f64 = 1e-9;

// ============================================================================
// Pixel
// ============================================================================

/// One hue/saturation/luminance/alpha sample.
///
/// Fields are public so filters can edit channels directly through a
/// `&mut HslaPixel`. [`HslaPixel::new`] normalizes its input; writing the
/// fields directly does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslaPixel {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Default for HslaPixel {
    /// Opaque white.
    fn default() -> Self {
        Self {
            h: 0.0,
            s: 0.0,
            l: 1.0,
            a: 1.0,
        }
    }
}

impl HslaPixel {
    /// Create a pixel, wrapping hue into [0, 360) and clamping the rest to [0, 1].
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Convert from straight-alpha RGBA, each channel 0.0-1.0.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        let (h, s, l) = rgb_to_hsl(r, g, b);
        Self::new(h, s, l, a)
    }

    /// Convert to straight-alpha RGBA, each channel 0.0-1.0.
    pub fn to_rgba(&self) -> [f64; 4] {
        let (r, g, b) = hsl_to_rgb(self.h, self.s, self.l);
        [r, g, b, self.a]
    }
}

/// Wrap any angle into [0, 360).
#[inline]
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

// ============================================================================
// Color Space Conversion
// ============================================================================

/// Convert RGB to HSL.
/// Input: r, g, b in 0.0-1.0
/// Output: (h, s, l) where h is 0.0-360.0, s and l are 0.0-1.0
fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < EPSILON {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < EPSILON {
        let mut h = (g - b) / d;
        if g < b {
            h += 6.0;
        }
        h * 60.0
    } else if (max - g).abs() < EPSILON {
        ((b - r) / d + 2.0) * 60.0
    } else {
        ((r - g) / d + 4.0) * 60.0
    };

    (h, s, l)
}

/// Convert HSL to RGB.
/// Input: h in 0.0-360.0, s and l in 0.0-1.0
/// Output: (r, g, b) in 0.0-1.0
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s.abs() < EPSILON {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let h_norm = h / 360.0;

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 0.5 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let r = hue_to_rgb(p, q, h_norm + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h_norm);
    let b = hue_to_rgb(p, q, h_norm - 1.0 / 3.0);

    (r, g, b)
}

// ============================================================================
// Image
// ============================================================================

/// A width x height grid of [`HslaPixel`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct HslaImage {
    pixels: Array2<HslaPixel>,
}

impl HslaImage {
    /// Create an image filled with opaque white.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, HslaPixel::default())
    }

    /// Create an image with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: HslaPixel) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), pixel),
        }
    }

    /// Create an image by evaluating `f(x, y)` for every coordinate.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> HslaPixel,
    {
        Self {
            pixels: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        }
    }

    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Borrow the pixel at `(x, y)`.
    ///
    /// # Panics
    /// If the coordinate is outside the image. Use [`HslaImage::try_pixel`]
    /// for a checked lookup.
    pub fn pixel(&self, x: usize, y: usize) -> &HslaPixel {
        match self.try_pixel(x, y) {
            Ok(pixel) => pixel,
            Err(err) => panic!("{err}"),
        }
    }

    /// Mutably borrow the pixel at `(x, y)`.
    ///
    /// # Panics
    /// If the coordinate is outside the image.
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> &mut HslaPixel {
        match self.try_pixel_mut(x, y) {
            Ok(pixel) => pixel,
            Err(err) => panic!("{err}"),
        }
    }

    /// Borrow the pixel at `(x, y)`, or report the coordinate as out of bounds.
    pub fn try_pixel(&self, x: usize, y: usize) -> Result<&HslaPixel, ImageError> {
        let err = self.out_of_bounds(x, y);
        self.pixels.get([y, x]).ok_or(err)
    }

    /// Mutably borrow the pixel at `(x, y)`, or report the coordinate as out of bounds.
    pub fn try_pixel_mut(&mut self, x: usize, y: usize) -> Result<&mut HslaPixel, ImageError> {
        let err = self.out_of_bounds(x, y);
        self.pixels.get_mut([y, x]).ok_or(err)
    }

    /// Pixel array view of shape (height, width).
    pub fn pixels(&self) -> ArrayView2<'_, HslaPixel> {
        self.pixels.view()
    }

    /// Mutable pixel array view of shape (height, width).
    pub fn pixels_mut(&mut self) -> ArrayViewMut2<'_, HslaPixel> {
        self.pixels.view_mut()
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> ImageError {
        ImageError::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        }
    }

    // ------------------------------------------------------------------------
    // RGBA bridge
    // ------------------------------------------------------------------------

    /// Convert a u8 RGB/RGBA array of shape (height, width, 3|4).
    ///
    /// RGB input gets opaque alpha.
    pub fn from_rgba_u8(input: ArrayView3<u8>) -> Result<Self, ImageError> {
        let (height, width, channels) = input.dim();
        check_channels(channels)?;

        let pixels = Array2::from_shape_fn((height, width), |(y, x)| {
            let r = input[[y, x, 0]] as f64 / 255.0;
            let g = input[[y, x, 1]] as f64 / 255.0;
            let b = input[[y, x, 2]] as f64 / 255.0;
            let a = if channels == 4 {
                input[[y, x, 3]] as f64 / 255.0
            } else {
                1.0
            };
            HslaPixel::from_rgba(r, g, b, a)
        });

        Ok(Self { pixels })
    }

    /// Convert an f32 RGB/RGBA array of shape (height, width, 3|4), values 0.0-1.0.
    pub fn from_rgba_f32(input: ArrayView3<f32>) -> Result<Self, ImageError> {
        let (height, width, channels) = input.dim();
        check_channels(channels)?;

        let pixels = Array2::from_shape_fn((height, width), |(y, x)| {
            let r = input[[y, x, 0]] as f64;
            let g = input[[y, x, 1]] as f64;
            let b = input[[y, x, 2]] as f64;
            let a = if channels == 4 { input[[y, x, 3]] as f64 } else { 1.0 };
            HslaPixel::from_rgba(r, g, b, a)
        });

        Ok(Self { pixels })
    }

    /// Convert a flat RGBA byte buffer (length = width * height * 4).
    pub fn from_rgba_flat(data: &[u8], width: usize, height: usize) -> Result<Self, ImageError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(ImageError::InvalidShape {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != expected {
            return Err(ImageError::InvalidShape {
                expected,
                actual: data.len(),
            });
        }

        let view = ArrayView3::from_shape((height, width, 4), data).map_err(|_| {
            ImageError::InvalidShape {
                expected,
                actual: data.len(),
            }
        })?;
        Self::from_rgba_u8(view)
    }

    /// Convert to a u8 RGBA array of shape (height, width, 4).
    pub fn to_rgba_u8(&self) -> Array3<u8> {
        let (height, width) = self.pixels.dim();
        let mut output = Array3::<u8>::zeros((height, width, 4));

        for y in 0..height {
            for x in 0..width {
                let rgba = self.pixels[[y, x]].to_rgba();
                for c in 0..4 {
                    output[[y, x, c]] = (rgba[c].clamp(0.0, 1.0) * 255.0).round() as u8;
                }
            }
        }
        output
    }

    /// Convert to an f32 RGBA array of shape (height, width, 4), values 0.0-1.0.
    pub fn to_rgba_f32(&self) -> Array3<f32> {
        let (height, width) = self.pixels.dim();
        let mut output = Array3::<f32>::zeros((height, width, 4));

        for y in 0..height {
            for x in 0..width {
                let rgba = self.pixels[[y, x]].to_rgba();
                for c in 0..4 {
                    output[[y, x, c]] = rgba[c].clamp(0.0, 1.0) as f32;
                }
            }
        }
        output
    }

    /// Convert to a flat RGBA byte buffer (length = width * height * 4).
    pub fn to_rgba_flat(&self) -> Vec<u8> {
        self.to_rgba_u8().into_raw_vec_and_offset().0
    }
}

fn check_channels(channels: usize) -> Result<(), ImageError> {
    match channels {
        3 | 4 => Ok(()),
        other => Err(ImageError::UnsupportedChannels(other)),
    }
}
