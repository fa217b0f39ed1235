//! hsla_fx
//!
//! Per-pixel photographic filters over HSLA (hue, saturation, luminance,
//! alpha) images, with Python bindings via PyO3 and WASM bindings for
//! JavaScript.
//!
//! ## Image Format
//! Filters operate on [`HslaImage`], a (height, width) grid of [`HslaPixel`]s
//! with `f64` channels:
//! - **h**: hue in degrees, 0.0-360.0
//! - **s**, **l**, **a**: saturation, luminance, alpha, 0.0-1.0
//!
//! RGBA data converts in and out through [`HslaImage::from_rgba_u8`],
//! [`HslaImage::to_rgba_u8`] and friends. Bindings accept and return RGBA
//! `u8` arrays and convert internally.
//!
//! ## Filters
//! - [`filters::grayscale()`] - drop saturation
//! - [`filters::spotlight()`] - dim luminance with distance from a point
//! - [`filters::illinify()`] - snap hues to Illini orange or blue
//! - [`filters::watermark()`] - brighten where a stencil is white
//!
//! ```
//! use hsla_fx::{filters, HslaImage, HslaPixel};
//!
//! let image = HslaImage::filled(4, 4, HslaPixel::new(200.0, 0.8, 0.5, 1.0));
//! let image = filters::illinify(filters::grayscale(image));
//! assert_eq!(image.pixel(0, 0).h, 216.0);
//! assert_eq!(image.pixel(0, 0).s, 0.0);
//! ```

pub mod error;
pub mod filters;
pub mod hsla;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::ImageError;
pub use hsla::{HslaImage, HslaPixel};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::ImageError;
    use crate::filters;
    use crate::hsla::HslaImage;

    impl From<ImageError> for PyErr {
        fn from(err: ImageError) -> Self {
            PyValueError::new_err(err.to_string())
        }
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Desaturate an RGB/RGBA u8 image.
    ///
    /// Output is RGBA u8, alpha preserved.
    #[pyfunction]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = HslaImage::from_rgba_u8(image.as_array())?;
        let result = filters::grayscale(input);
        Ok(result.to_rgba_u8().into_pyarray(py))
    }

    /// Dim an RGB/RGBA u8 image with distance from (center_x, center_y).
    ///
    /// Luminance drops 0.5% per pixel of distance, flat 80% from 160 pixels out.
    #[pyfunction]
    #[pyo3(signature = (image, center_x=0, center_y=0))]
    pub fn spotlight<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        center_x: i64,
        center_y: i64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = HslaImage::from_rgba_u8(image.as_array())?;
        let result = filters::spotlight(input, center_x, center_y);
        Ok(result.to_rgba_u8().into_pyarray(py))
    }

    /// Snap every hue of an RGB/RGBA u8 image to Illini orange or blue.
    #[pyfunction]
    pub fn illinify<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = HslaImage::from_rgba_u8(image.as_array())?;
        let result = filters::illinify(input);
        Ok(result.to_rgba_u8().into_pyarray(py))
    }

    /// Brighten `image` by 0.2 luminance wherever `stencil` is pure white.
    ///
    /// Images may differ in size; only the overlap is processed.
    #[pyfunction]
    pub fn watermark<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        stencil: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let base = HslaImage::from_rgba_u8(image.as_array())?;
        let stencil = HslaImage::from_rgba_u8(stencil.as_array())?;
        let result = filters::watermark(base, &stencil);
        Ok(result.to_rgba_u8().into_pyarray(py))
    }

    #[pymodule]
    pub fn hsla_fx(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(spotlight, m)?)?;
        m.add_function(wrap_pyfunction!(illinify, m)?)?;
        m.add_function(wrap_pyfunction!(watermark, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::hsla_fx;
