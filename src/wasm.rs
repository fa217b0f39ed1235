//! WebAssembly exports for the HSLA filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! All exports take a flat RGBA byte buffer (length = width * height * 4)
//! and return a new buffer of the same layout. Buffers whose length does
//! not match the dimensions are rejected with a `JsError`.

use wasm_bindgen::prelude::*;

use crate::filters::{grayscale, illinify, spotlight, watermark};
use crate::hsla::HslaImage;

/// Desaturate an RGBA image.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// Flat array of RGBA bytes with saturation removed
#[wasm_bindgen]
pub fn grayscale_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let image = HslaImage::from_rgba_flat(data, width, height)?;
    Ok(grayscale(image).to_rgba_flat())
}

/// Dim an RGBA image with distance from (`center_x`, `center_y`).
#[wasm_bindgen]
pub fn spotlight_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    center_x: i32,
    center_y: i32,
) -> Result<Vec<u8>, JsError> {
    let image = HslaImage::from_rgba_flat(data, width, height)?;
    Ok(spotlight(image, center_x.into(), center_y.into()).to_rgba_flat())
}

/// Snap every hue of an RGBA image to Illini orange or blue.
#[wasm_bindgen]
pub fn illinify_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    let image = HslaImage::from_rgba_flat(data, width, height)?;
    Ok(illinify(image).to_rgba_flat())
}

/// Brighten an RGBA image wherever an RGBA stencil is pure white.
///
/// # Arguments
/// * `data` - Base image, flat RGBA bytes
/// * `width` / `height` - Base image dimensions
/// * `stencil` - Stencil image, flat RGBA bytes
/// * `stencil_width` / `stencil_height` - Stencil dimensions
///
/// # Returns
/// Flat RGBA bytes of the watermarked base image
#[wasm_bindgen]
pub fn watermark_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    stencil: &[u8],
    stencil_width: usize,
    stencil_height: usize,
) -> Result<Vec<u8>, JsError> {
    let base = HslaImage::from_rgba_flat(data, width, height)?;
    let stencil = HslaImage::from_rgba_flat(stencil, stencil_width, stencil_height)?;
    Ok(watermark(base, &stencil).to_rgba_flat())
}
