//! Error type for the HSLA container and the RGBA bridge.
//!
//! The filters themselves are total; only pixel lookup and buffer
//! conversion can fail.

use thiserror::Error;

/// Errors raised by [`HslaImage`](crate::hsla::HslaImage) accessors and conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    /// Coordinate outside `[0, width) x [0, height)`.
    #[error("pixel ({x}, {y}) is out of bounds for a {width}x{height} image")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Flat buffer length does not match the stated dimensions.
    #[error("buffer holds {actual} values, expected {expected}")]
    InvalidShape { expected: usize, actual: usize },

    /// RGBA array with a channel count other than 3 or 4.
    #[error("unsupported channel count {0}, expected 3 (RGB) or 4 (RGBA)")]
    UnsupportedChannels(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = ImageError::OutOfBounds { x: 5, y: 2, width: 4, height: 3 };
        assert_eq!(err.to_string(), "pixel (5, 2) is out of bounds for a 4x3 image");
    }

    #[test]
    fn test_invalid_shape_message() {
        let err = ImageError::InvalidShape { expected: 16, actual: 12 };
        assert_eq!(err.to_string(), "buffer holds 12 values, expected 16");
    }
}
