//! Error type for the hexpack scan API.

use std::fmt;

/// Error returned when a pixel buffer cannot be scanned.
///
/// # Example
///
/// ```
/// use hexpack::{EncodeError, HexEncoder, Rgba};
///
/// let pixels = vec![Rgba::default(); 3];
/// let err = HexEncoder::new().compress(&pixels, 2, 2).unwrap_err();
/// assert_eq!(err, EncodeError::DimensionMismatch { expected: 4, actual: 3 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Pixel count does not equal `width * height`
    DimensionMismatch {
        /// `width * height`
        expected: usize,
        /// Number of pixels supplied
        actual: usize,
    },
    /// `width * height` overflows `usize`
    TooLarge {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel count mismatch: expected {} pixels, got {}",
                    expected, actual
                )
            }
            EncodeError::TooLarge { width, height } => {
                write!(f, "image dimensions {}x{} are too large", width, height)
            }
        }
    }
}

impl std::error::Error for EncodeError {}
