//! Channel quantization
//!
//! Maps an 8-bit channel value onto one of four equal-width ranges:
//!
//! | Channel value | Bucket |
//! |---------------|--------|
//! | `0..=63`      | 0      |
//! | `64..=127`    | 1      |
//! | `128..=191`   | 2      |
//! | `192..=255`   | 3      |
//!
//! # Example
//!
//! ```
//! use hexpack::{quantize, Bucket};
//!
//! assert_eq!(quantize(200), Bucket::new(3).unwrap());
//! assert_eq!(quantize(63).value(), 0);
//! ```

mod lut;

use std::fmt;

/// A 2-bit quantization level of a single channel.
///
/// Always in `0..=3`; construction outside [`quantize`] goes through
/// [`Bucket::new`], which rejects larger values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bucket(u8);

impl Bucket {
    /// Lowest level (channel values `0..=63`).
    pub const MIN: Self = Self(0);
    /// Highest level (channel values `192..=255`).
    pub const MAX: Self = Self(3);

    /// Create a bucket from a raw level, or `None` if `level > 3`.
    #[inline]
    pub fn new(level: u8) -> Option<Self> {
        (level <= 3).then_some(Self(level))
    }

    /// The raw level in `0..=3`.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantize an 8-bit channel value to its [`Bucket`].
#[inline]
pub fn quantize(value: u8) -> Bucket {
    Bucket(lut::bucket_index(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_ranges() {
        for v in 0..=63u8 {
            assert_eq!(quantize(v).value(), 0, "value {v}");
        }
        for v in 64..=127u8 {
            assert_eq!(quantize(v).value(), 1, "value {v}");
        }
        for v in 128..=191u8 {
            assert_eq!(quantize(v).value(), 2, "value {v}");
        }
        for v in 192..=255u8 {
            assert_eq!(quantize(v).value(), 3, "value {v}");
        }
    }

    #[test]
    fn test_bucket_new_rejects_out_of_range() {
        assert_eq!(Bucket::new(0), Some(Bucket::MIN));
        assert_eq!(Bucket::new(3), Some(Bucket::MAX));
        assert_eq!(Bucket::new(4), None);
    }

    #[test]
    fn test_bucket_display() {
        assert_eq!(quantize(130).to_string(), "2");
    }
}
