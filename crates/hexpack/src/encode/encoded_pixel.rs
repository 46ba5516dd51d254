//! Packed 2-bit-per-channel pixel
//!
//! Bit layout of the packed byte:
//!
//! ```text
//!   7 6   5 4   3 2   1 0
//!  [ a ] [ r ] [ g ] [ b ]
//! ```

use std::fmt;

use super::rgba::Rgba;
use crate::quantize::{quantize, Bucket};

/// A channel of an [`EncodedPixel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Alpha,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels, most significant first.
    pub const ALL: [Channel; 4] = [Channel::Alpha, Channel::Red, Channel::Green, Channel::Blue];

    #[inline]
    fn shift(self) -> u8 {
        match self {
            Channel::Alpha => 6,
            Channel::Red => 4,
            Channel::Green => 2,
            Channel::Blue => 0,
        }
    }
}

/// One pixel quantized to four 2-bit buckets and packed into a byte.
///
/// `Display` renders the byte as a lowercase `0xNN` literal, which is
/// always exactly four characters.
///
/// # Example
///
/// ```
/// use hexpack::{EncodedPixel, Rgba};
///
/// let px = EncodedPixel::encode(Rgba::new(255, 0, 0, 0));
/// assert_eq!(px.to_string(), "0x30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EncodedPixel(u8);

impl EncodedPixel {
    /// Quantize each channel of `pixel` and pack the buckets.
    #[inline]
    pub fn encode(pixel: Rgba) -> Self {
        Self::pack(
            quantize(pixel.a),
            quantize(pixel.r),
            quantize(pixel.g),
            quantize(pixel.b),
        )
    }

    /// Pack four buckets as `a << 6 | r << 4 | g << 2 | b`.
    #[inline]
    pub fn pack(a: Bucket, r: Bucket, g: Bucket, b: Bucket) -> Self {
        Self((a.value() << 6) | (r.value() << 4) | (g.value() << 2) | b.value())
    }

    /// Extract the bucket stored for `channel`.
    #[inline]
    pub fn bucket(self, channel: Channel) -> Bucket {
        // Masked to two bits, so always a valid level.
        Bucket::new((self.0 >> channel.shift()) & 0b11).unwrap_or_default()
    }

    /// The packed byte.
    #[inline]
    pub fn byte(self) -> u8 {
        self.0
    }
}

impl From<u8> for EncodedPixel {
    #[inline]
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl From<Rgba> for EncodedPixel {
    #[inline]
    fn from(pixel: Rgba) -> Self {
        Self::encode(pixel)
    }
}

impl fmt::Display for EncodedPixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

impl fmt::LowerHex for EncodedPixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
