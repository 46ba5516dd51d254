//! 8-bit RGBA pixel type

/// One pixel with 8-bit red, green, blue and alpha channels.
///
/// Field order follows the usual `[R, G, B, A]` memory layout, which is
/// not the packing order of [`EncodedPixel`](super::EncodedPixel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Create a pixel from its four channels.
    #[inline]
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque pixel.
    #[inline]
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// Create a pixel from a byte array `[R, G, B, A]`.
    ///
    /// # Example
    /// ```
    /// use hexpack::Rgba;
    /// let px = Rgba::from_bytes([1, 2, 3, 4]);
    /// assert_eq!(px.a, 4);
    /// ```
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

impl From<[u8; 4]> for Rgba {
    #[inline]
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    #[inline]
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, a)
    }
}
