//! Pixel encoding
//!
//! [`Rgba`] is the input pixel, [`EncodedPixel`] the packed output byte.

mod encoded_pixel;
mod rgba;

pub use encoded_pixel::{Channel, EncodedPixel};
pub use rgba::Rgba;

/// Encode one pixel. Shorthand for [`EncodedPixel::encode`].
#[inline]
pub fn encode(pixel: Rgba) -> EncodedPixel {
    EncodedPixel::encode(pixel)
}
