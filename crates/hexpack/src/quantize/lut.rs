//! Bucket lookup table access
//!
//! The table is generated at compile time by build.rs.

include!(concat!(env!("OUT_DIR"), "/bucket_lut.rs"));

/// Look up the bucket index (0..=3) of an 8-bit channel value.
#[inline]
pub fn bucket_index(value: u8) -> u8 {
    BUCKET_LUT[value as usize]
}
