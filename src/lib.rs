//! imagehex - image to 2-bit-per-channel hex reports
//!
//! Decodes raster images, packs every pixel into one byte with the
//! [`hexpack`] encoder and writes the result as `db` lines.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

pub use error::ConvertError;
