//! Public API for the hexpack crate.
//!
//! This module provides the high-level API: [`HexEncoder`] builder and
//! [`EncodeError`].

mod builder;
mod error;

pub use builder::HexEncoder;
pub use error::EncodeError;
