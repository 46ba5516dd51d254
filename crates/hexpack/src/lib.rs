//! hexpack: 2-bit-per-channel RGBA quantization and hex report encoding
//!
//! Each pixel channel is reduced to one of four levels, the four levels
//! of a pixel are packed into one byte, and the bytes of an image are
//! written as lines of `db 0xNN,...;` directives under a label line.
//!
//! # Quick Start
//!
//! The [`HexEncoder`] builder is the primary entry point:
//!
//! ```
//! use hexpack::{render_report, HexEncoder, Rgba};
//!
//! let pixels = vec![
//!     Rgba::new(0, 0, 0, 255),
//!     Rgba::new(255, 255, 255, 255),
//! ];
//! let seq = HexEncoder::new().compress(&pixels, 2, 1).unwrap();
//!
//! assert_eq!(render_report(&seq, "SPRITE"), "SPRITE\n\tdb 0xc0,0xff;\n");
//! ```
//!
//! # Encoding
//!
//! | Channel value | Bucket |
//! |---------------|--------|
//! | `0..=63`      | 0      |
//! | `64..=127`    | 1      |
//! | `128..=191`   | 2      |
//! | `192..=255`   | 3      |
//!
//! ```text
//! byte = alpha << 6 | red << 4 | green << 2 | blue
//! ```
//!
//! The bucket table is generated by `build.rs`; see [`quantize`].
//!
//! # Pipeline
//!
//! ```text
//! &[Rgba] (row-major, width x height)
//!     |
//!     v
//! scan in ScanOrder  --->  Progress callback (once per row)
//!     |
//!     v
//! Sequence of Rows of EncodedPixel
//!     |
//!     v
//! report file: LABEL + "\tdb ...;" lines
//! ```

pub mod api;
pub mod encode;
pub mod output;
pub mod quantize;
pub mod scan;

#[cfg(test)]
mod domain_tests;

pub use api::{EncodeError, HexEncoder};
pub use encode::{encode, Channel, EncodedPixel, Rgba};
pub use output::{label_for_path, render_report, save_report, write_report};
pub use quantize::{quantize, Bucket};
pub use scan::{
    compress, compress_with_progress, ParseScanOrderError, Progress, Row, ScanOrder, Sequence,
};
