//! HexEncoder builder -- the ergonomic entry point for the crate.

use std::io;
use std::path::Path;

use super::EncodeError;
use crate::encode::Rgba;
use crate::output;
use crate::scan::{self, Progress, ScanOrder, Sequence};

/// Image-to-hex encoder.
///
/// Configuration methods consume and return `self`; [`compress`](Self::compress)
/// takes `&self`, so one encoder can be reused for many images.
///
/// # Example
///
/// ```
/// use hexpack::{HexEncoder, Rgba, ScanOrder};
///
/// let encoder = HexEncoder::new().scan_order(ScanOrder::ColumnMajor);
/// let pixels = vec![Rgba::opaque(255, 0, 0); 6];
/// let seq = encoder.compress(&pixels, 3, 2).unwrap();
///
/// // column-major: one row per image column
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq.row_len(), 2);
/// assert_eq!(seq.rows()[0].to_string(), "0xf0,0xf0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HexEncoder {
    order: ScanOrder,
}

impl HexEncoder {
    /// Create an encoder with row-major scanning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scan order.
    #[inline]
    pub fn scan_order(mut self, order: ScanOrder) -> Self {
        self.order = order;
        self
    }

    /// The configured scan order.
    #[inline]
    pub fn order(&self) -> ScanOrder {
        self.order
    }

    /// Scan a row-major pixel buffer into a [`Sequence`].
    pub fn compress(
        &self,
        pixels: &[Rgba],
        width: usize,
        height: usize,
    ) -> Result<Sequence, EncodeError> {
        scan::compress(pixels, width, height, self.order)
    }

    /// Like [`compress`](Self::compress), calling `on_row` after every row.
    pub fn compress_with_progress<F>(
        &self,
        pixels: &[Rgba],
        width: usize,
        height: usize,
        on_row: F,
    ) -> Result<Sequence, EncodeError>
    where
        F: FnMut(Progress),
    {
        scan::compress_with_progress(pixels, width, height, self.order, on_row)
    }

    /// Write `sequence` as a report to `path`. See [`output::save_report`].
    pub fn report(&self, sequence: &Sequence, path: impl AsRef<Path>) -> io::Result<()> {
        output::save_report(sequence, path)
    }
}
