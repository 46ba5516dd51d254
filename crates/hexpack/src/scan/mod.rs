//! Image scan: pixel buffer to [`Sequence`].
//!
//! Every pixel is visited exactly once. Rows are produced in the order
//! chosen by [`ScanOrder`], and an optional callback is invoked after
//! each completed row with a [`Progress`] value.

mod order;
mod sequence;

pub use order::{ParseScanOrderError, ScanOrder};
pub use sequence::{Progress, Row, Sequence};

use crate::api::EncodeError;
use crate::encode::{EncodedPixel, Rgba};

/// Scan a row-major pixel buffer without progress reporting.
///
/// # Errors
///
/// [`EncodeError::DimensionMismatch`] if `pixels.len() != width * height`.
pub fn compress(
    pixels: &[Rgba],
    width: usize,
    height: usize,
    order: ScanOrder,
) -> Result<Sequence, EncodeError> {
    compress_with_progress(pixels, width, height, order, |_| {})
}

/// Scan a row-major pixel buffer, calling `on_row` after each row.
///
/// `on_row` is called exactly `rows` times, where `rows` is the first
/// element of [`ScanOrder::extents`].
pub fn compress_with_progress<F>(
    pixels: &[Rgba],
    width: usize,
    height: usize,
    order: ScanOrder,
    mut on_row: F,
) -> Result<Sequence, EncodeError>
where
    F: FnMut(Progress),
{
    let expected = width
        .checked_mul(height)
        .ok_or(EncodeError::TooLarge { width, height })?;
    if pixels.len() != expected {
        return Err(EncodeError::DimensionMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    let (total, per_row) = order.extents(width, height);
    let mut rows = Vec::with_capacity(total);

    for row in 0..total {
        let encoded: Row = (0..per_row)
            .map(|step| EncodedPixel::encode(pixels[order.pixel_index(row, step, width)]))
            .collect();
        rows.push(encoded);

        on_row(Progress {
            completed: row + 1,
            total,
        });
    }

    Ok(Sequence::new(rows))
}
