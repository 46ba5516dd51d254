//! Scan order selection.

use std::fmt;
use std::str::FromStr;

/// Which image axis becomes a report row.
///
/// - [`RowMajor`](ScanOrder::RowMajor): one row per image row (`height`
///   rows of `width` pixels). Default.
/// - [`ColumnMajor`](ScanOrder::ColumnMajor): one row per image column
///   (`width` rows of `height` pixels). This is the layout produced by
///   tools that unpack the image size as `(height, width)` and then
///   address pixels as `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanOrder {
    #[default]
    RowMajor,
    ColumnMajor,
}

impl ScanOrder {
    /// `(rows, pixels_per_row)` of the sequence produced for an image.
    #[inline]
    pub fn extents(self, width: usize, height: usize) -> (usize, usize) {
        match self {
            ScanOrder::RowMajor => (height, width),
            ScanOrder::ColumnMajor => (width, height),
        }
    }

    /// Index into a row-major pixel buffer for the `step`-th pixel of
    /// sequence row `row`.
    #[inline]
    pub fn pixel_index(self, row: usize, step: usize, width: usize) -> usize {
        match self {
            ScanOrder::RowMajor => row * width + step,
            ScanOrder::ColumnMajor => step * width + row,
        }
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            ScanOrder::RowMajor => "row-major",
            ScanOrder::ColumnMajor => "column-major",
        }
    }
}

impl fmt::Display for ScanOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a scan order name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScanOrderError(String);

impl fmt::Display for ParseScanOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown scan order '{}' (expected 'row-major' or 'column-major')",
            self.0
        )
    }
}

impl std::error::Error for ParseScanOrderError {}

impl FromStr for ScanOrder {
    type Err = ParseScanOrderError;

    /// Parse a scan order name, case-insensitively.
    ///
    /// `row-major` / `rows` and `column-major` / `columns` / `legacy` are
    /// accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "row-major" | "rows" => Ok(ScanOrder::RowMajor),
            "column-major" | "columns" | "legacy" => Ok(ScanOrder::ColumnMajor),
            _ => Err(ParseScanOrderError(s.to_string())),
        }
    }
}
