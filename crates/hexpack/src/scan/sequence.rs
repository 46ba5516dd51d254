//! Scan output types.

use std::fmt;

use crate::encode::EncodedPixel;

/// Encoded pixels of one scan line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row(Vec<EncodedPixel>);

impl Row {
    pub fn new(pixels: Vec<EncodedPixel>) -> Self {
        Self(pixels)
    }

    #[inline]
    pub fn pixels(&self) -> &[EncodedPixel] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EncodedPixel> {
        self.0.iter()
    }
}

impl FromIterator<EncodedPixel> for Row {
    fn from_iter<I: IntoIterator<Item = EncodedPixel>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a EncodedPixel;
    type IntoIter = std::slice::Iter<'a, EncodedPixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Comma-separated hex literals, e.g. `0x00,0x3f,0xff`.
impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, px) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{px}")?;
        }
        Ok(())
    }
}

/// The full result of one scan: rows in scan order.
///
/// A `Sequence` is immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    rows: Vec<Row>,
}

impl Sequence {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the first row (all rows of a scanned image share it).
    pub fn row_len(&self) -> usize {
        self.rows.first().map_or(0, Row::len)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }
}

impl FromIterator<Row> for Sequence {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Progress notification handed to the scan callback after each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Rows finished so far, `1..=total`.
    pub completed: usize,
    /// Rows the scan will produce.
    pub total: usize,
}

impl Progress {
    /// Completion as a fraction in `0.0..=1.0`.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }

    pub fn is_done(&self) -> bool {
        self.completed >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(bytes: &[u8]) -> Row {
        bytes.iter().map(|&b| EncodedPixel::from(b)).collect()
    }

    #[test]
    fn test_row_display_joins_with_commas() {
        assert_eq!(row(&[0x00, 0x3f, 0xff]).to_string(), "0x00,0x3f,0xff");
        assert_eq!(row(&[0x07]).to_string(), "0x07");
        assert_eq!(row(&[]).to_string(), "");
    }

    #[test]
    fn test_sequence_dimensions() {
        let seq: Sequence = vec![row(&[1, 2, 3]), row(&[4, 5, 6])].into_iter().collect();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.row_len(), 3);
        assert!(!seq.is_empty());
        assert_eq!(Sequence::default().row_len(), 0);
    }

    #[test]
    fn test_progress_fraction() {
        let p = Progress {
            completed: 1,
            total: 4,
        };
        assert!((p.fraction() - 0.25).abs() < f32::EPSILON);
        assert!(!p.is_done());

        let empty = Progress {
            completed: 0,
            total: 0,
        };
        assert_eq!(empty.fraction(), 1.0);
        assert!(empty.is_done());
    }
}
