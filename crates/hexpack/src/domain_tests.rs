//! Cross-module regression tests for hexpack.
//!
//! Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::HexEncoder;
    use crate::encode::{Channel, EncodedPixel, Rgba};
    use crate::output::{label_for_path, render_report, save_report};
    use crate::quantize::quantize;
    use crate::scan::ScanOrder;
    use pretty_assertions::assert_eq;

    /// If this breaks, it means: the packing order of the channels changed.
    /// Alpha must occupy the top two bits even though it is the last field
    /// of `Rgba`.
    #[test]
    fn test_alpha_is_most_significant() {
        let only_alpha = EncodedPixel::encode(Rgba::new(0, 0, 0, 255));
        let only_blue = EncodedPixel::encode(Rgba::new(0, 0, 255, 0));
        assert_eq!(only_alpha.to_string(), "0xc0");
        assert_eq!(only_blue.to_string(), "0x03");
    }

    /// If this breaks, it means: encoding and unpacking disagree for some
    /// channel value, so a report would not describe the image it came from.
    #[test]
    fn test_every_channel_value_survives_packing() {
        for v in 0..=255u8 {
            let px = EncodedPixel::encode(Rgba::new(v, v, v, v));
            for channel in Channel::ALL {
                assert_eq!(px.bucket(channel), quantize(v), "value {v} {channel:?}");
            }
        }
    }

    /// If this breaks, it means: a bucket boundary moved off by one.
    #[test]
    fn test_bucket_boundaries_in_hex() {
        let cases = [
            (63u8, "0x00"),
            (64, "0x15"),
            (127, "0x15"),
            (128, "0x2a"),
            (191, "0x2a"),
            (192, "0x3f"),
        ];
        for (v, expected) in cases {
            let px = EncodedPixel::encode(Rgba::new(v, v, v, 0));
            assert_eq!(px.to_string(), expected, "grey {v}");
        }
    }

    /// If this breaks, it means: the scan visits some pixel twice or skips
    /// one. Every pixel of a 4x3 image carries a unique (green, blue) code,
    /// so both orders must produce each code exactly once.
    #[test]
    fn test_scan_visits_every_pixel_once() {
        let (w, h) = (4usize, 3usize);
        let pixels: Vec<Rgba> = (0..w * h)
            .map(|i| Rgba::new(0, ((i / 4) * 64) as u8, ((i % 4) * 64) as u8, 0))
            .collect();

        for order in [ScanOrder::RowMajor, ScanOrder::ColumnMajor] {
            let seq = HexEncoder::new().scan_order(order).compress(&pixels, w, h).unwrap();
            let mut seen: Vec<u8> = seq.iter().flat_map(|r| r.iter().map(|p| p.byte())).collect();
            seen.sort_unstable();
            let expected: Vec<u8> = (0..(w * h) as u8).collect();
            assert_eq!(seen, expected, "{order}");
        }
    }

    /// If this breaks, it means: column-major scanning no longer matches the
    /// transposed row-major result.
    #[test]
    fn test_column_major_is_transpose_of_row_major() {
        let (w, h) = (3usize, 2usize);
        let pixels: Vec<Rgba> = (0..w * h).map(|i| Rgba::new((i * 40) as u8, 0, 0, 0)).collect();

        let rows = HexEncoder::new().compress(&pixels, w, h).unwrap();
        let cols = HexEncoder::new()
            .scan_order(ScanOrder::ColumnMajor)
            .compress(&pixels, w, h)
            .unwrap();

        assert_eq!(rows.len(), h);
        assert_eq!(cols.len(), w);
        for y in 0..h {
            for x in 0..w {
                assert_eq!(rows.rows()[y].pixels()[x], cols.rows()[x].pixels()[y]);
            }
        }
    }

    /// If this breaks, it means: the on-disk report diverged from the
    /// in-memory rendering, or the label is not taken from the file name.
    #[test]
    fn test_saved_report_matches_rendered_report() {
        let pixels = vec![Rgba::new(200, 10, 130, 60)];
        let seq = HexEncoder::new().compress(&pixels, 1, 1).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Player_Sprite.asm");
        save_report(&seq, &path).unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, render_report(&seq, &label_for_path(&path)));
        assert_eq!(on_disk, "PLAYER_SPR\n\tdb 0x32;\n");
    }
}
