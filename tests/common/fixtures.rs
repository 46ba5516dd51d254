//! Test fixtures: scratch directories and generated images.

use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Pixel values on both sides of the bucket boundaries
pub mod pixels {
    /// r=200 -> 3, g=10 -> 0, b=130 -> 2, a=60 -> 0 => 0x32
    pub const MIXED: [u8; 4] = [200, 10, 130, 60];
    /// => 0xc0
    pub const BLACK_OPAQUE: [u8; 4] = [0, 0, 0, 255];
    /// => 0xff
    pub const WHITE_OPAQUE: [u8; 4] = [255, 255, 255, 255];
    /// => 0x00
    pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
    /// => 0x15
    pub const LOW_EDGE: [u8; 4] = [127, 127, 127, 0];
    /// => 0x2a
    pub const HIGH_EDGE: [u8; 4] = [128, 128, 128, 0];
}

/// A temporary directory that cleans up on drop
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an image whose pixels come from `rows` (row-major)
    pub fn image(&self, name: &str, format: ImageFormat, rows: &[&[[u8; 4]]]) -> PathBuf {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba(rows[y as usize][x as usize])
        }));

        let path = self.join(name);
        let result = match format {
            // JPEG and BMP fixtures are written without alpha
            ImageFormat::Jpeg | ImageFormat::Bmp => {
                DynamicImage::ImageRgb8(img.to_rgb8()).save_with_format(&path, format)
            }
            _ => img.save_with_format(&path, format),
        };
        result.expect("write fixture image");
        path
    }

    /// 3x2 PNG covering every bucket:
    ///
    /// ```text
    /// 0x32 0xc0 0xff
    /// 0x00 0x15 0x2a
    /// ```
    pub fn sample_png(&self, name: &str) -> PathBuf {
        use pixels::*;
        self.image(
            name,
            ImageFormat::Png,
            &[
                &[MIXED, BLACK_OPAQUE, WHITE_OPAQUE],
                &[TRANSPARENT, LOW_EDGE, HIGH_EDGE],
            ],
        )
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.join(name);
        std::fs::write(&path, contents).expect("write fixture file");
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.join(name)).expect("read output file")
    }
}
