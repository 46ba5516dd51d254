//! Image decoding and colour-mode conversion.

use crate::error::ConvertError;
use crate::models::{ColorMode, ImageInfo};
use hexpack::Rgba;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// A decoded image converted to a [`ColorMode`] and widened to RGBA.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pixels: Vec<Rgba>,
    width: u32,
    height: u32,
    mode: ColorMode,
    info: ImageInfo,
}

impl LoadedImage {
    /// Convert an already decoded image.
    pub fn from_dynamic(img: &DynamicImage, mode: ColorMode, format: Option<String>) -> Self {
        let info = ImageInfo {
            width: img.width(),
            height: img.height(),
            format,
            color_type: format!("{:?}", img.color()),
        };

        let pixels: Vec<Rgba> = match mode {
            ColorMode::Rgba => img.to_rgba8().pixels().map(|p| Rgba::from(p.0)).collect(),
            ColorMode::Rgb => img
                .to_rgb8()
                .pixels()
                .map(|p| {
                    let [r, g, b] = p.0;
                    Rgba::opaque(r, g, b)
                })
                .collect(),
            ColorMode::La => img
                .to_luma_alpha8()
                .pixels()
                .map(|p| {
                    let [l, a] = p.0;
                    Rgba::new(l, l, l, a)
                })
                .collect(),
            ColorMode::L => img
                .to_luma8()
                .pixels()
                .map(|p| {
                    let [l] = p.0;
                    Rgba::opaque(l, l, l)
                })
                .collect(),
        };

        Self {
            pixels,
            width: info.width,
            height: info.height,
            mode,
            info,
        }
    }

    /// Pixels in row-major order, `width * height` entries
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn info(&self) -> &ImageInfo {
        &self.info
    }
}

/// Opens image files through the `image` crate.
///
/// The format is detected from the file contents, so a PNG named `.jpg`
/// still decodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageLoader;

impl ImageLoader {
    pub fn new() -> Self {
        Self
    }

    /// Decode `path` and convert it to `mode`.
    pub fn load(&self, path: &Path, mode: ColorMode) -> Result<LoadedImage, ConvertError> {
        let (img, format) = self.decode(path)?;
        let loaded = LoadedImage::from_dynamic(&img, mode, format);

        tracing::info!(
            path = %path.display(),
            width = loaded.width(),
            height = loaded.height(),
            mode = %mode,
            keeps_alpha = mode.has_alpha(),
            "Loaded image"
        );

        Ok(loaded)
    }

    /// Decode `path` and report its size and colour type without converting it.
    pub fn probe(&self, path: &Path) -> Result<ImageInfo, ConvertError> {
        let (img, format) = self.decode(path)?;
        Ok(ImageInfo {
            width: img.width(),
            height: img.height(),
            format,
            color_type: format!("{:?}", img.color()),
        })
    }

    fn decode(&self, path: &Path) -> Result<(DynamicImage, Option<String>), ConvertError> {
        let load_error = |source: image::ImageError| ConvertError::ImageLoad {
            path: path.to_path_buf(),
            source,
        };

        let reader = ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| load_error(image::ImageError::IoError(e)))?;
        let format = reader.format().map(|f| format!("{f:?}"));
        tracing::debug!(path = %path.display(), format = ?format, "Decoding image");

        let img = reader.decode().map_err(load_error)?;
        Ok((img, format))
    }
}
