use serde::Deserialize;
use std::fmt;

/// Colour mode the decoded image is converted to before encoding.
///
/// Every mode is widened back to RGBA for the encoder:
/// - modes without alpha encode alpha as 255 (fully opaque);
/// - grey modes copy the luma value into red, green and blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Red, green, blue and alpha
    #[default]
    Rgba,
    /// Red, green and blue; alpha forced opaque
    Rgb,
    /// Luma with alpha
    La,
    /// Luma only; alpha forced opaque
    L,
}

impl ColorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Rgba => "rgba",
            ColorMode::Rgb => "rgb",
            ColorMode::La => "la",
            ColorMode::L => "l",
        }
    }

    /// Whether the mode keeps the source alpha channel
    pub fn has_alpha(self) -> bool {
        matches!(self, ColorMode::Rgba | ColorMode::La)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
