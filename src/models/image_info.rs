use std::fmt;

/// Summary of a decoded image, as shown by `imagehex info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Container format detected from the file contents, if known
    pub format: Option<String>,
    /// Colour type of the decoded image before mode conversion
    pub color_type: String,
}

impl ImageInfo {
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// `W x H`
impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}
