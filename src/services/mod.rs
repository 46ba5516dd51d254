pub mod converter;
pub mod image_loader;
pub mod report_opener;

pub use converter::{ConversionService, ConversionSummary};
pub use image_loader::{ImageLoader, LoadedImage};
pub use report_opener::{ensure_exists, open_report};
