pub mod color_mode;
pub mod config;
pub mod image_info;

pub use color_mode::ColorMode;
pub use config::{AppConfig, CONFIG_ENV_VAR, DEFAULT_OUTPUT_NAME};
pub use image_info::ImageInfo;
