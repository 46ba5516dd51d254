use hexpack::EncodeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to load image {}: {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write report {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output file does not exist: {}", .0.display())]
    OutputMissing(PathBuf),

    #[error("Failed to open {}: {reason}", path.display())]
    OpenFailed { path: PathBuf, reason: String },

    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Config error in {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}
