use crate::error::ConvertError;
use crate::models::AppConfig;
use crate::services::image_loader::{ImageLoader, LoadedImage};
use hexpack::{label_for_path, HexEncoder, Progress, Sequence};
use std::path::{Path, PathBuf};

/// Outcome of one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Report file written
    pub output: PathBuf,
    /// Label written as the first report line
    pub label: String,
    /// Number of `db` lines
    pub rows: usize,
    /// Encoded pixels per `db` line
    pub pixels_per_row: usize,
}

/// Load -> compress -> report pipeline
pub struct ConversionService {
    config: AppConfig,
    loader: ImageLoader,
    encoder: HexEncoder,
}

impl ConversionService {
    pub fn new(config: AppConfig) -> Self {
        let encoder = HexEncoder::new().scan_order(config.scan_order);
        Self {
            config,
            loader: ImageLoader::new(),
            encoder,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Default report path for `input`: the configured output name in the
    /// input's directory.
    pub fn default_output_for(&self, input: &Path) -> PathBuf {
        match input.parent() {
            Some(dir) => dir.join(&self.config.output_name),
            None => PathBuf::from(&self.config.output_name),
        }
    }

    /// Decode `input` in the configured colour mode
    pub fn load(&self, input: &Path) -> Result<LoadedImage, ConvertError> {
        self.loader.load(input, self.config.color_mode)
    }

    /// Encode a loaded image, calling `on_progress` after every row
    pub fn compress<F>(
        &self,
        image: &LoadedImage,
        mut on_progress: F,
    ) -> Result<Sequence, ConvertError>
    where
        F: FnMut(Progress),
    {
        let sequence = self.encoder.compress_with_progress(
            image.pixels(),
            image.width() as usize,
            image.height() as usize,
            |progress| {
                tracing::trace!(
                    row = progress.completed,
                    total = progress.total,
                    "Encoded row"
                );
                on_progress(progress);
            },
        )?;

        tracing::debug!(
            rows = sequence.len(),
            pixels_per_row = sequence.row_len(),
            mode = %image.mode(),
            order = %self.encoder.order(),
            "Compressed image"
        );

        Ok(sequence)
    }

    /// Write `sequence` to `output`, replacing any existing file
    pub fn report(&self, sequence: &Sequence, output: &Path) -> Result<(), ConvertError> {
        self.encoder
            .report(sequence, output)
            .map_err(|source| ConvertError::FileWrite {
                path: output.to_path_buf(),
                source,
            })
    }

    /// Convert `input` into a report at `output`
    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConversionSummary, ConvertError> {
        self.convert_with_progress(input, output, |_| {})
    }

    /// Convert `input` into a report at `output`, reporting per-row progress
    pub fn convert_with_progress<F>(
        &self,
        input: &Path,
        output: &Path,
        on_progress: F,
    ) -> Result<ConversionSummary, ConvertError>
    where
        F: FnMut(Progress),
    {
        let image = self.load(input)?;
        let sequence = self.compress(&image, on_progress)?;
        self.report(&sequence, output)?;

        let summary = ConversionSummary {
            output: output.to_path_buf(),
            label: label_for_path(output),
            rows: sequence.len(),
            pixels_per_row: sequence.row_len(),
        };

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            label = %summary.label,
            rows = summary.rows,
            "Wrote report"
        );

        Ok(summary)
    }
}
