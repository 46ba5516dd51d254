use crate::error::ConvertError;
use crate::models::ColorMode;
use hexpack::ScanOrder;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Environment variable naming a config file to load when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "IMAGEHEX_CONFIG";

/// Report file name used when no output path is given
pub const DEFAULT_OUTPUT_NAME: &str = "output.txt";

/// Application configuration loaded from a YAML file
///
/// ```yaml
/// color_mode: rgba
/// scan_order: column-major
/// output_name: sprite.inc
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Mode the image is converted to before encoding
    pub color_mode: ColorMode,

    /// Which image axis becomes a report line
    #[serde(deserialize_with = "deserialize_scan_order")]
    pub scan_order: ScanOrder,

    /// File name of the report written next to the input image
    pub output_name: String,
}

fn deserialize_scan_order<'de, D>(deserializer: D) -> Result<ScanOrder, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::default(),
            scan_order: ScanOrder::default(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load configuration from an explicit file. Any failure is an error.
    pub fn load_file(path: &Path) -> Result<Self, ConvertError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConvertError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::from_yaml_str(&content).map_err(|e| ConvertError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tracing::info!(
            path = %path.display(),
            color_mode = %config.color_mode,
            scan_order = %config.scan_order,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration from the file named by `IMAGEHEX_CONFIG`.
    ///
    /// Falls back to defaults when the variable is unset, or with a warning
    /// when the file cannot be read or parsed.
    pub fn load_from_env() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load_or_default(Path::new(&path)),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`, using defaults if that fails
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Apply command-line overrides on top of this configuration
    pub fn with_overrides(
        mut self,
        color_mode: Option<ColorMode>,
        scan_order: Option<ScanOrder>,
    ) -> Self {
        if let Some(mode) = color_mode {
            self.color_mode = mode;
        }
        if let Some(order) = scan_order {
            self.scan_order = order;
        }
        self
    }
}
