use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DIGIT_PLACEHOLDER, SOURCE_PATH_TEMPLATE};
use crate::data::model::DigitLabel;
use crate::error::DatasetError;

/// Where the per-digit source images are found.
///
/// Grid geometry and thresholds are fixed in [`crate::constants`]; only the
/// location of the inputs is configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory the source template is resolved against.
    pub data_root: PathBuf,
    /// Relative path of one digit's image, with `{DIGIT}` as placeholder.
    pub source_template: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("."),
            source_template: SOURCE_PATH_TEMPLATE.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Configuration rooted at `data_root` with the default template.
    pub fn with_root(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, DatasetError> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            DatasetError::Config(format!("reading '{}': {err}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|err| {
            DatasetError::Config(format!("parsing '{}': {err}", path.display()))
        })?;
        if !config.source_template.contains(DIGIT_PLACEHOLDER) {
            return Err(DatasetError::Config(format!(
                "source_template '{}' lacks the {DIGIT_PLACEHOLDER} placeholder",
                config.source_template
            )));
        }
        Ok(config)
    }

    /// Path of the source image for `label`.
    pub fn source_path(&self, label: DigitLabel) -> PathBuf {
        let relative = self
            .source_template
            .replace(DIGIT_PLACEHOLDER, &label.to_string());
        self.data_root.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_template_resolves_per_digit() {
        let config = PipelineConfig::with_root("/data");
        let label = DigitLabel::new(7).unwrap();
        assert_eq!(
            config.source_path(label),
            PathBuf::from("/data/raw_data/usps_7.jpg")
        );
    }

    #[test]
    fn json_file_fills_missing_fields_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pipeline.json");
        std::fs::write(&path, r#"{ "data_root": "/srv/usps" }"#).unwrap();

        let config = PipelineConfig::from_json_file(&path).unwrap();
        assert_eq!(config.data_root, PathBuf::from("/srv/usps"));
        assert_eq!(config.source_template, SOURCE_PATH_TEMPLATE);
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pipeline.json");
        std::fs::write(&path, r#"{ "source_template": "digits.jpg" }"#).unwrap();

        let err = PipelineConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Config(_)));
    }
}
