use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};
use crate::nlp::{ResourceSource, ScoringParams, Thresholds};

/// Analyzer settings. Every field has a default, so an empty JSON object is a
/// valid configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Resource bundle location; `None` selects the built-in bundle. A relative
    /// path read from a config file is resolved against that file's directory.
    pub resource_bundle: Option<PathBuf>,
    pub thresholds: Thresholds,
    pub scoring: ScoringParams,
}

impl AnalyzerConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let f = File::open(path)?;
        let mut config: AnalyzerConfig = serde_json::from_reader(f).map_err(|e| {
            SentimentError::InvalidConfig(format!("{}: {}", path.display(), e))
        })?;
        if let Some(dir) = path.parent() {
            config.resource_bundle = config
                .resource_bundle
                .map(|bundle| if bundle.is_relative() { dir.join(bundle) } else { bundle });
        }
        config.validate()?;
        Ok(config)
    }

    pub fn resource_source(&self) -> ResourceSource {
        ResourceSource::from(self.resource_bundle.clone())
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()
    }
}
