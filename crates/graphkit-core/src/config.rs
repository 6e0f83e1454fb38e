//! Engine configuration for graphkit
//!
//! Configuration is read from a TOML file (`--config` on the CLI). Every
//! field has a default, so an empty file is a valid configuration.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{GraphError, Result};

pub use types::{
    EngineConfig, ExportConfig, RecommendConfig, WalkConfig, CONFIG_FORMAT_VERSION,
    MAX_LABEL_PRECISION, RANKDIRS,
};

impl EngineConfig {
    /// Load configuration from a file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config written by a newer graphkit"
            );
        }

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values no algorithm can honor
    pub fn validate(&self) -> Result<()> {
        if self.walk.steps == 0 {
            bail_invalid!("walk.steps", self.walk.steps);
        }
        self.export.validate()?;
        if !(0.0..=1.0).contains(&self.recommend.min_label_similarity) {
            bail_invalid!(
                "recommend.min_label_similarity",
                self.recommend.min_label_similarity
            );
        }
        Ok(())
    }
}

impl ExportConfig {
    /// Reject a layout direction DOT does not know or a label precision
    /// the formatter cannot render
    pub fn validate(&self) -> Result<()> {
        if !RANKDIRS.contains(&self.rankdir.as_str()) {
            bail_invalid!("export.rankdir", &self.rankdir);
        }
        if self.label_precision > MAX_LABEL_PRECISION {
            bail_invalid!("export.label_precision", self.label_precision);
        }
        Ok(())
    }
}
