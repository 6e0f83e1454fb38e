//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Layout directions accepted by the DOT `rankdir` attribute
pub const RANKDIRS: &[&str] = &["LR", "RL", "TB", "BT"];

/// Largest weight-label precision; f64 carries at most 17 significant digits
pub const MAX_LABEL_PRECISION: usize = 17;

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Random walk defaults
    #[serde(default)]
    pub walk: WalkConfig,

    /// Diagram export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Product recommendation settings
    #[serde(default)]
    pub recommend: RecommendConfig,
}

/// Configuration for random walks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Number of positions to produce, including the start node
    #[serde(default = "default_walk_steps")]
    pub steps: usize,

    /// Fixed RNG seed; walks are nondeterministic when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Configuration for diagram export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Digits after the decimal point in weight labels
    #[serde(default = "default_label_precision")]
    pub label_precision: usize,

    /// DOT layout direction
    #[serde(default = "default_rankdir")]
    pub rankdir: String,
}

/// Configuration for product recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Number of recommendations returned when the caller gives no limit
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Minimum label overlap (Jaccard, 0.0-1.0) for label-derived similarity edges
    #[serde(default = "default_min_label_similarity")]
    pub min_label_similarity: f64,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_walk_steps() -> usize {
    10
}

fn default_label_precision() -> usize {
    1
}

fn default_rankdir() -> String {
    "LR".to_string()
}

fn default_top_n() -> usize {
    5
}

fn default_min_label_similarity() -> f64 {
    0.5
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            version: CONFIG_FORMAT_VERSION,
            walk: WalkConfig::default(),
            export: ExportConfig::default(),
            recommend: RecommendConfig::default(),
        }
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        WalkConfig {
            steps: default_walk_steps(),
            seed: None,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            label_precision: default_label_precision(),
            rankdir: default_rankdir(),
        }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        RecommendConfig {
            top_n: default_top_n(),
            min_label_similarity: default_min_label_similarity(),
        }
    }
}
