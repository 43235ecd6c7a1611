use crate::core::{
    DEFAULT_NEGATIVE_LABEL, DEFAULT_PARTITIONS, DEFAULT_THRESHOLD, DEFAULT_TOP_PEAKS,
    DEFAULT_WINDOW_SECONDS,
};
use serde::{Deserialize, Serialize};

/// Score thresholds; a value must be strictly greater to count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_threshold")]
    pub toxicity: f64,

    #[serde(default = "default_threshold")]
    pub scream_index: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            toxicity: default_threshold(),
            scream_index: default_threshold(),
        }
    }
}

/// Peak window detection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeaksConfig {
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,

    #[serde(default = "default_top_peaks")]
    pub top: usize,
}

impl Default for PeaksConfig {
    fn default() -> Self {
        Self {
            window_seconds: default_window_seconds(),
            top: default_top_peaks(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionsConfig {
    #[serde(default = "default_partitions")]
    pub count: usize,
}

impl Default for PartitionsConfig {
    fn default() -> Self {
        Self {
            count: default_partitions(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Label counted by the negativity percentage
    #[serde(default = "default_negative_label")]
    pub negative_label: String,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            negative_label: default_negative_label(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}
fn default_window_seconds() -> u64 {
    DEFAULT_WINDOW_SECONDS
}
fn default_top_peaks() -> usize {
    DEFAULT_TOP_PEAKS
}
fn default_partitions() -> usize {
    DEFAULT_PARTITIONS
}
fn default_negative_label() -> String {
    DEFAULT_NEGATIVE_LABEL.to_string()
}
