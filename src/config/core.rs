use super::thresholds::{PartitionsConfig, PeaksConfig, SentimentConfig, ThresholdsConfig};
use crate::io::output::OutputFormat;
use serde::{Deserialize, Serialize};

/// Root of `.commentscope.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    #[serde(default)]
    pub peaks: PeaksConfig,

    #[serde(default)]
    pub partitions: PartitionsConfig,

    #[serde(default)]
    pub sentiment: SentimentConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
}
