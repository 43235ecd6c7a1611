//! Configuration validation that reports every problem at once.

use super::AnalyticsConfig;
use crate::core::{Error, Result, MAX_PARTITIONS};

/// A single configuration problem, located by dotted field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn check_unit_range(field: &'static str, value: f64) -> Option<ValidationIssue> {
    (!(0.0..=1.0).contains(&value)).then(|| ValidationIssue {
        field,
        message: format!("must be between 0.0 and 1.0, got {value}"),
    })
}

fn check_positive(field: &'static str, value: u64) -> Option<ValidationIssue> {
    (value == 0).then(|| ValidationIssue {
        field,
        message: "must be at least 1".to_string(),
    })
}

fn check_at_most(field: &'static str, value: usize, limit: usize) -> Option<ValidationIssue> {
    (value > limit).then(|| ValidationIssue {
        field,
        message: format!("must be at most {limit}, got {value}"),
    })
}

/// Collect every issue in `config`. An empty list means the config is valid.
pub fn validate_config(config: &AnalyticsConfig) -> Vec<ValidationIssue> {
    [
        check_unit_range("thresholds.toxicity", config.thresholds.toxicity),
        check_unit_range("thresholds.scream_index", config.thresholds.scream_index),
        check_positive("peaks.window_seconds", config.peaks.window_seconds),
        check_positive("peaks.top", config.peaks.top as u64),
        check_positive("partitions.count", config.partitions.count as u64),
        check_at_most("partitions.count", config.partitions.count, MAX_PARTITIONS),
        config
            .sentiment
            .negative_label
            .trim()
            .is_empty()
            .then(|| ValidationIssue {
                field: "sentiment.negative_label",
                message: "must not be empty".to_string(),
            }),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// `validate_config` as a `Result`, joining all issues into one error.
pub fn validate_config_result(config: &AnalyticsConfig) -> Result<()> {
    let issues = validate_config(config);
    if issues.is_empty() {
        return Ok(());
    }

    let joined = issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(Error::Configuration(joined))
}
