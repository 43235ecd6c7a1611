//! Analytics configuration loaded from `.commentscope.toml`.
//!
//! Resolution order, lowest precedence first: built-in defaults, the config
//! file (explicit `--config` path or the nearest one found walking up from
//! the working directory), `COMMENTSCOPE_*` environment variables, then CLI
//! flags applied by the caller.

mod core;
mod loader;
mod thresholds;
pub mod validation;

pub use self::core::{AnalyticsConfig, OutputConfig};
pub use loader::{
    apply_env_overrides, directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME, ENV_SCREAM_THRESHOLD, ENV_TOXIC_THRESHOLD,
};
pub use thresholds::{PartitionsConfig, PeaksConfig, SentimentConfig, ThresholdsConfig};
pub use validation::{validate_config, validate_config_result, ValidationIssue};

/// Default contents written by `commentscope init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# commentscope configuration

[thresholds]
# A score must be strictly greater than the threshold to count.
toxicity = 0.7
scream_index = 0.7

[peaks]
window_seconds = 300
top = 5

[partitions]
count = 5

[sentiment]
negative_label = "NEG"

[output]
default_format = "terminal"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_toml_matches_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG_TOML).unwrap();
        let mut expected = AnalyticsConfig::default();
        expected.output.default_format = Some(crate::io::output::OutputFormat::Terminal);
        assert_eq!(parsed, expected);
    }
}
