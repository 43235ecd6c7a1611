//! Process-wide setup done once before a command runs.

use crate::config::{load_config, AnalyticsConfig};
use crate::formatting::FormattingConfig;
use crate::observability::{init_logging, install_panic_hook, set_phase, AnalysisPhase};
use anyhow::{Context, Result};
use std::path::Path;

/// Logging, crash reports and color handling.
pub fn init_runtime(verbosity: u8, plain: bool) {
    init_logging(verbosity);
    install_panic_hook();

    let formatting = if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    formatting.apply();
}

/// Config file and environment settings, with the global `--threshold`
/// flag on top.
pub fn resolve_config(explicit: Option<&Path>, threshold: Option<f64>) -> Result<AnalyticsConfig> {
    let _phase = set_phase(AnalysisPhase::ConfigLoading);
    let mut config = match explicit {
        Some(path) => load_config(Some(path))
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => load_config(None).context("Failed to load configuration")?,
    };

    if let Some(threshold) = threshold {
        config.thresholds.toxicity = threshold;
    }
    Ok(config)
}
