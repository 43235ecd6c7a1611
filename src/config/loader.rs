use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::AnalyticsConfig;
use super::validation::validate_config_result;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".commentscope.toml";

pub const ENV_TOXIC_THRESHOLD: &str = "COMMENTSCOPE_TOXIC_THRESHOLD";
pub const ENV_SCREAM_THRESHOLD: &str = "COMMENTSCOPE_SCREAM_THRESHOLD";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<AnalyticsConfig> {
    let config = toml::from_str::<AnalyticsConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;
    validate_config_result(&config)?;
    Ok(config)
}

/// Load a config file the user named explicitly. Unlike discovery, every
/// failure here is an error.
pub fn load_config_from(path: &Path) -> Result<AnalyticsConfig> {
    let contents = read_config_file(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AnalyticsConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its ancestors, nearest first, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.commentscope.toml` at or above `start`.
pub fn discover_config(start: PathBuf) -> AnalyticsConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AnalyticsConfig::default()
        })
}

/// Override thresholds from `lookup`ed environment variables. Unparseable or
/// out-of-range values are ignored with a warning.
pub fn apply_env_overrides<F>(mut config: AnalyticsConfig, lookup: F) -> AnalyticsConfig
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &str| -> Option<f64> {
        let raw = lookup(key)?;
        match raw.trim().parse::<f64>() {
            Ok(v) if (0.0..=1.0).contains(&v) => Some(v),
            _ => {
                log::warn!("Ignoring {key}={raw:?}: expected a number between 0.0 and 1.0");
                None
            }
        }
    };

    if let Some(v) = read(ENV_TOXIC_THRESHOLD) {
        config.thresholds.toxicity = v;
    }
    if let Some(v) = read(ENV_SCREAM_THRESHOLD) {
        config.thresholds.scream_index = v;
    }
    config
}

/// Resolve the effective configuration: an explicit file if given, otherwise
/// discovery from the current directory, then environment overrides.
pub fn load_config(explicit: Option<&Path>) -> Result<AnalyticsConfig> {
    let config = match explicit {
        Some(path) => load_config_from(path)?,
        None => match std::env::current_dir() {
            Ok(dir) => discover_config(dir),
            Err(e) => {
                log::warn!("Failed to get current directory: {}. Using default config.", e);
                AnalyticsConfig::default()
            }
        },
    };
    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}
