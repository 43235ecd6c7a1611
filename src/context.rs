//! One command invocation, resolved: which file, which analytic, which
//! settings, and where the output goes. Built once by the binary and passed
//! down explicitly.

use crate::config::AnalyticsConfig;
use crate::core::ToxicType;
use crate::io::output::OutputFormat;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    Report,
    ToxicCounts,
    ToxicFilter { toxic_type: ToxicType },
    ScreamMean,
    ScreamList,
    ScreamAnnotate,
    Sentiment,
    Partitions,
    /// Ranked by count, or by the share of `label` when one is given.
    Peaks { label: Option<String> },
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report => write!(f, "report"),
            Self::ToxicCounts => write!(f, "toxic counts"),
            Self::ToxicFilter { toxic_type } => write!(f, "toxic filter ({toxic_type})"),
            Self::ScreamMean => write!(f, "scream mean"),
            Self::ScreamList => write!(f, "scream list"),
            Self::ScreamAnnotate => write!(f, "scream annotate"),
            Self::Sentiment => write!(f, "sentiment"),
            Self::Partitions => write!(f, "partitions"),
            Self::Peaks { label: Some(label) } => write!(f, "peaks ({label})"),
            Self::Peaks { label: None } => write!(f, "peaks"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub input: PathBuf,
    pub task: Task,
    pub config: AnalyticsConfig,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

impl AnalysisRequest {
    pub fn new(input: impl Into<PathBuf>, task: Task, config: AnalyticsConfig) -> Self {
        Self {
            input: input.into(),
            task,
            config,
            format: None,
            output: None,
        }
    }

    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Explicit format, else the config default, else terminal.
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .or(self.config.output.default_format)
            .unwrap_or_default()
    }
}
