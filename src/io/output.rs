use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::analytics::{AnalysisReport, PeakWindow, TimePartition};
use crate::core::CommentRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// Category counts plus a few headline metrics, e.g. toxic type counts with
/// the overall toxic ratio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountSummary {
    pub title: String,
    pub counts: BTreeMap<String, usize>,
    pub metrics: BTreeMap<String, f64>,
}

impl CountSummary {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_counts<K: ToString>(mut self, counts: impl IntoIterator<Item = (K, usize)>) -> Self {
        self.counts = counts.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        self
    }

    pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(name.into(), value);
        self
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
    fn write_summary(&mut self, summary: &CountSummary) -> anyhow::Result<()>;
    fn write_partitions(&mut self, partitions: &[TimePartition]) -> anyhow::Result<()>;
    fn write_peaks(&mut self, peaks: &[PeakWindow], label: Option<&str>) -> anyhow::Result<()>;
    fn write_records(&mut self, title: &str, records: &[&CommentRecord]) -> anyhow::Result<()>;
}

/// Writer for `format` over `sink`.
pub fn create_writer(format: OutputFormat, sink: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    }
}

/// A file sink when `output` is given, stdout otherwise.
pub fn open_sink(output: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout()),
    })
}
