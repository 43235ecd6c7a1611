//! CLI command implementations.
//!
//! Every analysis command loads the input file once, runs one analytic over
//! the records and hands the result to the writer chosen by the request:
//! - **report**: the combined dashboard
//! - **toxic**: per-type counts and single-type filtering
//! - **scream**: mean, listing and in-place annotation
//! - **sentiment**: label counts and negativity percentage
//! - **timeline**: equal-time partitions and peak windows
//! - **init**: write a default configuration file

pub mod init;
pub mod report;
pub mod scream;
pub mod sentiment;
pub mod timeline;
pub mod toxic;

pub use init::init_config;

use crate::context::{AnalysisRequest, Task};
use crate::core::CommentRecord;
use crate::io::load_records;
use crate::io::output::{create_writer, open_sink, OutputFormat, OutputWriter};
use crate::observability::{set_input, set_phase, AnalysisPhase};
use anyhow::{Context, Result};

/// Run `request` to completion.
pub fn execute(request: &AnalysisRequest) -> Result<()> {
    let _input = set_input(&request.input);
    tracing::info!(task = %request.task, input = %request.input.display(), "running command");

    if request.task == Task::ScreamAnnotate {
        return scream::annotate(request);
    }

    let records = load_input(request)?;
    let mut writer = open_writer(request)?;
    let writer = writer.as_mut();

    match &request.task {
        Task::Report => report::run(request, &records, writer),
        Task::ToxicCounts => toxic::counts(request, &records, writer),
        Task::ToxicFilter { toxic_type } => toxic::filter(request, &records, *toxic_type, writer),
        Task::ScreamMean => scream::mean(request, &records, writer),
        Task::ScreamList => scream::list(request, &records, writer),
        Task::Sentiment => sentiment::run(request, &records, writer),
        Task::Partitions => timeline::partitions(request, &records, writer),
        Task::Peaks { label } => timeline::peaks(request, &records, label.as_deref(), writer),
        Task::ScreamAnnotate => scream::annotate(request),
    }
}

fn load_input(request: &AnalysisRequest) -> Result<Vec<CommentRecord>> {
    let _phase = set_phase(AnalysisPhase::RecordLoading);
    load_records(&request.input)
        .with_context(|| format!("Failed to load comments from {}", request.input.display()))
}

fn open_writer(request: &AnalysisRequest) -> Result<Box<dyn OutputWriter>> {
    let format = request.output_format();
    if request.output.is_some() && format == OutputFormat::Terminal {
        // No escape codes in files.
        colored::control::set_override(false);
    }

    let sink = open_sink(request.output.as_deref()).with_context(|| match &request.output {
        Some(path) => format!("Failed to create output file {}", path.display()),
        None => "Failed to open stdout".to_string(),
    })?;
    Ok(create_writer(format, sink))
}
