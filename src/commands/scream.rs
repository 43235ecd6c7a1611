use crate::analytics::{filter_screaming, mean_scream_index, with_scream_index};
use crate::context::AnalysisRequest;
use crate::core::CommentRecord;
use crate::io::annotate_file;
use crate::io::output::{CountSummary, OutputWriter};
use crate::observability::{set_phase, AnalysisPhase};
use anyhow::{Context, Result};

pub fn mean(
    request: &AnalysisRequest,
    records: &[CommentRecord],
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let threshold = request.config.thresholds.scream_index;
    let summary = {
        let _phase = set_phase(AnalysisPhase::Analytics);
        let (scored, computed) = with_scream_index(records);
        if computed {
            tracing::info!("input carries no scream_index, computed from messages");
        }
        CountSummary::new("Scream Index")
            .with_counts([
                ("comments", scored.len()),
                ("screaming", filter_screaming(&scored, threshold).len()),
            ])
            .with_metric("mean_scream_index", mean_scream_index(&scored))
            .with_metric("threshold", threshold)
    };

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    writer.write_summary(&summary)
}

pub fn list(
    request: &AnalysisRequest,
    records: &[CommentRecord],
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let threshold = request.config.thresholds.scream_index;
    let (scored, _) = with_scream_index(records);
    let loud = filter_screaming(&scored, threshold);

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    writer.write_records(&format!("Scream index > {threshold}"), &loud)
}

/// Rewrite the input file with `scream_index` on every comment.
pub fn annotate(request: &AnalysisRequest) -> Result<()> {
    let _phase = set_phase(AnalysisPhase::Annotation);
    let path = &request.input;
    let annotated =
        annotate_file(path).with_context(|| format!("Failed to annotate {}", path.display()))?;

    println!("Annotated {annotated} comments in {}", path.display());
    Ok(())
}
