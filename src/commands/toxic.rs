use crate::analytics::{count_toxic_types, filter_by_threshold, toxic_ratio};
use crate::context::AnalysisRequest;
use crate::core::{CommentRecord, ToxicType};
use crate::io::output::{CountSummary, OutputWriter};
use crate::observability::{set_phase, AnalysisPhase};
use anyhow::Result;

/// Per-type counts above the threshold, with the share of toxic comments.
pub fn counts(
    request: &AnalysisRequest,
    records: &[CommentRecord],
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let threshold = request.config.thresholds.toxicity;
    let summary = {
        let _phase = set_phase(AnalysisPhase::Analytics);
        let counts = count_toxic_types(records, threshold);
        CountSummary::new("Toxic Comments by Type")
            .with_counts(counts.into_iter().map(|(kind, n)| (kind.as_str(), n)))
            .with_metric("comments", records.len() as f64)
            .with_metric("threshold", threshold)
            .with_metric("toxic_ratio", toxic_ratio(records, threshold))
    };

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    writer.write_summary(&summary)
}

pub fn filter(
    request: &AnalysisRequest,
    records: &[CommentRecord],
    toxic_type: ToxicType,
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let threshold = request.config.thresholds.toxicity;
    let matched = filter_by_threshold(records, toxic_type, threshold);
    tracing::debug!(field = %toxic_type, matched = matched.len(), "filtered comments");

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    writer.write_records(
        &format!("{} > {threshold}", toxic_type.display_name()),
        &matched,
    )
}
