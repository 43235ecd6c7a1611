use crate::analytics::{count_sentiments, negativity_percentage};
use crate::context::AnalysisRequest;
use crate::core::CommentRecord;
use crate::io::output::{CountSummary, OutputWriter};
use crate::observability::{set_phase, AnalysisPhase};
use anyhow::Result;

pub fn run(
    request: &AnalysisRequest,
    records: &[CommentRecord],
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let label = &request.config.sentiment.negative_label;
    let summary = CountSummary::new("Sentiment")
        .with_counts(count_sentiments(records))
        .with_metric("negativity_percentage", negativity_percentage(records, label));

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    writer.write_summary(&summary)
}
