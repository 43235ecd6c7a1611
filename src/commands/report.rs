use crate::analytics::build_report;
use crate::context::AnalysisRequest;
use crate::core::CommentRecord;
use crate::io::output::OutputWriter;
use crate::observability::{set_phase, AnalysisPhase};
use anyhow::{Context, Result};

pub fn run(
    request: &AnalysisRequest,
    records: &[CommentRecord],
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let report = {
        let _phase = set_phase(AnalysisPhase::Analytics);
        build_report(records, &request.input, &request.config).context("Failed to build report")?
    };

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    writer.write_report(&report)
}
