use crate::analytics::{partition_by_time, top_peaks_by_count, top_peaks_by_ratio, PeakOptions};
use crate::context::AnalysisRequest;
use crate::core::CommentRecord;
use crate::io::output::OutputWriter;
use crate::observability::{set_phase, AnalysisPhase};
use anyhow::{Context, Result};

pub fn partitions(
    request: &AnalysisRequest,
    records: &[CommentRecord],
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let count = request.config.partitions.count;
    let partitions = {
        let _phase = set_phase(AnalysisPhase::Analytics);
        partition_by_time(records, count)
            .with_context(|| format!("Failed to split comments into {count} partitions"))?
    };

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    writer.write_partitions(&partitions)
}

/// Busiest windows, or the windows with the highest share of `label`.
pub fn peaks(
    request: &AnalysisRequest,
    records: &[CommentRecord],
    label: Option<&str>,
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let options = PeakOptions {
        window_seconds: request.config.peaks.window_seconds,
        top: request.config.peaks.top,
    };
    let peaks = {
        let _phase = set_phase(AnalysisPhase::Analytics);
        match label {
            Some(label) => top_peaks_by_ratio(records, label, options),
            None => top_peaks_by_count(records, options),
        }
        .context("Failed to detect peak windows")?
    };

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    writer.write_peaks(&peaks, label)
}
