//! The combined dashboard report: every analytic over one comment file.

use super::aggregate::{count_sentiments, negativity_percentage, top_authors, AuthorActivity};
use super::peaks::{top_peaks_by_count, PeakOptions, PeakWindow};
use super::scream::{filter_screaming, mean_scream_index, with_scream_index};
use super::threshold::{count_toxic_types, toxic_ratio, ToxicTypeCounts};
use crate::config::AnalyticsConfig;
use crate::core::{CommentRecord, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const TOP_AUTHORS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub source: PathBuf,
    pub total_comments: usize,
    pub toxic_threshold: f64,
    pub scream_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub toxic_type_counts: ToxicTypeCounts,
    pub toxic_ratio: f64,
    pub sentiment_counts: BTreeMap<String, usize>,
    pub negativity_percentage: f64,
    pub mean_scream_index: f64,
    /// True when no comment carried a stored scream index and it was derived from messages.
    pub scream_index_computed: bool,
    pub screaming_comments: usize,
    pub top_authors: Vec<AuthorActivity>,
    pub peaks: Vec<PeakWindow>,
}

/// Run every analytic over `records`. Empty input produces an all-zero report.
pub fn build_report(
    records: &[CommentRecord],
    source: &Path,
    config: &AnalyticsConfig,
) -> Result<AnalysisReport> {
    let _span = tracing::info_span!("build_report", comments = records.len()).entered();
    let thresholds = &config.thresholds;

    let (scored, scream_index_computed) = with_scream_index(records);

    let peaks = if records.iter().any(|r| r.time_elapsed.is_some()) {
        top_peaks_by_count(
            records,
            PeakOptions {
                window_seconds: config.peaks.window_seconds,
                top: config.peaks.top,
            },
        )?
    } else {
        tracing::warn!("no comment carries time_elapsed, skipping peak detection");
        Vec::new()
    };

    Ok(AnalysisReport {
        metadata: ReportMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            source: source.to_path_buf(),
            total_comments: records.len(),
            toxic_threshold: thresholds.toxicity,
            scream_threshold: thresholds.scream_index,
        },
        toxic_type_counts: count_toxic_types(records, thresholds.toxicity),
        toxic_ratio: toxic_ratio(records, thresholds.toxicity),
        sentiment_counts: count_sentiments(records),
        negativity_percentage: negativity_percentage(records, &config.sentiment.negative_label),
        mean_scream_index: mean_scream_index(&scored),
        scream_index_computed,
        screaming_comments: filter_screaming(&scored, thresholds.scream_index).len(),
        top_authors: top_authors(records, TOP_AUTHORS),
        peaks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ToxicType;

    fn records() -> Vec<CommentRecord> {
        vec![
            CommentRecord::new("WHAT")
                .with_author("a")
                .with_time("0:00:10")
                .with_sentiment("NEG")
                .with_score(ToxicType::Insult, 0.9),
            CommentRecord::new("nice")
                .with_author("b")
                .with_time("0:06:00")
                .with_sentiment("POS"),
        ]
    }

    #[test]
    fn test_report_combines_analytics() {
        let report = build_report(&records(), Path::new("in.json"), &AnalyticsConfig::default()).unwrap();

        assert_eq!(report.metadata.total_comments, 2);
        assert_eq!(report.toxic_type_counts.get(&ToxicType::Insult), Some(&1));
        assert_eq!(report.toxic_ratio, 0.5);
        assert_eq!(report.negativity_percentage, 50.0);
        assert!(report.scream_index_computed);
        assert_eq!(report.mean_scream_index, 0.5);
        assert_eq!(report.screaming_comments, 1);
        assert_eq!(report.peaks.len(), 2);
        assert_eq!(report.peaks[0].start, 10);
    }

    #[test]
    fn test_stored_scream_index_is_preferred() {
        let records: Vec<_> = records()
            .into_iter()
            .map(|r| r.with_scream_index(0.2))
            .collect();
        let report = build_report(&records, Path::new("in.json"), &AnalyticsConfig::default()).unwrap();
        assert!(!report.scream_index_computed);
        assert_eq!(report.mean_scream_index, 0.2);
        assert_eq!(report.screaming_comments, 0);
    }

    #[test]
    fn test_empty_input_gives_zero_report() {
        let report = build_report(&[], Path::new("in.json"), &AnalyticsConfig::default()).unwrap();
        assert_eq!(report.metadata.total_comments, 0);
        assert_eq!(report.toxic_ratio, 0.0);
        assert_eq!(report.mean_scream_index, 0.0);
        assert!(report.peaks.is_empty());
        assert!(report.toxic_type_counts.is_empty());
    }
}
