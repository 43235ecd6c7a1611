use crate::analytics::{AnalysisReport, PeakWindow, TimePartition};
use crate::common::{escape_markdown_cell, truncate_chars};
use crate::core::{format_elapsed, format_seconds, CommentRecord};
use crate::io::output::{CountSummary, OutputWriter};
use std::io::Write;

const MESSAGE_WIDTH: usize = 80;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let meta = &report.metadata;
        writeln!(self.writer, "# Comment Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Source: `{}`", meta.source.display())?;
        writeln!(
            self.writer,
            "Generated: {}",
            meta.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", meta.version)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_overview(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Overview")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        let rows = [
            ("Comments", report.metadata.total_comments.to_string()),
            (
                "Toxic comments",
                format!(
                    "{:.1}% (> {})",
                    report.toxic_ratio * 100.0,
                    report.metadata.toxic_threshold
                ),
            ),
            ("Negativity", format!("{:.1}%", report.negativity_percentage)),
            (
                "Mean scream index",
                format!(
                    "{:.3}{}",
                    report.mean_scream_index,
                    if report.scream_index_computed { " (computed)" } else { "" }
                ),
            ),
            ("Screaming comments", report.screaming_comments.to_string()),
        ];
        for (metric, value) in rows {
            writeln!(self.writer, "| {metric} | {value} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_count_table(
        &mut self,
        heading: &str,
        label: &str,
        counts: impl IntoIterator<Item = (String, usize)>,
    ) -> anyhow::Result<()> {
        let counts: Vec<_> = counts.into_iter().collect();
        writeln!(self.writer, "## {heading}")?;
        writeln!(self.writer)?;
        if counts.is_empty() {
            writeln!(self.writer, "_None._")?;
            writeln!(self.writer)?;
            return Ok(());
        }
        writeln!(self.writer, "| {label} | Count |")?;
        writeln!(self.writer, "|------|-------|")?;
        for (name, count) in counts {
            writeln!(self.writer, "| {} | {count} |", escape_markdown_cell(&name))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_peak_table(&mut self, peaks: &[PeakWindow], label: Option<&str>) -> anyhow::Result<()> {
        match label {
            Some(label) => {
                writeln!(self.writer, "| Window | Comments | {label} | Ratio |")?;
                writeln!(self.writer, "|--------|----------|------|-------|")?;
                for p in peaks {
                    writeln!(
                        self.writer,
                        "| {} - {} | {} | {} | {:.2} |",
                        format_seconds(p.start),
                        format_seconds(p.end),
                        p.count,
                        p.sentiment_match_count,
                        p.ratio()
                    )?;
                }
            }
            None => {
                writeln!(self.writer, "| Window | Comments |")?;
                writeln!(self.writer, "|--------|----------|")?;
                for p in peaks {
                    writeln!(
                        self.writer,
                        "| {} - {} | {} |",
                        format_seconds(p.start),
                        format_seconds(p.end),
                        p.count
                    )?;
                }
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_overview(report)?;
        self.write_count_table(
            "Toxic Types",
            "Type",
            report
                .toxic_type_counts
                .iter()
                .map(|(kind, &n)| (kind.display_name(), n)),
        )?;
        self.write_count_table(
            "Sentiment",
            "Label",
            report.sentiment_counts.iter().map(|(k, &n)| (k.clone(), n)),
        )?;
        self.write_count_table(
            "Most Active Authors",
            "Author",
            report.top_authors.iter().map(|a| (a.author.clone(), a.comments)),
        )?;
        if !report.peaks.is_empty() {
            writeln!(self.writer, "## Peak Activity")?;
            writeln!(self.writer)?;
            self.write_peak_table(&report.peaks, None)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &CountSummary) -> anyhow::Result<()> {
        self.write_count_table(
            &summary.title,
            "Value",
            summary.counts.iter().map(|(k, &n)| (k.clone(), n)),
        )?;
        for (name, value) in &summary.metrics {
            writeln!(self.writer, "- **{name}**: {value:.3}")?;
        }
        if !summary.metrics.is_empty() {
            writeln!(self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_partitions(&mut self, partitions: &[TimePartition]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Time Partitions")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Start | End | Comments |")?;
        writeln!(self.writer, "|---|-------|-----|----------|")?;
        for p in partitions {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                p.index + 1,
                format_elapsed(p.start),
                format_elapsed(p.end),
                p.len()
            )?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_peaks(&mut self, peaks: &[PeakWindow], label: Option<&str>) -> anyhow::Result<()> {
        match label {
            Some(label) => writeln!(self.writer, "## {label} Peaks")?,
            None => writeln!(self.writer, "## Activity Peaks")?,
        }
        writeln!(self.writer)?;
        self.write_peak_table(peaks, label)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_records(&mut self, title: &str, records: &[&CommentRecord]) -> anyhow::Result<()> {
        writeln!(self.writer, "## {title} ({} comments)", records.len())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Time | Author | Sentiment | Top score | Message |")?;
        writeln!(self.writer, "|------|--------|-----------|-----------|---------|")?;
        for record in records {
            let top = record
                .strongest_score()
                .map(|(kind, score)| format!("{kind} {score:.2}"))
                .unwrap_or_default();
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                record.time_elapsed.as_deref().unwrap_or(""),
                escape_markdown_cell(&record.author),
                record.sentiment.as_deref().unwrap_or(""),
                top,
                escape_markdown_cell(&truncate_chars(&record.message, MESSAGE_WIDTH))
            )?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
