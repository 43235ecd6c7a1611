use crate::analytics::{AnalysisReport, PeakWindow, TimePartition};
use crate::common::truncate_chars;
use crate::core::{format_elapsed, format_seconds, CommentRecord};
use crate::io::output::{CountSummary, OutputWriter};
use colored::*;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, CellAlignment, ContentArrangement, Table};
use std::io::Write;

const MESSAGE_WIDTH: usize = 60;
const BAR_WIDTH: usize = 30;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn heading(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", text.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(text.chars().count()).blue())?;
        Ok(())
    }

    fn print_counts(&mut self, counts: &[(String, usize)]) -> anyhow::Result<()> {
        if counts.is_empty() {
            writeln!(self.writer, "  {}", "none".dimmed())?;
            return Ok(());
        }
        let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1);
        let width = counts.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        for (name, count) in counts {
            let bar_len = (count * BAR_WIDTH).div_ceil(max);
            writeln!(
                self.writer,
                "  {name:<width$}  {:>6}  {}",
                count,
                "█".repeat(bar_len).cyan()
            )?;
        }
        Ok(())
    }

    fn peak_table(peaks: &[PeakWindow], label: Option<&str>) -> Table {
        let mut table = new_table();
        let mut header = vec!["#", "Window", "Comments"];
        if let Some(label) = label {
            header.push(label);
            header.push("Ratio");
        }
        table.set_header(header);
        for (rank, p) in peaks.iter().enumerate() {
            let mut row = vec![
                Cell::new(rank + 1),
                Cell::new(format!("{} - {}", format_seconds(p.start), format_seconds(p.end))),
                Cell::new(p.count).set_alignment(CellAlignment::Right),
            ];
            if label.is_some() {
                row.push(Cell::new(p.sentiment_match_count).set_alignment(CellAlignment::Right));
                row.push(Cell::new(format!("{:.2}", p.ratio())).set_alignment(CellAlignment::Right));
            }
            table.add_row(row);
        }
        table
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn ratio_colored(ratio: f64) -> ColoredString {
    let text = format!("{:.1}%", ratio * 100.0);
    match ratio {
        r if r < 0.1 => text.green(),
        r if r < 0.3 => text.yellow(),
        _ => text.red(),
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let meta = &report.metadata;
        self.heading("Comment Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "  Source:   {}", meta.source.display())?;
        writeln!(self.writer, "  Comments: {}", meta.total_comments)?;
        writeln!(
            self.writer,
            "  Toxic:    {} (any type > {})",
            ratio_colored(report.toxic_ratio),
            meta.toxic_threshold
        )?;
        writeln!(
            self.writer,
            "  Negative: {}",
            ratio_colored(report.negativity_percentage / 100.0)
        )?;
        writeln!(
            self.writer,
            "  Scream:   mean {:.3}{}, {} comment(s) > {}",
            report.mean_scream_index,
            if report.scream_index_computed { " (computed)" } else { "" },
            report.screaming_comments,
            meta.scream_threshold
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Toxic types:".bold())?;
        let toxic: Vec<_> = report
            .toxic_type_counts
            .iter()
            .map(|(kind, &n)| (kind.display_name(), n))
            .collect();
        self.print_counts(&toxic)?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", "Sentiment:".bold())?;
        let sentiment: Vec<_> = report
            .sentiment_counts
            .iter()
            .map(|(k, &n)| (k.clone(), n))
            .collect();
        self.print_counts(&sentiment)?;
        writeln!(self.writer)?;

        if !report.top_authors.is_empty() {
            writeln!(self.writer, "{}", "Most active authors:".bold())?;
            let authors: Vec<_> = report
                .top_authors
                .iter()
                .map(|a| (a.author.clone(), a.comments))
                .collect();
            self.print_counts(&authors)?;
            writeln!(self.writer)?;
        }

        if !report.peaks.is_empty() {
            writeln!(self.writer, "{}", "Peak activity:".bold())?;
            writeln!(self.writer, "{}", Self::peak_table(&report.peaks, None))?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &CountSummary) -> anyhow::Result<()> {
        self.heading(&summary.title)?;
        let counts: Vec<_> = summary.counts.iter().map(|(k, &n)| (k.clone(), n)).collect();
        self.print_counts(&counts)?;
        for (name, value) in &summary.metrics {
            writeln!(self.writer, "  {}: {:.3}", name.bold(), value)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_partitions(&mut self, partitions: &[TimePartition]) -> anyhow::Result<()> {
        self.heading("Time Partitions")?;
        let mut table = new_table();
        table.set_header(vec!["#", "Start", "End", "Comments"]);
        for p in partitions {
            table.add_row(vec![
                Cell::new(p.index + 1),
                Cell::new(format_elapsed(p.start)),
                Cell::new(format_elapsed(p.end)),
                Cell::new(p.len()).set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_peaks(&mut self, peaks: &[PeakWindow], label: Option<&str>) -> anyhow::Result<()> {
        match label {
            Some(label) => self.heading(&format!("Top {label} Peaks"))?,
            None => self.heading("Top Activity Peaks")?,
        }
        writeln!(self.writer, "{}", Self::peak_table(peaks, label))?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_records(&mut self, title: &str, records: &[&CommentRecord]) -> anyhow::Result<()> {
        self.heading(&format!("{title} ({} comments)", records.len()))?;
        if records.is_empty() {
            writeln!(self.writer, "  {}", "No comments matched.".yellow())?;
            self.writer.flush()?;
            return Ok(());
        }

        let mut table = new_table();
        table.set_header(vec!["Time", "Author", "Sentiment", "Top score", "Scream", "Message"]);
        for record in records {
            table.add_row(vec![
                Cell::new(record.time_elapsed.as_deref().unwrap_or("")),
                Cell::new(&record.author),
                Cell::new(record.sentiment.as_deref().unwrap_or("")),
                Cell::new(
                    record
                        .strongest_score()
                        .map(|(kind, score)| format!("{kind} {score:.2}"))
                        .unwrap_or_default(),
                ),
                Cell::new(
                    record
                        .scream_index
                        .map(|s| format!("{s:.2}"))
                        .unwrap_or_default(),
                ),
                Cell::new(truncate_chars(&record.message, MESSAGE_WIDTH)),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        self.writer.flush()?;
        Ok(())
    }
}
