use crate::analytics::{AnalysisReport, PeakWindow, TimePartition};
use crate::core::CommentRecord;
use crate::io::output::{CountSummary, OutputWriter};
use serde::Serialize;
use serde_json::json;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.emit(report)
    }

    fn write_summary(&mut self, summary: &CountSummary) -> anyhow::Result<()> {
        self.emit(summary)
    }

    fn write_partitions(&mut self, partitions: &[TimePartition]) -> anyhow::Result<()> {
        self.emit(partitions)
    }

    fn write_peaks(&mut self, peaks: &[PeakWindow], label: Option<&str>) -> anyhow::Result<()> {
        let peaks: Vec<_> = peaks
            .iter()
            .map(|p| {
                json!({
                    "start": p.start,
                    "end": p.end,
                    "count": p.count,
                    "sentiment_match_count": p.sentiment_match_count,
                    "ratio": p.ratio(),
                })
            })
            .collect();
        self.emit(&json!({ "label": label, "peaks": peaks }))
    }

    fn write_records(&mut self, _title: &str, records: &[&CommentRecord]) -> anyhow::Result<()> {
        self.emit(records)
    }
}
