//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use lexigrade_core::{GradeConsensus, ReadabilityReport};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs every report in one array
pub struct JsonFormatter<W: Write> {
    writer: W,
    float_grade: bool,
    pretty: bool,
    entries: Vec<ReportEntry>,
}

/// One element of the JSON array
#[derive(Debug, Serialize)]
pub struct ReportEntry {
    /// Input the report belongs to
    pub source: String,
    /// Consensus in the requested form
    pub text_standard: GradeConsensus,
    /// Full report
    #[serde(flatten)]
    pub report: ReadabilityReport,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, float_grade: bool, pretty: bool) -> Self {
        Self {
            writer,
            float_grade,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: &str, report: &ReadabilityReport) -> Result<()> {
        self.entries.push(ReportEntry {
            source: source.to_string(),
            text_standard: report.consensus.to_consensus(self.float_grade),
            report: report.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
