//! Plain text output formatter

use super::{consensus_display, OutputFormatter};
use anyhow::Result;
use lexigrade_core::{Formula, ReadabilityReport};
use std::io::Write;

/// Plain text formatter - one block of scores per source
pub struct TextFormatter<W: Write> {
    writer: W,
    float_grade: bool,
    reports: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, float_grade: bool) -> Self {
        Self {
            writer,
            float_grade,
            reports: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: &str, report: &ReadabilityReport) -> Result<()> {
        if self.reports > 0 {
            writeln!(self.writer)?;
        }
        self.reports += 1;

        let stats = &report.statistics;
        writeln!(self.writer, "== {source} ==")?;
        writeln!(
            self.writer,
            "Consensus grade: {}",
            consensus_display(report, self.float_grade)
        )?;
        writeln!(self.writer, "Median grade: {:.2}", report.median_grade)?;
        for formula in Formula::ALL {
            writeln!(
                self.writer,
                "{:<28} {:>8.2}",
                format!("{}:", formula.name()),
                report.scores.get(formula)
            )?;
        }
        writeln!(
            self.writer,
            "Words: {}, sentences: {}, syllables: {}, difficult words: {}",
            stats.words, stats.sentences, stats.syllables, stats.difficult_words
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
