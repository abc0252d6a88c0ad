//! Markdown output formatter

use super::{consensus_display, OutputFormatter};
use anyhow::Result;
use lexigrade_core::{Formula, ReadabilityReport};
use std::io::Write;

/// Markdown formatter - one section with a score table per source
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    float_grade: bool,
    report_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, float_grade: bool) -> Self {
        Self {
            writer,
            float_grade,
            report_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, source: &str, report: &ReadabilityReport) -> Result<()> {
        self.report_count += 1;

        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Consensus grade:** {}",
            consensus_display(report, self.float_grade)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Formula | Score |")?;
        writeln!(self.writer, "|---|---:|")?;
        for formula in Formula::ALL {
            writeln!(
                self.writer,
                "| {} | {:.2} |",
                formula.name(),
                report.scores.get(formula)
            )?;
        }
        writeln!(self.writer, "| Median grade | {:.2} |", report.median_grade)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total documents: {}*", self.report_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexigrade_core::ReadabilityAnalyzer;

    #[test]
    fn test_markdown_output() {
        let analyzer = ReadabilityAnalyzer::new();
        let report = analyzer.analyze_text("The cat sat on the mat. The dog ran to the cat.");

        let mut buffer = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut buffer, false);
        formatter.format_report("sample.txt", &report).unwrap();
        formatter.finish().unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("## sample.txt\n"));
        assert!(output.contains("| Formula | Score |"));
        assert!(output.contains("| LIX |"));
        assert!(output.contains("*Total documents: 1*"));
    }
}
