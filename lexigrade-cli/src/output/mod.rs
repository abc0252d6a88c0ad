//! Output formatting module

use anyhow::Result;
use lexigrade_core::ReadabilityReport;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the report for one source
    fn format_report(&mut self, source: &str, report: &ReadabilityReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Consensus grade as printed by the text and markdown formatters
pub(crate) fn consensus_display(report: &ReadabilityReport, float_grade: bool) -> String {
    report.consensus.to_consensus(float_grade).to_string()
}
