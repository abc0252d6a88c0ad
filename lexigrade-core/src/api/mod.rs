//! High-level API for readability analysis
//!
//! Wraps the domain layer behind a configurable analyzer that accepts text,
//! files, bytes or readers and returns a serializable report.

mod analyzer;
mod config;
mod error;
mod input;
mod language;
mod output;


pub use analyzer::ReadabilityAnalyzer;
pub use config::{Config, ConfigBuilder, DictionarySource};
pub use error::{Error, Result};
pub use input::Input;
pub use language::Language;
pub use output::{AnalysisMetadata, ConsensusGrade, ReadabilityReport, TextStatistics};
