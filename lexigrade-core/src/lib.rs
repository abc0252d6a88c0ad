//! Readability formulas for English text
//!
//! This crate scores text with the classic readability formulas (Flesch
//! Reading Ease, Flesch-Kincaid, SMOG, Coleman-Liau, ARI, Linsear Write,
//! Dale-Chall, Gunning Fog, LIX and RIX) and combines them into a consensus
//! grade.
//!
//! # Architecture
//!
//! - **Domain layer**: tokenization, syllable estimation, difficult-word
//!   classification, the formulas and the consensus vote, all pure functions
//!   over `&str`
//! - **API layer**: configuration, input handling and the
//!   [`ReadabilityAnalyzer`] facade producing a serializable report
//!
//! # Example
//!
//! ```rust
//! use lexigrade_core::{GradeConsensus, Input, ReadabilityAnalyzer};
//!
//! let analyzer = ReadabilityAnalyzer::new();
//! let text = "The cat sat on the mat. The dog ran to the cat. The cat ran up a tree.";
//!
//! assert_eq!(analyzer.sentence_count(text), 3);
//! assert_eq!(analyzer.word_count(text, true), 18);
//!
//! match analyzer.text_standard(text, false) {
//!     GradeConsensus::Label(label) => assert!(label.ends_with(" grade")),
//!     GradeConsensus::Numeric(_) => unreachable!(),
//! }
//!
//! let report = analyzer.analyze(Input::from_text(text)).unwrap();
//! assert_eq!(report.statistics.sentences, 3);
//! ```

pub mod api;
pub mod domain;

pub use api::{
    AnalysisMetadata, Config, ConfigBuilder, ConsensusGrade, DictionarySource,
    Error as ApiError, Input, Language, ReadabilityAnalyzer, ReadabilityReport, TextStatistics,
};
pub use domain::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_module_exports() {
        let _ = legacy_round(1.25, 1);
        let _ = sentence_count("A short test.");
        let _ = Formula::ALL;
        let _ = grade_suffix(1.0);
    }

    #[test]
    fn test_sample_sentence_counts() {
        let text = "This is a sample text.";
        assert_eq!(sentence_count(text), 1);
        assert_eq!(word_count(text, true), 5);
    }
}
