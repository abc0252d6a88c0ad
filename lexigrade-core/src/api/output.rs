//! Report types returned by the analyzer

use crate::domain::{FormulaScores, GradeConsensus};
use serde::{Serialize, Serializer};
use std::time::Duration;

/// Full readability report for one text
#[derive(Debug, Clone, Serialize)]
pub struct ReadabilityReport {
    /// Counts and averages the formulas are built from
    pub statistics: TextStatistics,
    /// Every formula score
    pub scores: FormulaScores,
    /// Consensus grade from the vote
    pub consensus: ConsensusGrade,
    /// Median of the grade-like scores
    pub median_grade: f64,
    /// Distinct Dale-Chall difficult words, first occurrence first
    pub difficult_words: Vec<String>,
    /// Processing metadata
    pub metadata: AnalysisMetadata,
}

/// Consensus grade as a number and as a label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusGrade {
    /// Winning grade
    pub grade: f64,
    /// Range label such as "5th and 6th grade"
    pub label: String,
}

impl ConsensusGrade {
    /// Pick the numeric or label form
    pub fn to_consensus(&self, float_output: bool) -> GradeConsensus {
        if float_output {
            GradeConsensus::Numeric(self.grade)
        } else {
            GradeConsensus::Label(self.label.clone())
        }
    }
}

/// Text statistics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TextStatistics {
    /// Characters, spaces excluded
    pub characters: usize,
    /// Characters, spaces and punctuation excluded
    pub letters: usize,
    /// Words after punctuation removal
    pub words: usize,
    /// Counted sentences, at least one
    pub sentences: usize,
    /// Estimated syllables
    pub syllables: usize,
    /// Words with three or more syllables
    pub polysyllables: usize,
    /// Words longer than six characters
    pub long_words: usize,
    /// Distinct difficult words at the Dale-Chall threshold
    pub difficult_words: usize,
    /// Words per sentence
    pub average_sentence_length: f64,
    /// Syllables per word
    pub average_syllables_per_word: f64,
}

/// Metadata about the analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisMetadata {
    /// Locale code used for syllables
    pub language: String,
    /// Number of words in the easy-word dictionary
    pub dictionary_words: usize,
    /// Bytes of input text
    pub bytes_processed: usize,
    /// Wall-clock time spent scoring
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}
