//! Domain layer for readability scoring
//!
//! Pure text metrics: tokenization, syllable estimation, difficult-word
//! classification, the formulas and the consensus vote. Nothing here performs
//! I/O except loading a dictionary file on request.

pub mod aggregator;
pub mod classifier;
pub mod dictionary;
pub mod error;
pub mod formulas;
pub mod inflection;
pub mod metrics;
pub mod normalizer;
pub mod rounding;
pub mod syllables;
pub mod tokenizer;

pub use aggregator::{
    consensus_from_scores, consensus_grade, consensus_votes, grade_label, median_grade,
    median_inputs, mode_grade, Aggregator, GradeConsensus,
};
pub use classifier::{DifficultWordClassifier, DALE_CHALL_THRESHOLD, GUNNING_FOG_THRESHOLD};
pub use dictionary::{Dictionary, DictionaryCheck};
pub use error::DomainError;
pub use formulas::{
    dale_chall_to_grade, flesch_ease_to_grade, grade_suffix, Formula, FormulaEngine,
    FormulaScores,
};
pub use inflection::{EnglishInflector, Singularizer};
pub use metrics::{MetricPrimitives, POLYSYLLABLE_THRESHOLD};
pub use normalizer::LexicalNormalizer;
pub use rounding::legacy_round;
pub use syllables::{syllable_count, EnglishSyllableEstimator, SyllableEstimator};
pub use tokenizer::{
    char_count, letter_count, long_word_count, remove_punctuation, sentence_count,
    split_sentences, split_words, word_count,
};
