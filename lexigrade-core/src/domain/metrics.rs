//! Per-word and per-sentence ratios used by the formulas
//!
//! Every ratio is rounded with [`legacy_round`] before it is returned and
//! yields `0.0` when the text has no words.

use super::rounding::{legacy_round, ratio};
use super::syllables::{syllable_count, SyllableEstimator};
use super::tokenizer::{char_count, letter_count, sentence_count, split_words, word_count};

/// Syllables at or above which a word is a polysyllable
pub const POLYSYLLABLE_THRESHOLD: usize = 3;

/// Ratio primitives over one syllable estimator
#[derive(Clone, Copy)]
pub struct MetricPrimitives<'a> {
    syllables: &'a dyn SyllableEstimator,
}

impl<'a> MetricPrimitives<'a> {
    /// Create primitives backed by the given estimator
    pub fn new(syllables: &'a dyn SyllableEstimator) -> Self {
        Self { syllables }
    }

    /// Total syllables in the text
    pub fn syllable_count(&self, text: &str) -> usize {
        syllable_count(text, self.syllables)
    }

    /// Split words with three or more syllables
    pub fn polysyllable_count(&self, text: &str) -> usize {
        split_words(text)
            .into_iter()
            .filter(|word| self.syllable_count(word) >= POLYSYLLABLE_THRESHOLD)
            .count()
    }

    /// Words per sentence, one decimal
    pub fn average_sentence_length(&self, text: &str) -> f64 {
        legacy_round(ratio(word_count(text, true), sentence_count(text)), 1)
    }

    /// Syllables per word, one decimal
    pub fn average_syllable_per_word(&self, text: &str) -> f64 {
        legacy_round(
            ratio(self.syllable_count(text), word_count(text, true)),
            1,
        )
    }

    /// Characters (spaces excluded) per word, two decimals
    pub fn average_character_per_word(&self, text: &str) -> f64 {
        legacy_round(ratio(char_count(text, true), word_count(text, true)), 2)
    }

    /// Letters per word, two decimals
    pub fn average_letter_per_word(&self, text: &str) -> f64 {
        legacy_round(ratio(letter_count(text, true), word_count(text, true)), 2)
    }

    /// Sentences per word, two decimals
    pub fn average_sentence_per_word(&self, text: &str) -> f64 {
        legacy_round(ratio(sentence_count(text), word_count(text, true)), 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::syllables::EnglishSyllableEstimator;

    const SIMPLE: &str = "The cat sat on the mat. The dog ran to the cat. The cat ran up a tree.";

    #[test]
    fn test_simple_paragraph_ratios() {
        let estimator = EnglishSyllableEstimator::new();
        let metrics = MetricPrimitives::new(&estimator);

        assert_eq!(metrics.syllable_count(SIMPLE), 18);
        assert_eq!(metrics.average_sentence_length(SIMPLE), 6.0);
        assert_eq!(metrics.average_syllable_per_word(SIMPLE), 1.0);
        assert_eq!(metrics.average_character_per_word(SIMPLE), 2.94);
        assert_eq!(metrics.average_letter_per_word(SIMPLE), 2.78);
        assert_eq!(metrics.average_sentence_per_word(SIMPLE), 0.17);
    }

    #[test]
    fn test_polysyllable_count() {
        let estimator = EnglishSyllableEstimator::new();
        let metrics = MetricPrimitives::new(&estimator);

        assert_eq!(metrics.polysyllable_count("The beautiful elephant sat."), 2);
        assert_eq!(metrics.polysyllable_count(SIMPLE), 0);
    }

    #[test]
    fn test_empty_text_yields_zero() {
        let estimator = EnglishSyllableEstimator::new();
        let metrics = MetricPrimitives::new(&estimator);

        assert_eq!(metrics.average_sentence_length(""), 0.0);
        assert_eq!(metrics.average_syllable_per_word(""), 0.0);
        assert_eq!(metrics.average_character_per_word("   "), 0.0);
        assert_eq!(metrics.average_letter_per_word(""), 0.0);
        assert_eq!(metrics.average_sentence_per_word(""), 0.0);
    }
}
