//! Difficult-word classification

use super::normalizer::LexicalNormalizer;
use super::syllables::{syllable_count, SyllableEstimator};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Syllable threshold used by Dale-Chall
pub const DALE_CHALL_THRESHOLD: usize = 2;

/// Syllable threshold used by Gunning Fog
pub const GUNNING_FOG_THRESHOLD: usize = 3;

fn difficult_word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[\w='\u{2018}\u{2019}]+").expect("valid word pattern"))
}

/// Decides which words of a text are difficult
///
/// A word is difficult when its normalized form is not an easy word and the
/// original token has at least `threshold` syllables.
#[derive(Clone, Copy)]
pub struct DifficultWordClassifier<'a> {
    normalizer: LexicalNormalizer<'a>,
    syllables: &'a dyn SyllableEstimator,
}

impl<'a> DifficultWordClassifier<'a> {
    /// Create a classifier from a normalizer and syllable estimator
    pub fn new(normalizer: LexicalNormalizer<'a>, syllables: &'a dyn SyllableEstimator) -> Self {
        Self {
            normalizer,
            syllables,
        }
    }

    /// Check a single token
    pub fn is_difficult(&self, token: &str, threshold: usize) -> bool {
        let normalized = self.normalizer.normalize(token);
        !self.normalizer.dictionary().contains(&normalized)
            && syllable_count(token, self.syllables) >= threshold
    }

    /// Distinct difficult tokens in order of first appearance
    pub fn difficult_words(&self, text: &str, threshold: usize) -> Vec<String> {
        let mut checked = HashSet::new();
        let mut words = Vec::new();

        for token in difficult_word_pattern().find_iter(text).map(|m| m.as_str()) {
            if !checked.insert(token) {
                continue;
            }
            if self.is_difficult(token, threshold) {
                words.push(token.to_string());
            }
        }

        words
    }

    /// Number of distinct difficult tokens, keyed by surface form
    pub fn difficult_word_count(&self, text: &str, threshold: usize) -> usize {
        self.difficult_words(text, threshold).len()
    }
}
