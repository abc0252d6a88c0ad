//! Lexical normalization for dictionary lookup
//!
//! Maps a surface form to the canonical form the easy-word dictionary stores:
//! lowercase, singular, and (for longer words) present tense.

use super::dictionary::Dictionary;
use super::inflection::Singularizer;

/// Words shorter than this skip the present-tense heuristic
const MIN_STEM_LENGTH: usize = 6;

/// Canonicalizes words against a dictionary
#[derive(Clone, Copy)]
pub struct LexicalNormalizer<'a> {
    dictionary: &'a Dictionary,
    singularizer: &'a dyn Singularizer,
}

impl<'a> LexicalNormalizer<'a> {
    /// Create a normalizer borrowing the dictionary and singularizer
    pub fn new(dictionary: &'a Dictionary, singularizer: &'a dyn Singularizer) -> Self {
        Self {
            dictionary,
            singularizer,
        }
    }

    /// The dictionary this normalizer probes
    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Lowercase, singularize, then reduce to present tense
    pub fn normalize(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        let singular = self.singularizer.singularize(&lowered);
        self.present_tense(&singular)
    }

    /// Strip `-ed` / `-ing` from words of six characters or more
    ///
    /// `-ed`: keep the `e` when that form is a dictionary word ("smiled" to
    /// "smile"), otherwise drop both letters ("walked" to "walk").
    /// `-ing`: replace with `e` when that form is a dictionary word ("forcing"
    /// to "force"), otherwise drop it ("eating" to "eat").
    pub fn present_tense(&self, word: &str) -> String {
        if word.chars().count() < MIN_STEM_LENGTH {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ed") {
            let with_e = &word[..word.len() - 1];
            if self.dictionary.contains(with_e) {
                return with_e.to_string();
            }
            return stem.to_string();
        }

        if let Some(stem) = word.strip_suffix("ing") {
            let with_e = format!("{stem}e");
            if self.dictionary.contains(&with_e) {
                return with_e;
            }
            return stem.to_string();
        }

        word.to_string()
    }
}
