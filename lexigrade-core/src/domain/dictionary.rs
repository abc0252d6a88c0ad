//! Easy-word dictionary
//!
//! A read-only set of lowercase word forms. The built-in Dale-Chall list is
//! parsed once per process and shared through an `Arc`.

use super::error::DomainError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

static EMBEDDED: OnceLock<Arc<Dictionary>> = OnceLock::new();

const EMBEDDED_WORDS: &str = include_str!("../../data/dale_chall_easy_words.txt");

/// Set of words considered easy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

/// Outcome of checking a dictionary source without loading it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryCheck {
    /// Number of distinct valid entries
    pub entries: usize,
    /// Number of entries repeated after lowercasing
    pub duplicates: usize,
    /// Malformed lines as (one-based line number, reason)
    pub problems: Vec<(usize, String)>,
}

impl DictionaryCheck {
    /// Whether the source can be loaded as a dictionary
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty() && self.entries > 0
    }
}

impl Dictionary {
    /// The built-in Dale-Chall easy-word list
    pub fn embedded() -> Arc<Dictionary> {
        EMBEDDED
            .get_or_init(|| {
                let dictionary =
                    Self::parse(EMBEDDED_WORDS).expect("embedded word list should be valid");
                log::debug!("Loaded embedded dictionary with {} words", dictionary.len());
                Arc::new(dictionary)
            })
            .clone()
    }

    /// Build a dictionary from an iterator of words, lowercasing each
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        dictionary.extend(words);
        dictionary
    }

    /// Parse a word list: one word per line, `#` comments and blank lines skipped
    pub fn parse(contents: &str) -> Result<Self, DomainError> {
        let mut words = HashSet::new();

        for (index, line) in contents.lines().enumerate() {
            match Self::parse_line(line) {
                Ok(Some(word)) => {
                    words.insert(word);
                }
                Ok(None) => {}
                Err(reason) => {
                    return Err(DomainError::InvalidDictionaryEntry {
                        line: index + 1,
                        reason,
                    })
                }
            }
        }

        if words.is_empty() {
            return Err(DomainError::EmptyDictionary);
        }

        Ok(Self { words })
    }

    /// Read and parse a word-list file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| DomainError::DictionaryIo {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::parse(&contents)?;
        log::debug!(
            "Loaded dictionary {} with {} words",
            path.display(),
            dictionary.len()
        );
        Ok(dictionary)
    }

    /// Check a word list and collect every problem instead of stopping at the first
    pub fn check(contents: &str) -> DictionaryCheck {
        let mut seen = HashSet::new();
        let mut check = DictionaryCheck::default();

        for (index, line) in contents.lines().enumerate() {
            match Self::parse_line(line) {
                Ok(Some(word)) => {
                    if !seen.insert(word) {
                        check.duplicates += 1;
                    }
                }
                Ok(None) => {}
                Err(reason) => check.problems.push((index + 1, reason)),
            }
        }

        check.entries = seen.len();
        check
    }

    fn parse_line(line: &str) -> Result<Option<String>, String> {
        let entry = line.trim();
        if entry.is_empty() || entry.starts_with('#') {
            return Ok(None);
        }
        if entry.chars().any(char::is_whitespace) {
            return Err(format!("'{entry}' contains whitespace"));
        }
        Ok(Some(entry.to_lowercase()))
    }

    /// Add words, lowercasing each
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty()),
        );
    }

    /// Check whether a canonical (lowercase) form is an easy word
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_embedded_dictionary_contains_common_words() {
        let dictionary = Dictionary::embedded();
        assert!(dictionary.len() > 2000);
        for word in ["the", "cat", "like", "force", "smile", "always"] {
            assert!(dictionary.contains(word), "missing {word}");
        }
        assert!(!dictionary.contains("photosynthesis"));
    }

    #[test]
    fn test_embedded_dictionary_is_shared() {
        let first = Dictionary::embedded();
        let second = Dictionary::embedded();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let dictionary = Dictionary::parse("# easy words\n\nApple\n banana \n").unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("apple"));
        assert!(dictionary.contains("banana"));
    }

    #[test]
    fn test_parse_rejects_multi_word_lines() {
        match Dictionary::parse("apple\nice cream\n") {
            Err(DomainError::InvalidDictionaryEntry { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected InvalidDictionaryEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_list() {
        assert!(matches!(
            Dictionary::parse("# nothing here\n"),
            Err(DomainError::EmptyDictionary)
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "like\nforce").unwrap();

        let dictionary = Dictionary::from_file(file.path()).unwrap();
        assert!(dictionary.contains("like"));
        assert!(dictionary.contains("force"));
    }

    #[test]
    fn test_from_missing_file() {
        let result = Dictionary::from_file("/nonexistent/words.txt");
        assert!(matches!(result, Err(DomainError::DictionaryIo { .. })));
    }

    #[test]
    fn test_check_collects_problems() {
        let check = Dictionary::check("apple\napple\nice cream\nbanana\n");
        assert_eq!(check.entries, 2);
        assert_eq!(check.duplicates, 1);
        assert_eq!(check.problems.len(), 1);
        assert_eq!(check.problems[0].0, 3);
        assert!(!check.is_valid());
    }

    #[test]
    fn test_from_words_lowercases() {
        let dictionary = Dictionary::from_words(["Like", "FORCE"]);
        assert!(dictionary.contains("like"));
        assert!(dictionary.contains("force"));
        assert!(!dictionary.contains("Like"));
    }
}
