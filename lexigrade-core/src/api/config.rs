//! Configuration API for readability analysis

use crate::api::{Error, Language};
use std::path::PathBuf;
use std::str::FromStr;

/// Where the easy-word dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DictionarySource {
    /// Built-in Dale-Chall list
    #[default]
    Embedded,
    /// One word per line, replacing the built-in list
    File(PathBuf),
}

/// Analysis configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) language: Language,
    pub(crate) dictionary: DictionarySource,
    pub(crate) extra_words: Vec<String>,
    pub(crate) threads: Option<usize>, // None = all available threads
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configured language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Configured dictionary source
    pub fn dictionary(&self) -> &DictionarySource {
        &self.dictionary
    }

    /// Words added on top of the dictionary
    pub fn extra_words(&self) -> &[String] {
        &self.extra_words
    }

    /// Thread count for batch analysis
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::Configuration(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        if let Some(word) = self
            .extra_words
            .iter()
            .find(|word| word.trim().is_empty() || word.trim().contains(char::is_whitespace))
        {
            return Err(Error::Configuration(format!(
                "extra word '{word}' must be a single non-empty word"
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    language: Option<String>,
    dictionary: Option<DictionarySource>,
    extra_words: Vec<String>,
    threads: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Load the dictionary from a word-list file
    pub fn dictionary_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary = Some(DictionarySource::File(path.into()));
        self
    }

    /// Set the dictionary source
    pub fn dictionary(mut self, source: DictionarySource) -> Self {
        self.dictionary = Some(source);
        self
    }

    /// Treat additional words as easy
    pub fn extra_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(lang_code) = self.language {
            config.language = Language::from_str(&lang_code)?;
        }

        if let Some(source) = self.dictionary {
            config.dictionary = source;
        }

        config.extra_words = self.extra_words;
        config.threads = self.threads;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.language(), Language::EnglishUs);
        assert_eq!(config.dictionary(), &DictionarySource::Embedded);
        assert!(config.extra_words().is_empty());
        assert_eq!(config.threads(), None);
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .language("en-us")
            .dictionary_file("words.txt")
            .extra_words(["photosynthesis"])
            .threads(Some(2))
            .build()
            .unwrap();

        assert_eq!(
            config.dictionary(),
            &DictionarySource::File(PathBuf::from("words.txt"))
        );
        assert_eq!(config.extra_words(), ["photosynthesis".to_string()]);
        assert_eq!(config.threads(), Some(2));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let result = Config::builder().threads(Some(0)).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_blank_extra_word_rejected() {
        let result = Config::builder().extra_words(["ok", "  "]).build();
        assert!(matches!(result, Err(Error::Configuration(_))));

        let result = Config::builder().extra_words(["two words"]).build();
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let result = Config::builder().language("klingon").build();
        assert!(matches!(result, Err(Error::InvalidLanguage(_))));
    }
}
