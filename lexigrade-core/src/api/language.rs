//! Language type for the API

use crate::api::Error;
use std::fmt;
use std::str::FromStr;

/// Supported languages for readability scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// American English
    #[default]
    EnglishUs,
}

impl Language {
    /// Every supported language
    pub const ALL: [Language; 1] = [Language::EnglishUs];

    /// Get the locale code
    pub fn code(&self) -> &'static str {
        match self {
            Language::EnglishUs => "en-US",
        }
    }

    /// Get the full language name
    pub fn name(&self) -> &'static str {
        match self {
            Language::EnglishUs => "English (US)",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_lowercase().as_str() {
            "en" | "en-us" | "en_us" | "eng" | "english" => Ok(Language::EnglishUs),
            _ => Err(Error::InvalidLanguage(code.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
