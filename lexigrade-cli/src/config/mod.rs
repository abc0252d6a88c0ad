//! Configuration module
//!
//! Optional TOML file with `[analysis]` and `[output]` tables. Every field
//! has a default, so an empty file is valid. Command-line flags override
//! file values.

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Analysis configuration
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Analysis-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Language code
    pub language: String,

    /// Easy-word list replacing the built-in one
    pub dictionary: Option<PathBuf>,

    /// Additional easy words
    pub extra_words: Vec<String>,

    /// Number of worker threads (0 = auto)
    pub threads: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            dictionary: None,
            extra_words: Vec::new(),
            threads: 0,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Report the consensus grade as a number
    pub float_grade: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            float_grade: false,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load the file if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Worker threads, `None` meaning all available cores
    pub fn threads(&self) -> Option<usize> {
        match self.analysis.threads {
            0 => None,
            n => Some(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.analysis.language, "en-US");
        assert_eq!(config.output.default_format, "text");
        assert_eq!(config.threads(), None);
    }

    #[test]
    fn test_partial_tables() {
        let config = CliConfig::parse(
            r#"
[analysis]
threads = 4
extra_words = ["photosynthesis"]

[output]
float_grade = true
"#,
        )
        .unwrap();

        assert_eq!(config.threads(), Some(4));
        assert_eq!(config.analysis.extra_words, vec!["photosynthesis"]);
        assert_eq!(config.analysis.language, "en-US");
        assert!(config.output.float_grade);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = CliConfig::parse("[analysis]\nchunk_size = 10\n");
        let error = result.unwrap_err();
        assert!(error.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ndefault_format = \"json\"").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.default_format, "json");
    }

    #[test]
    fn test_missing_file() {
        let result = CliConfig::load(Some(Path::new("/nonexistent/lexigrade.toml")));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file"));
    }
}
