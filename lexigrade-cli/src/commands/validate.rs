//! Validate command implementation

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use lexigrade_core::{Dictionary, DictionaryCheck};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the easy-word list to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub dictionary: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating dictionary: {}", self.dictionary.display());

        let contents = FileReader::read_text(&self.dictionary)?;
        let check = Dictionary::check(&contents);
        println!("{}", render_check(&check));

        if check.is_valid() {
            Ok(())
        } else if check.problems.is_empty() {
            Err(CliError::InvalidDictionary("no entries found".to_string()).into())
        } else {
            Err(CliError::InvalidDictionary(format!(
                "{} malformed line(s)",
                check.problems.len()
            ))
            .into())
        }
    }
}

fn render_check(check: &DictionaryCheck) -> String {
    let mut lines = Vec::new();
    if check.is_valid() {
        lines.push("✓ Dictionary is valid!".to_string());
    } else {
        lines.push("✗ Dictionary is invalid!".to_string());
    }
    lines.push(format!("  Entries: {}", check.entries));
    lines.push(format!("  Duplicates: {}", check.duplicates));
    for (line, reason) in &check.problems {
        lines.push(format!("  Line {line}: {reason}"));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args_for(contents: &str) -> (NamedTempFile, ValidateArgs) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        let args = ValidateArgs {
            dictionary: file.path().to_path_buf(),
        };
        (file, args)
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            dictionary: PathBuf::from("words.txt"),
        };
        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("words.txt"));
    }

    #[test]
    fn test_valid_dictionary() {
        let (_file, args) = args_for("# easy words\nthe\ncat\nThe\n\ndog\n");
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_malformed_dictionary() {
        let (_file, args) = args_for("the\nice cream\ncat\n");
        let error = args.execute().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::InvalidDictionary(_))
        ));
    }

    #[test]
    fn test_empty_dictionary() {
        let (_file, args) = args_for("# nothing here\n\n");
        let error = args.execute().unwrap_err();
        assert!(error.to_string().contains("no entries"));
    }

    #[test]
    fn test_missing_file() {
        let args = ValidateArgs {
            dictionary: PathBuf::from("/nonexistent/words.txt"),
        };
        assert!(args.execute().is_err());
    }

    #[test]
    fn test_render_check() {
        let check = Dictionary::check("the\nthe\nice cream\n");
        let rendered = render_check(&check);
        assert!(rendered.contains("invalid"));
        assert!(rendered.contains("Entries: 1"));
        assert!(rendered.contains("Duplicates: 1"));
        assert!(rendered.contains("Line 3"));
    }
}
