//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "lexigrade.toml")]
    pub output: PathBuf,
}

const TEMPLATE: &str = r#"# lexigrade configuration
#
# Every key is optional. Command-line flags override these values.

[analysis]
# Language code (only "en-US" is supported)
language = "en-US"

# Easy-word list replacing the built-in Dale-Chall list,
# one word per line, '#' starts a comment
# dictionary = "easy_words.txt"

# Extra words treated as easy on top of the dictionary
extra_words = []

# Worker threads for batch analysis (0 = all cores)
threads = 0

[output]
# One of "text", "json", "markdown"
default_format = "text"

# Report the consensus grade as a number instead of a label
float_grade = false

# Pretty print JSON output
pretty_json = true
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to set your defaults");
        println!("2. Use it for analysis:");
        println!(
            "   lexigrade analyze -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    fn template() -> &'static str {
        TEMPLATE
    }
}
