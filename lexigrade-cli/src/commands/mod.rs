//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use lexigrade_core::{Formula, Language};

pub mod analyze;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score text files with every readability formula
    Analyze(analyze::AnalyzeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Check an easy-word dictionary file
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List readability formulas
    Formulas,

    /// List available output formats
    Formats,

    /// List supported languages
    Languages,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Listing text for this subcommand
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Formulas => {
                out.push_str("Available formulas:\n");
                for formula in Formula::ALL {
                    out.push_str(&format!("  {:<28} - {}\n", formula.id(), formula.name()));
                }
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                out.push_str("  text      - Plain text, one block per file\n");
                out.push_str("  json      - JSON array of full reports\n");
                out.push_str("  markdown  - Markdown score tables\n");
            }
            ListCommands::Languages => {
                out.push_str("Supported languages:\n");
                for language in Language::ALL {
                    out.push_str(&format!("  {:<6} - {}\n", language.code(), language.name()));
                }
            }
        }
        out
    }
}
