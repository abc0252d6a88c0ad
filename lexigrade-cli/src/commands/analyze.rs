//! Analyze command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use lexigrade_core::{Config, Input, ReadabilityAnalyzer};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Language code
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "LEXIGRADE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Easy-word list replacing the built-in Dale-Chall list
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Report the consensus grade as a number instead of a label
    #[arg(long)]
    pub float: bool,

    /// Number of worker threads (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one block of scores per file
    Text,
    /// JSON array of full reports
    Json,
    /// Markdown score tables
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(CliError::ConfigError(format!(
                "unknown output format '{other}'"
            ))),
        }
    }
}

/// Settings after merging the config file with command-line flags
#[derive(Debug)]
struct Settings {
    format: OutputFormat,
    float_grade: bool,
    pretty_json: bool,
    threads: usize,
    config: Config,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting readability analysis");
        log::debug!("Arguments: {:?}", self);

        let file_config = CliConfig::load(self.config.as_deref())?;
        let settings = self.merge(&file_config)?;
        log::debug!("Settings: {:?}", settings);

        let analyzer = ReadabilityAnalyzer::with_config(settings.config.clone())
            .context("Failed to create analyzer")?;

        let files = resolve_patterns(&self.input)?;
        log::info!(
            "Analyzing {} file(s) on {} thread(s)",
            files.len(),
            settings.threads
        );

        let texts = FileReader::read_all(&files)?;
        let inputs = texts.into_iter().map(Input::from_text).collect();

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let results = analyzer
            .analyze_batch_with(inputs, |index, _| {
                progress.file_completed(&file_name(&files[index]));
            })
            .context("Failed to run analysis")?;
        progress.finish();

        let mut formatter = self.create_formatter(&settings)?;
        for (path, result) in files.iter().zip(results) {
            let source = path.display().to_string();
            let report = result.with_context(|| format!("Failed to analyze {source}"))?;
            formatter.format_report(&source, &report)?;
        }

        formatter.finish()?;

        log::info!("Analysis complete");
        Ok(())
    }

    /// Merge config file values with command-line flags
    fn merge(&self, file: &CliConfig) -> Result<Settings> {
        let format = match self.format {
            Some(format) => format,
            None => file.output.default_format.parse()?,
        };

        let threads = self
            .threads
            .or(file.threads())
            .unwrap_or_else(num_cpus::get);
        if threads == 0 {
            return Err(CliError::ConfigError("threads must be greater than 0".into()).into());
        }

        let language = self
            .language
            .clone()
            .unwrap_or_else(|| file.analysis.language.clone());

        let mut builder = Config::builder()
            .language(language)
            .extra_words(file.analysis.extra_words.iter().cloned())
            .threads(Some(threads));
        if let Some(dictionary) = self.dictionary.as_ref().or(file.analysis.dictionary.as_ref()) {
            builder = builder.dictionary_file(dictionary);
        }
        let config = builder.build().context("Invalid analysis settings")?;

        Ok(Settings {
            format,
            float_grade: self.float || file.output.float_grade,
            pretty_json: file.output.pretty_json,
            threads,
            config,
        })
    }

    /// Create the formatter for the chosen format and destination
    fn create_formatter(&self, settings: &Settings) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match settings.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, settings.float_grade)),
            OutputFormat::Json => Box::new(JsonFormatter::new(
                writer,
                settings.float_grade,
                settings.pretty_json,
            )),
            OutputFormat::Markdown => {
                Box::new(MarkdownFormatter::new(writer, settings.float_grade))
            }
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second initialization (tests) keeps the first logger
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: &str) -> AnalyzeArgs {
        AnalyzeArgs {
            input: vec![input.to_string()],
            output: None,
            format: None,
            language: None,
            config: None,
            dictionary: None,
            float: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_merge_defaults() {
        let settings = args("a.txt").merge(&CliConfig::default()).unwrap();
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(!settings.float_grade);
        assert!(settings.pretty_json);
        assert_eq!(settings.threads, num_cpus::get());
    }

    #[test]
    fn test_flags_override_config() {
        let file = CliConfig::parse(
            "[analysis]\nthreads = 8\n\n[output]\ndefault_format = \"markdown\"\n",
        )
        .unwrap();

        let mut cli = args("a.txt");
        let settings = cli.merge(&file).unwrap();
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.threads, 8);

        cli.format = Some(OutputFormat::Json);
        cli.threads = Some(2);
        cli.float = true;
        let settings = cli.merge(&file).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.threads, 2);
        assert!(settings.float_grade);
    }

    #[test]
    fn test_zero_threads_rejected() {
        let mut cli = args("a.txt");
        cli.threads = Some(0);
        assert!(cli.merge(&CliConfig::default()).is_err());
    }

    #[test]
    fn test_unknown_language_rejected() {
        let mut cli = args("a.txt");
        cli.language = Some("fr".to_string());
        assert!(cli.merge(&CliConfig::default()).is_err());
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("story.txt");
        let output = dir.path().join("report.json");
        fs::write(&input, "The cat sat on the mat. The dog ran to the cat.").unwrap();

        let mut cli = args(&input.to_string_lossy());
        cli.output = Some(output.clone());
        cli.format = Some(OutputFormat::Json);
        cli.execute().unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert!(json[0]["source"].as_str().unwrap().ends_with("story.txt"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name(Path::new("/tmp/dir/story.txt")), "story.txt");
    }
}
