use clap::{Args, Parser, Subcommand};
use log::info;
use std::io::Write;
use std::path::PathBuf;

use crate::config::{LimitValue, Settings, WordList};
use crate::counters::InputCounters;
use crate::error::StockMetaError;
use crate::{csv_export, formatter, RawInput};

/// CLI for stockmeta: clean up titles and keywords for stock-media uploads.
#[derive(Parser, Debug)]
#[command(
    name = "stockmeta",
    version,
    about = "Format stock-media titles and keywords and export them as CSV"
)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./stockmeta.toml when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the formatted title and keywords
    Format {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        options: FormatOptions,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Format the input and export it as a metadata CSV
    Csv {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        options: FormatOptions,
        /// Value of the Category column
        #[arg(long)]
        category: Option<String>,
        /// Value of the Filename column
        #[arg(long)]
        filename: Option<String>,
        /// Write the CSV to this file instead of stdout (e.g. metadata.csv)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show character and tag counters for the input as typed
    Count {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        options: FormatOptions,
    },
}

/// Raw submission fields
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Raw title
    #[arg(long, default_value = "")]
    pub title: String,
    /// Comma-separated keywords
    #[arg(long, default_value = "")]
    pub keywords: String,
}

/// Formatting options; each overrides the settings file and environment
#[derive(Args, Debug, Clone, Default)]
pub struct FormatOptions {
    /// Maximum number of keywords (blank or non-numeric means 50)
    #[arg(long, allow_hyphen_values = true)]
    pub max_tags: Option<String>,
    /// Maximum title length in characters (blank or non-numeric means 200)
    #[arg(long, allow_hyphen_values = true)]
    pub max_title_length: Option<String>,
    /// Text placed before the title
    #[arg(long)]
    pub prefix: Option<String>,
    /// Text placed after the title
    #[arg(long)]
    pub suffix: Option<String>,
    /// Comma-separated keywords to drop
    #[arg(long)]
    pub negative_keywords: Option<String>,
    /// Comma-separated words to strip from the title
    #[arg(long)]
    pub negative_title_words: Option<String>,
}

impl FormatOptions {
    /// Overlays the options given on the command line onto `settings`.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(max_tags) = &self.max_tags {
            settings.max_tags = Some(LimitValue::Text(max_tags.clone()));
        }
        if let Some(max_title_length) = &self.max_title_length {
            settings.max_title_length = Some(LimitValue::Text(max_title_length.clone()));
        }
        if let Some(prefix) = &self.prefix {
            settings.prefix = prefix.clone();
        }
        if let Some(suffix) = &self.suffix {
            settings.suffix = suffix.clone();
        }
        if let Some(words) = &self.negative_keywords {
            settings.negative_keywords = WordList::from(words.clone());
        }
        if let Some(words) = &self.negative_title_words {
            settings.negative_title_words = WordList::from(words.clone());
        }
    }
}

/// Executes a parsed command, writing user-facing output to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<(), StockMetaError> {
    let mut settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Format {
            input,
            options,
            json,
        } => {
            options.apply(&mut settings);
            let raw = RawInput::new(input.title, input.keywords);
            let result = formatter::format(&raw, &settings.format_config());

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            } else {
                writeln!(out, "{}", result.title)?;
                writeln!(out, "{}", result.keywords_joined())?;
            }
        }
        Commands::Csv {
            input,
            options,
            category,
            filename,
            output,
        } => {
            options.apply(&mut settings);
            if let Some(category) = category {
                settings.category = category;
            }
            if let Some(filename) = filename {
                settings.filename = Some(filename);
            }

            let raw = RawInput::new(input.title, input.keywords);
            let result = formatter::format(&raw, &settings.format_config());
            let csv = csv_export::encode(&result, &settings.category, settings.filename());

            match output {
                Some(path) => {
                    std::fs::write(&path, &csv)?;
                    info!("wrote {} bytes to {}", csv.len(), path.display());
                    writeln!(out, "Saved metadata to {}", path.display())?;
                }
                None => writeln!(out, "{}", csv)?,
            }
        }
        Commands::Count { input, options } => {
            options.apply(&mut settings);
            let config = settings.format_config();
            let raw = RawInput::new(input.title, input.keywords);
            let counters = InputCounters::measure(&raw);
            let status = counters.exceeds(&config);

            writeln!(
                out,
                "title: {}/{}{}",
                counters.title_chars,
                config.max_title_length(),
                over_marker(status.title_over)
            )?;
            writeln!(
                out,
                "tags: {}/{}{}",
                counters.tag_count,
                config.max_tags(),
                over_marker(status.tags_over)
            )?;
        }
    }

    Ok(())
}

fn over_marker(over: bool) -> &'static str {
    if over {
        " (over limit)"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_override_settings() {
        let mut settings = Settings {
            max_tags: Some(LimitValue::Integer(10)),
            prefix: "Old".to_string(),
            ..Default::default()
        };
        let options = FormatOptions {
            max_tags: Some("3".to_string()),
            negative_keywords: Some("cat, dog".to_string()),
            ..Default::default()
        };

        options.apply(&mut settings);
        let config = settings.format_config();
        assert_eq!(config.max_tags(), 3);
        assert_eq!(config.prefix(), "Old");
        assert_eq!(config.negative_keywords(), ["cat", "dog"]);
    }

    #[test]
    fn test_parse_csv_command() {
        let cli = Cli::parse_from([
            "stockmeta",
            "csv",
            "--title",
            "Sunset",
            "--keywords",
            "sun, sea",
            "--max-tags",
            "-1",
            "--category",
            "Nature",
        ]);
        match cli.command {
            Commands::Csv {
                input,
                options,
                category,
                filename,
                output,
            } => {
                assert_eq!(input.title, "Sunset");
                assert_eq!(options.max_tags.as_deref(), Some("-1"));
                assert_eq!(category.as_deref(), Some("Nature"));
                assert!(filename.is_none());
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_over_marker() {
        assert_eq!(over_marker(true), " (over limit)");
        assert_eq!(over_marker(false), "");
    }
}
