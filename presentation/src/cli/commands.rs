//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the session list
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned list for the terminal
    Text,
    /// Screen state as JSON
    Json,
}

impl From<OutputFormat> for agenda_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => agenda_domain::OutputFormat::Text,
            OutputFormat::Json => agenda_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for agenda
#[derive(Parser, Debug)]
#[command(name = "agenda")]
#[command(author, version, about = "Browse a conference agenda from the terminal")]
#[command(long_about = r#"
Agenda fetches the conference session feed and shows it grouped by date,
with up to three favourite sessions pinned at the top.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./agenda.toml       Project-level config
3. ~/.config/agenda/config.toml   Global config

Example:
  agenda
  agenda --search compose
  agenda --favourite 12 --favourite 7
  agenda --info 12
  agenda --interactive
"#)]
pub struct Cli {
    /// Only show sessions whose speaker or description contains this text
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Mark a session as favourite (can be specified multiple times)
    #[arg(short, long, value_name = "ID")]
    pub favourite: Vec<String>,

    /// Show the detail page of one session
    #[arg(long, value_name = "ID")]
    pub info: Option<String>,

    /// Start the interactive agenda browser
    #[arg(short, long)]
    pub interactive: bool,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Read the session feed from a local JSON file
    #[arg(long, value_name = "PATH", conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Fetch the session feed from this URL
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["agenda"]).unwrap();
        assert!(cli.search.is_none());
        assert!(cli.favourite.is_empty());
        assert!(!cli.interactive);
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_repeated_favourites() {
        let cli =
            Cli::try_parse_from(["agenda", "-f", "1", "--favourite", "2", "-o", "json"]).unwrap();
        assert_eq!(cli.favourite, vec!["1", "2"]);
        assert!(matches!(cli.output, Some(OutputFormat::Json)));
    }

    #[test]
    fn test_file_conflicts_with_url() {
        let result = Cli::try_parse_from([
            "agenda",
            "--file",
            "sessions.json",
            "--url",
            "https://example.com/feed.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            agenda_domain::OutputFormat::from(OutputFormat::Json),
            agenda_domain::OutputFormat::Json
        );
    }
}
