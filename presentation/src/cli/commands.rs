//! CLI command definitions

use clap::{Parser, ValueEnum};
use guide_domain::ChapterId;
use std::path::PathBuf;

/// Output format for guide and search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted terminal text
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for prague-guide
#[derive(Parser, Debug)]
#[command(name = "prague-guide")]
#[command(author, version, about = "Prague visitor guide - local rules, fines and an AI travel assistant")]
#[command(long_about = r#"
Prague Guide prints the visitor guide, searches the public-order regulations
and answers questions through an AI travel assistant.

The AI assistant needs a Gemini API key in $API_KEY (or $GEMINI_API_KEY).
Without one it still runs and tells you it cannot connect.

Configuration files are loaded from (in priority order):
1. --config <path>            Explicit config file
2. ./prague-guide.toml        Project-level config
3. ~/.config/prague-guide/config.toml   Global config

Example:
  prague-guide --search noise
  prague-guide --chapter water
  prague-guide "Can I drink beer in the park?"
  prague-guide --chat
"#)]
pub struct Cli {
    /// Question for the AI guide (prints the reply and exits)
    pub question: Option<String>,

    /// Print regulations matching TERM (case-insensitive)
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Print the whole guide
    #[arg(long)]
    pub guide: bool,

    /// Print a single chapter by name or number
    #[arg(long, value_name = "ID", value_parser = parse_chapter)]
    pub chapter: Option<ChapterId>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Output format for guide and search results
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write diagnostics to daily log files in DIR
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

fn parse_chapter(s: &str) -> Result<ChapterId, String> {
    s.parse::<ChapterId>().map_err(|e| e.to_string())
}

/// What the binary should do for a parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    ShowConfig,
    Chat,
    Ask(String),
    Search(String),
    Chapter(ChapterId),
    Guide,
}

impl Cli {
    /// Resolve the run mode. With no arguments the guide is printed.
    pub fn mode(&self) -> Mode {
        if self.show_config {
            Mode::ShowConfig
        } else if self.chat {
            Mode::Chat
        } else if let Some(question) = &self.question {
            Mode::Ask(question.clone())
        } else if let Some(term) = &self.search {
            Mode::Search(term.clone())
        } else if let Some(id) = self.chapter {
            Mode::Chapter(id)
        } else {
            Mode::Guide
        }
    }
}
